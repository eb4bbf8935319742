#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tienda_api::{
    config::{ApiConfig, DatabaseConfig, HttpConfig},
    router, AppState, DatabaseManager,
};
use tower::ServiceExt;

/// 基于内存数据库构建完整路由
pub async fn test_app(api: ApiConfig) -> Router {
    let db = DatabaseManager::connect(&DatabaseConfig::in_memory())
        .await
        .expect("failed to open in-memory database");
    db.ensure_schema().await.expect("failed to create tables");

    router(AppState::new(db, &api), &HttpConfig::default())
}

pub async fn default_app() -> Router {
    test_app(ApiConfig::default()).await
}

/// 发送请求并把响应体解析为 JSON（空响应体返回 Null）
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

/// 发送原始文本请求体
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap().status()
}
