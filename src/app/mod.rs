//! 应用层：路由表、共享状态和各资源模块

pub mod product;
pub mod user;

use axum::{
    extract::FromRef,
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ApiConfig, HttpConfig};
use crate::core::{
    error::CoreError, middleware::request_logging_middleware, response::HealthResponse,
};
use crate::infrastructure::{database::DatabaseManager, session::DbSession};
use product::{handler as products, service::ProductService};
use user::{handler as users, service::UserService};

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseManager,
    pub product_service: ProductService,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(db: DatabaseManager, api: &ApiConfig) -> Self {
        Self {
            db,
            product_service: ProductService::new(api.empty_product_list_not_found),
            user_service: UserService::new(),
        }
    }
}

impl FromRef<AppState> for DatabaseManager {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

/// 创建路由。集合路由同时接受带和不带结尾斜杠的路径。
pub fn router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // 产品
        .route("/producto/", post(products::create_product))
        .route("/producto", post(products::create_product))
        .route("/producto/:id", get(products::get_product))
        .route("/productos/", get(products::list_products))
        .route("/productos", get(products::list_products))
        .route(
            "/productos/:id",
            put(products::update_product).delete(products::delete_product),
        )
        // 用户
        .route("/usuario/", post(users::create_user))
        .route("/usuario", post(users::create_user))
        .route(
            "/usuario/:id",
            get(users::get_user).delete(users::delete_user),
        )
        .route("/usuarios/", get(users::list_users))
        .route("/usuarios", get(users::list_users))
        .route("/login/", post(users::login))
        .route("/login", post(users::login))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
        .with_state(state)
}

// 健康检查
async fn health_check(mut session: DbSession) -> Result<Json<HealthResponse>, CoreError> {
    sqlx::query("SELECT 1").execute(&mut *session).await?;
    Ok(Json(HealthResponse::healthy()))
}
