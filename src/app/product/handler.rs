//! 产品处理器

use axum::{extract::State, response::Json};

use super::model::{Product, UpdateProductRequest};
use crate::app::AppState;
use crate::core::{
    error::CoreError,
    extract::{PathParam, ValidatedJson},
    response::MessageResponse,
};
use crate::infrastructure::session::DbSession;

pub async fn create_product(
    State(state): State<AppState>,
    mut session: DbSession,
    ValidatedJson(payload): ValidatedJson<Product>,
) -> Result<Json<Product>, CoreError> {
    let product = state
        .product_service
        .create_product(&mut session, &payload)
        .await?;
    Ok(Json(product))
}

pub async fn get_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
    mut session: DbSession,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.get_product(&mut session, &id).await?;
    Ok(Json(product))
}

pub async fn list_products(
    State(state): State<AppState>,
    mut session: DbSession,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list_products(&mut session).await?;
    Ok(Json(products))
}

pub async fn update_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
    mut session: DbSession,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<Product>, CoreError> {
    let replacement = payload.into_product(id);
    let product = state
        .product_service
        .update_product(&mut session, &replacement)
        .await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
    mut session: DbSession,
) -> Result<Json<MessageResponse>, CoreError> {
    state.product_service.delete_product(&mut session, &id).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
