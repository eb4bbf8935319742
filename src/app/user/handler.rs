//! 用户处理器

use axum::{extract::State, response::Json};

use super::model::{CreateUserRequest, LoginRequest, LoginResponse, User};
use crate::app::AppState;
use crate::core::{
    error::CoreError,
    extract::{PathParam, ValidatedJson},
    response::MessageResponse,
};
use crate::infrastructure::session::DbSession;

pub async fn create_user(
    State(state): State<AppState>,
    mut session: DbSession,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.create_user(&mut session, &payload).await?;
    Ok(Json(user))
}

pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    mut session: DbSession,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.get_user(&mut session, id).await?;
    Ok(Json(user))
}

pub async fn list_users(
    State(state): State<AppState>,
    mut session: DbSession,
) -> Result<Json<Vec<User>>, CoreError> {
    let users = state.user_service.list_users(&mut session).await?;
    Ok(Json(users))
}

pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    mut session: DbSession,
) -> Result<Json<MessageResponse>, CoreError> {
    state.user_service.delete_user(&mut session, id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

pub async fn login(
    State(state): State<AppState>,
    mut session: DbSession,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, CoreError> {
    let user = state.user_service.login(&mut session, &payload).await?;
    Ok(Json(LoginResponse {
        message: "Authorized".to_string(),
        user_id: user.id,
    }))
}
