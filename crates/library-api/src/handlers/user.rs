//! User administration handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let users = state.user_service.list().await?;
    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let id = parse_id(&id)?;
    let user = state.user_service.get(id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    let user = state
        .user_service
        .create(&auth, &req.username, &req.email, &req.password)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let id = parse_id(&id)?;
    let user = state.user_service.update(&auth, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.user_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
