//! Author handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use library_entity::author::Author;

use crate::dto::request::{AuthorRequest, SearchQuery};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /authors
pub async fn list_authors(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Author>>>, ApiError> {
    let authors = state.author_service.list().await?;
    Ok(Json(ApiResponse::ok(authors)))
}

/// GET /authors/search?name=
pub async fn search_authors(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<Author>>>, ApiError> {
    let authors = state.author_service.search(&query.name).await?;
    Ok(Json(ApiResponse::ok(authors)))
}

/// GET /authors/{id}
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Author>>, ApiError> {
    let id = parse_id(&id)?;
    let author = state.author_service.get(id).await?;
    Ok(Json(ApiResponse::ok(author)))
}

/// POST /authors
pub async fn create_author(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<AuthorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Author>>), ApiError> {
    let author = state.author_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(author))))
}

/// PUT /authors/{id}
pub async fn update_author(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<AuthorRequest>,
) -> Result<Json<ApiResponse<Author>>, ApiError> {
    let id = parse_id(&id)?;
    let author = state.author_service.update(&auth, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(author)))
}

/// DELETE /authors/{id}
pub async fn delete_author(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.author_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
