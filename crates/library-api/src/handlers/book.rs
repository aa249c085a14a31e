//! Book handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use library_entity::book::Book;

use crate::dto::request::{BookRequest, SearchQuery};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /books
pub async fn list_books(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Book>>>, ApiError> {
    let books = state.book_service.list().await?;
    Ok(Json(ApiResponse::ok(books)))
}

/// GET /books/search?name=
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<Book>>>, ApiError> {
    let books = state.book_service.search(&query.name).await?;
    Ok(Json(ApiResponse::ok(books)))
}

/// GET /books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Book>>, ApiError> {
    let id = parse_id(&id)?;
    let book = state.book_service.get(id).await?;
    Ok(Json(ApiResponse::ok(book)))
}

/// POST /books
pub async fn create_book(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<BookRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Book>>), ApiError> {
    let book = state.book_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(book))))
}

/// PUT /books/{id}
pub async fn update_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<BookRequest>,
) -> Result<Json<ApiResponse<Book>>, ApiError> {
    let id = parse_id(&id)?;
    let book = state.book_service.update(&auth, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(book)))
}

/// DELETE /books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.book_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
