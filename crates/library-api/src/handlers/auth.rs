//! Auth handlers: sign-up, sign-in, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{SignInRequest, SignUpRequest};
use crate::dto::response::{ApiResponse, IdentityResponse, MessageResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /auth/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignUpRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MessageResponse>>), ApiError> {
    state
        .authenticator
        .register(&req.username, &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(MessageResponse::new("User created"))),
    ))
}

/// POST /auth/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignInRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let session = state
        .authenticator
        .sign_in(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(TokenResponse {
        access_token: session.token,
        token_type: "Bearer".to_string(),
        expires_at: session.expires_at,
    })))
}

/// GET /auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<IdentityResponse>> {
    Json(ApiResponse::ok(IdentityResponse::from(auth.0)))
}
