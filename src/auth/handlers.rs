// HTTP handlers for authentication endpoints

use crate::auth::{
    error::AuthError,
    models::{RegisterRequest, RegisteredResponse},
};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

/// Register a new user
/// POST /auth/register
///
/// On success the tokens travel only in the two Set-Cookie headers; the
/// body carries nothing but the new user's id.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered, auth cookies set", body = RegisteredResponse),
        (status = 400, description = "Request validation failed", body = String, example = json!({"errors": [{"field": "password", "code": "length", "message": "password must be at least 8 characters"}]})),
        (status = 409, description = "Email already exists", body = String, example = json!({"error": "Email already exists"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "Internal server error"}))
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, CookieJar, Json<RegisteredResponse>), AuthError> {
    payload.validate()?;

    tracing::debug!(
        first_name = %payload.first_name,
        last_name = %payload.last_name,
        email = %payload.email,
        password = "******",
        "new request to register a user"
    );

    let credentials = state.auth.register(&payload).await?;

    let jar = jar
        .add(state.cookies.access_cookie(credentials.access_token))
        .add(state.cookies.refresh_cookie(credentials.refresh_token));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(RegisteredResponse {
            id: credentials.user_id,
        }),
    ))
}
