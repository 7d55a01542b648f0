// Authentication error types and the centralized HTTP error handler

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::{error, warn};

/// Errors the registration workflow can surface
///
/// Only validation is handled with structured client detail; everything
/// else maps to an opaque response here. No variant is retried.
#[derive(Debug)]
pub enum AuthError {
    /// Request body failed field validation (reported as 400 with detail)
    Validation(validator::ValidationErrors),
    /// Unique constraint on the email column was violated
    EmailTaken,
    /// Persistence layer failure (detail logged, never sent to clients)
    Database(String),
    /// Argon2 hashing failed
    PasswordHash,
    /// JWT signing failed (key misconfiguration, fatal to the request)
    TokenGeneration(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Validation(errors) => write!(f, "Validation failed: {}", errors),
            AuthError::EmailTaken => write!(f, "Email already exists"),
            AuthError::Database(msg) => write!(f, "Database error: {}", msg),
            AuthError::PasswordHash => write!(f, "Password hashing error"),
            AuthError::TokenGeneration(msg) => write!(f, "Token generation error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<validator::ValidationErrors> for AuthError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AuthError::Validation(errors)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::Validation(errors) => {
                let errors: Vec<_> = errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| {
                            json!({
                                "field": field,
                                "code": e.code.as_ref(),
                                "message": e
                                    .message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string()),
                            })
                        })
                    })
                    .collect();
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            AuthError::EmailTaken => {
                warn!("Registration attempt with an email that already exists");
                (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Email already exists" })),
                )
                    .into_response()
            }
            AuthError::Database(msg) => {
                error!("Database error during registration: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
            AuthError::PasswordHash => {
                error!("Password hashing error during registration");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
            AuthError::TokenGeneration(msg) => {
                error!("Token generation error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl AuthError {
    /// HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::PasswordHash => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::TokenGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 8, message = "password must be at least 8 characters"))]
        password: String,
    }

    #[test]
    fn test_status_codes() {
        let errors = Probe {
            password: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            AuthError::Validation(errors).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::Database("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AuthError::PasswordHash.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AuthError::TokenGeneration("bad key".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_detail_not_exposed() {
        // Internal detail must stay out of client-facing messages
        let display = AuthError::Database("connection refused".to_string()).to_string();
        assert!(display.contains("connection refused"));

        let response = AuthError::Database("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
