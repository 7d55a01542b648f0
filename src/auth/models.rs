// Authentication data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// User role stored in the `user_role` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
    Manager,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
        }
    }
}

/// User database model
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Refresh token database model
///
/// A row is persisted before the refresh JWT referencing its id is minted;
/// a refresh token without a matching row is invalid.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshTokenRecord {
    pub id: i32,
    pub user_id: i32,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Registration request DTO
///
/// Fields default to empty strings on missing JSON keys so that absent
/// fields surface as validation errors (400 with structured detail)
/// instead of a body-deserialization rejection.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "lastName is required"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Tokens minted for a freshly registered user
///
/// Transient: these only ever leave the process as cookie values.
#[derive(Debug)]
pub struct IssuedCredentials {
    pub user_id: i32,
    pub access_token: String,
    pub refresh_token: String,
}

/// Registration response body: the new user's id and nothing else
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisteredResponse {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret123".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_missing_password_fails_validation() {
        let request = RegisterRequest {
            password: String::new(),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_short_password_fails_validation() {
        let request = RegisterRequest {
            password: "short".to_string(),
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_malformed_email_fails_validation() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_empty_request_reports_every_field() {
        let request = RegisterRequest {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_role_display_is_lowercase() {
        assert_eq!(Role::Customer.to_string(), "customer");
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Manager.to_string(), "manager");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Customer).unwrap(), "\"customer\"");
    }
}
