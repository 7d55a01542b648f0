// JWT minting for access and refresh credentials

use crate::auth::{error::AuthError, models::Role};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Access token claims: stringified user id plus role
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Refresh token claims: access claims extended with the id of the
/// persisted refresh-token row this credential references
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: String,
    pub role: Role,
    pub id: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token service for JWT signing
pub struct TokenService {
    secret: String,
    access_token_ttl: i64,
    refresh_token_ttl: i64,
}

impl TokenService {
    /// Create a TokenService with the signing secret and TTLs in seconds
    pub fn new(secret: String, access_token_ttl: i64, refresh_token_ttl: i64) -> Self {
        Self {
            secret,
            access_token_ttl,
            refresh_token_ttl,
        }
    }

    /// Refresh token lifetime in seconds, shared with the persisted record expiry
    pub fn refresh_token_ttl(&self) -> i64 {
        self.refresh_token_ttl
    }

    /// Mint a short-lived access token for a user
    pub fn generate_access_token(&self, user_id: i32, role: Role) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            iat: now,
            exp: now + self.access_token_ttl,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    /// Mint a long-lived refresh token embedding the persisted record id
    pub fn generate_refresh_token(
        &self,
        user_id: i32,
        role: Role,
        record_id: i32,
    ) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = RefreshClaims {
            sub: user_id.to_string(),
            role,
            id: record_id.to_string(),
            iat: now,
            exp: now + self.refresh_token_ttl,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }
}
