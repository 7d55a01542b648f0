// Database repositories for users and refresh tokens

use crate::auth::{
    error::AuthError,
    models::{RefreshTokenRecord, User},
};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// User repository for database operations
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user; role defaults to 'customer' at the column level.
    /// Email uniqueness is enforced by the database constraint, not here.
    pub async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AuthError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (first_name, last_name, email, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, first_name, last_name, email, password_hash, role, created_at",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AuthError::EmailTaken;
                }
            }
            AuthError::Database(e.to_string())
        })?;

        Ok(user)
    }

    /// Find a user by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password_hash, role, created_at \
             FROM users WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(user)
    }
}

/// Token repository for refresh token records
pub struct TokenRepository {
    pool: PgPool,
}

impl TokenRepository {
    /// Create a new TokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a refresh-token record and return it with its generated id.
    /// Must complete before the refresh JWT referencing the id is minted.
    pub async fn save_refresh_token(
        &self,
        user_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshTokenRecord, AuthError> {
        let record = sqlx::query_as::<_, RefreshTokenRecord>(
            "INSERT INTO refresh_tokens (user_id, expires_at) \
             VALUES ($1, $2) \
             RETURNING id, user_id, expires_at, created_at",
        )
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(record)
    }

    /// Count refresh-token records owned by a user
    pub async fn count_for_user(&self, user_id: i32) -> Result<i64, AuthError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM refresh_tokens WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(count.0)
    }
}
