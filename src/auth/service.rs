// Registration workflow - business logic layer

use crate::auth::{
    error::AuthError,
    models::{IssuedCredentials, RegisterRequest},
    password::PasswordService,
    repository::{TokenRepository, UserRepository},
    token::TokenService,
};
use chrono::{Duration, Utc};

/// Orchestrates user creation and credential issuance
pub struct AuthService {
    user_repo: UserRepository,
    token_repo: TokenRepository,
    token_service: TokenService,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(
        user_repo: UserRepository,
        token_repo: TokenRepository,
        token_service: TokenService,
    ) -> Self {
        Self {
            user_repo,
            token_repo,
            token_service,
        }
    }

    /// Register a new user and issue an access/refresh token pair.
    ///
    /// Steps run in strict order: create user, mint access token, persist
    /// the refresh record, then mint the refresh token embedding the record
    /// id. Any failure short-circuits the rest; there is no compensation
    /// for a user row committed before a later step fails.
    pub async fn register(&self, request: &RegisterRequest) -> Result<IssuedCredentials, AuthError> {
        let password_hash = PasswordService::hash_password(&request.password)?;

        let user = self
            .user_repo
            .create_user(
                &request.first_name,
                &request.last_name,
                &request.email,
                &password_hash,
            )
            .await?;

        tracing::info!(id = user.id, "user has been registered");

        let access_token = self
            .token_service
            .generate_access_token(user.id, user.role)?;

        let expires_at = Utc::now() + Duration::seconds(self.token_service.refresh_token_ttl());
        let record = self.token_repo.save_refresh_token(user.id, expires_at).await?;

        let refresh_token = self
            .token_service
            .generate_refresh_token(user.id, user.role, record.id)?;

        Ok(IssuedCredentials {
            user_id: user.id,
            access_token,
            refresh_token,
        })
    }
}
