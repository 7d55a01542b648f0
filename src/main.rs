mod auth;
mod config;
mod db;

use auth::{
    cookies::CookieSettings,
    repository::{TokenRepository, UserRepository},
    service::AuthService,
    token::TokenService,
};
use axum::{routing::post, Router};
use config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::register_handler,
    ),
    components(
        schemas(auth::RegisterRequest, auth::RegisteredResponse)
    ),
    tags(
        (name = "auth", description = "User registration and credential issuance")
    ),
    info(
        title = "Auth API",
        version = "1.0.0",
        description = "User registration service issuing JWT access/refresh credentials via HTTP-only cookies"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub cookies: CookieSettings,
}

impl AppState {
    /// Wire the registration workflow from a pool and configuration
    pub fn new(pool: PgPool, config: &AppConfig) -> Self {
        let token_service = TokenService::new(
            config.jwt_secret.clone(),
            config.access_token_ttl_secs,
            config.refresh_token_ttl_secs,
        );
        let service = AuthService::new(
            UserRepository::new(pool.clone()),
            TokenRepository::new(pool),
            token_service,
        );

        Self {
            auth: Arc::new(service),
            cookies: CookieSettings::from_config(config),
        }
    }
}

/// Creates and configures the application router
/// Maps the auth endpoints and adds CORS middleware
fn create_router(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // API routes
        .route("/auth/register", post(auth::register_handler))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Auth API - Starting...");

    let config = AppConfig::from_env();

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    let state = AppState::new(db_pool, &config);
    let app = create_router(state);

    // Start the Axum server
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Auth API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

#[cfg(test)]
mod tests;
