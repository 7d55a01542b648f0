// Authentication module
// User registration with JWT credential issuance via HTTP-only cookies

pub mod cookies;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use cookies::CookieSettings;
pub use error::AuthError;
pub use handlers::register_handler;
pub use models::{
    IssuedCredentials, RefreshTokenRecord, RegisterRequest, RegisteredResponse, Role, User,
};
pub use service::AuthService;
