// Authentication module
// Provides opaque bearer-token sessions: signup, login, logout, and request authentication

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod ownership;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{login_handler, logout_handler, signup_handler};
pub use middleware::AuthenticatedUser;
pub use models::{LoginRequest, SignupRequest, Token, User};
pub use ownership::ensure_owner;
pub use service::AuthService;
