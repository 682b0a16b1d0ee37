// Authentication and authorization error types

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::{ApiError, ErrorCode};

/// Authentication error types
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must contain 8-24 characters")]
    InvalidPasswordLength,

    #[error("Email already exists")]
    EmailAlreadyExists,

    /// User or first token could not be stored
    #[error("Signup failed: {0}")]
    SignupFailed(#[source] sqlx::Error),

    #[error("Unknown email")]
    UnknownEmail,

    #[error("Wrong password")]
    WrongPassword,

    /// User lookup or token insert failed during login
    #[error("Login failed: {0}")]
    LoginFailed(#[source] sqlx::Error),

    #[error("Logout failed: {0}")]
    LogoutFailed(#[source] sqlx::Error),

    /// Header missing, malformed, or token unknown
    #[error("Invalid token")]
    InvalidToken,

    /// Token resolved to an owner row that does not exist
    #[error("Token owner does not exist")]
    UserMissing,

    /// Token or owner lookup failed in storage
    #[error("User lookup failed: {0}")]
    UserLookupFailed(#[source] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

impl AuthError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AuthError::InvalidEmail => ErrorCode::InvalidEmail,
            AuthError::InvalidPasswordLength => ErrorCode::InvalidPasswordLength,
            AuthError::EmailAlreadyExists => ErrorCode::EmailAlreadyExists,
            AuthError::SignupFailed(_) => ErrorCode::SignupFailed,
            AuthError::UnknownEmail => ErrorCode::UnknownEmail,
            AuthError::WrongPassword => ErrorCode::WrongPassword,
            AuthError::LoginFailed(_) => ErrorCode::LoginFailed,
            AuthError::LogoutFailed(_) => ErrorCode::LogoutFailed,
            AuthError::InvalidToken => ErrorCode::InvalidToken,
            AuthError::UserMissing | AuthError::UserLookupFailed(_) => ErrorCode::UserLookupFailed,
            AuthError::PasswordHash(_) => ErrorCode::StorageFailure,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let code = err.code();
        ApiError::with_source(code, err)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::InvalidEmail.code().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::EmailAlreadyExists.code().status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::UnknownEmail.code().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AuthError::WrongPassword.code().status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InvalidToken.code().status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::UserMissing.code().status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AuthError::LoginFailed(sqlx::Error::PoolTimedOut).code().status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_token_response() {
        let response = AuthError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
