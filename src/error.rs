// Error handling module for the Todo API
// Provides the stable error code enumeration and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use utoipa::ToSchema;

/// Broad failure category. Each category maps to one HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input
    Validation,
    /// Missing resource or unparseable id
    NotFound,
    /// Missing or invalid bearer token
    Authentication,
    /// Valid caller, wrong owner
    Authorization,
    /// Unique constraint violation
    Conflict,
    /// Storage or hashing failure
    Internal,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Authentication | ErrorKind::Authorization => StatusCode::UNAUTHORIZED,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Stable numeric error codes sent to clients as `error_code`.
///
/// Codes are a flat enumeration: they identify the failure cause and are
/// never derived from the HTTP status. Values must not be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    InvalidEmail = 1,
    InvalidPasswordLength = 2,
    EmailAlreadyExists = 4,
    SignupFailed = 5,
    UnknownEmail = 6,
    WrongPassword = 7,
    LoginFailed = 8,
    InvalidToken = 9,
    UserLookupFailed = 10,
    InvalidColor = 11,
    TodoListCreateFailed = 12,
    TodoListNotFound = 13,
    TodoListNotOwned = 14,
    TodoCreateFailed = 15,
    InvalidTodoId = 16,
    TodoNotFound = 17,
    TodoNotOwned = 18,
    TodoUpdateFailed = 19,
    LogoutFailed = 20,
    TodoListDeleteFailed = 21,
    MalformedRequest = 22,
    StorageFailure = 23,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 22] = [
        ErrorCode::InvalidEmail,
        ErrorCode::InvalidPasswordLength,
        ErrorCode::EmailAlreadyExists,
        ErrorCode::SignupFailed,
        ErrorCode::UnknownEmail,
        ErrorCode::WrongPassword,
        ErrorCode::LoginFailed,
        ErrorCode::InvalidToken,
        ErrorCode::UserLookupFailed,
        ErrorCode::InvalidColor,
        ErrorCode::TodoListCreateFailed,
        ErrorCode::TodoListNotFound,
        ErrorCode::TodoListNotOwned,
        ErrorCode::TodoCreateFailed,
        ErrorCode::InvalidTodoId,
        ErrorCode::TodoNotFound,
        ErrorCode::TodoNotOwned,
        ErrorCode::TodoUpdateFailed,
        ErrorCode::LogoutFailed,
        ErrorCode::TodoListDeleteFailed,
        ErrorCode::MalformedRequest,
        ErrorCode::StorageFailure,
    ];

    pub fn as_u16(self) -> u16 {
        self as u16
    }

    pub fn kind(self) -> ErrorKind {
        match self {
            ErrorCode::InvalidEmail
            | ErrorCode::InvalidPasswordLength
            | ErrorCode::InvalidColor
            | ErrorCode::MalformedRequest => ErrorKind::Validation,
            ErrorCode::UnknownEmail
            | ErrorCode::TodoListNotFound
            | ErrorCode::InvalidTodoId
            | ErrorCode::TodoNotFound => ErrorKind::NotFound,
            ErrorCode::WrongPassword | ErrorCode::InvalidToken => ErrorKind::Authentication,
            ErrorCode::TodoListNotOwned | ErrorCode::TodoNotOwned => ErrorKind::Authorization,
            ErrorCode::EmailAlreadyExists => ErrorKind::Conflict,
            ErrorCode::SignupFailed
            | ErrorCode::LoginFailed
            | ErrorCode::UserLookupFailed
            | ErrorCode::TodoListCreateFailed
            | ErrorCode::TodoCreateFailed
            | ErrorCode::TodoUpdateFailed
            | ErrorCode::LogoutFailed
            | ErrorCode::TodoListDeleteFailed
            | ErrorCode::StorageFailure => ErrorKind::Internal,
        }
    }

    pub fn status_code(self) -> StatusCode {
        self.kind().status_code()
    }

    /// Client-facing description. Never contains storage details.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::InvalidEmail => "Invalid email address.",
            ErrorCode::InvalidPasswordLength => "Password must contain 8-24 characters.",
            ErrorCode::EmailAlreadyExists => "An account with this email already exists.",
            ErrorCode::SignupFailed => "We encountered a problem while creating your account.",
            ErrorCode::UnknownEmail => "An account with this email does not exist.",
            ErrorCode::WrongPassword => "Wrong password.",
            ErrorCode::LoginFailed => "We encountered a problem while logging you in.",
            ErrorCode::InvalidToken => "Invalid token.",
            ErrorCode::UserLookupFailed => "Could not fetch user data.",
            ErrorCode::InvalidColor => "Invalid color ID.",
            ErrorCode::TodoListCreateFailed => "Could not create todo list.",
            ErrorCode::TodoListNotFound => "Todo list does not exist.",
            ErrorCode::TodoListNotOwned | ErrorCode::TodoNotOwned => "Unauthorized.",
            ErrorCode::TodoCreateFailed => "Could not create todo.",
            ErrorCode::InvalidTodoId | ErrorCode::TodoNotFound => "Todo does not exist.",
            ErrorCode::TodoUpdateFailed => "We encountered a problem while updating the todo.",
            ErrorCode::LogoutFailed => "We encountered a problem while logging you out.",
            ErrorCode::TodoListDeleteFailed => "Could not delete todo list.",
            ErrorCode::MalformedRequest => "Malformed request body.",
            ErrorCode::StorageFailure => "We encountered a problem while processing your request.",
        }
    }
}

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = 9)]
    pub error_code: u16,
    #[schema(example = "Invalid token.")]
    pub description: String,
}

impl From<ErrorCode> for ErrorResponse {
    fn from(code: ErrorCode) -> Self {
        Self {
            error_code: code.as_u16(),
            description: code.description().to_string(),
        }
    }
}

/// Error returned to clients.
///
/// Domain errors (`AuthError`, `TodoError`) convert into this type. The
/// optional source is only ever logged.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ApiError {
    pub fn new(code: ErrorCode) -> Self {
        Self { code, source: None }
    }

    pub fn with_source<E>(code: ErrorCode, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            code,
            source: Some(Box::new(source)),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    fn log(&self) {
        let code = self.code.as_u16();
        match (self.code.kind(), &self.source) {
            (ErrorKind::Internal, Some(source)) => {
                error!(error_code = code, "Internal error: {:?}", source)
            }
            (ErrorKind::Internal, None) => {
                error!(error_code = code, "Internal error: {}", self.code.description())
            }
            (ErrorKind::Authentication | ErrorKind::Authorization, _) => {
                warn!(error_code = code, "Access denied: {}", self.code.description())
            }
            (_, Some(source)) => debug!(error_code = code, "Client error: {}", source),
            (_, None) => debug!(error_code = code, "Client error: {}", self.code.description()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_u16(), self.code.description())
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<ErrorCode> for ApiError {
    fn from(code: ErrorCode) -> Self {
        ApiError::new(code)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        (status, Json(ErrorResponse::from(self.code))).into_response()
    }
}
