use axum::response::{IntoResponse, Response};

use crate::error::{ApiError, ErrorCode};

/// Error types for todo list and todo operations
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("Color not found")]
    InvalidColor,

    #[error("Could not create todo list: {0}")]
    TodoListCreateFailed(#[source] sqlx::Error),

    /// Unknown id or an id that is not an integer
    #[error("Todo list not found")]
    TodoListNotFound,

    #[error("Todo list belongs to another user")]
    TodoListNotOwned,

    #[error("Could not delete todo list: {0}")]
    TodoListDeleteFailed(#[source] sqlx::Error),

    #[error("Could not create todo: {0}")]
    TodoCreateFailed(#[source] sqlx::Error),

    #[error("Todo id is not an integer")]
    InvalidTodoId,

    #[error("Todo not found")]
    TodoNotFound,

    #[error("Todo belongs to another user")]
    TodoNotOwned,

    #[error("Could not update todo: {0}")]
    TodoUpdateFailed(#[source] sqlx::Error),

    /// Read failed in storage
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl TodoError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TodoError::InvalidColor => ErrorCode::InvalidColor,
            TodoError::TodoListCreateFailed(_) => ErrorCode::TodoListCreateFailed,
            TodoError::TodoListNotFound => ErrorCode::TodoListNotFound,
            TodoError::TodoListNotOwned => ErrorCode::TodoListNotOwned,
            TodoError::TodoListDeleteFailed(_) => ErrorCode::TodoListDeleteFailed,
            TodoError::TodoCreateFailed(_) => ErrorCode::TodoCreateFailed,
            TodoError::InvalidTodoId => ErrorCode::InvalidTodoId,
            TodoError::TodoNotFound => ErrorCode::TodoNotFound,
            TodoError::TodoNotOwned => ErrorCode::TodoNotOwned,
            TodoError::TodoUpdateFailed(_) => ErrorCode::TodoUpdateFailed,
            TodoError::DatabaseError(_) => ErrorCode::StorageFailure,
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        let code = err.code();
        ApiError::with_source(code, err)
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
