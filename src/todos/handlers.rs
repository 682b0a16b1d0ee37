// HTTP handlers for todo list and todo endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::middleware::AuthenticatedUser;
use crate::extract::{parse_id, JsonBody};
use crate::todos::{
    CreateTodoListRequest, CreateTodoRequest, Todo, TodoError, TodoListResponse,
    UpdateTodoRequest,
};
use crate::AppState;

/// Create a todo list
/// POST /todolists
#[utoipa::path(
    post,
    path = "/todolists",
    request_body = CreateTodoListRequest,
    responses(
        (status = 201, description = "Todo list created", body = TodoListResponse),
        (status = 400, description = "Invalid color ID", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid token", body = crate::error::ErrorResponse),
        (status = 500, description = "Todo list could not be created", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "todo lists"
)]
pub async fn create_todo_list_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(request): JsonBody<CreateTodoListRequest>,
) -> Result<(StatusCode, Json<TodoListResponse>), TodoError> {
    tracing::debug!("User {} creating todo list '{}'", user.user_id, request.name);

    let list = state
        .todo_service
        .create_todo_list(user.user_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(list)))
}

/// List the caller's todo lists with their todos
/// GET /todolists
#[utoipa::path(
    get,
    path = "/todolists",
    responses(
        (status = 200, description = "Caller's todo lists, newest first", body = Vec<TodoListResponse>),
        (status = 401, description = "Invalid token", body = crate::error::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "todo lists"
)]
pub async fn list_todo_lists_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<TodoListResponse>>, TodoError> {
    tracing::debug!("Fetching todo lists for user {}", user.user_id);

    let lists = state.todo_service.list_todo_lists(user.user_id).await?;

    tracing::debug!("Returning {} todo lists for user {}", lists.len(), user.user_id);
    Ok(Json(lists))
}

/// Get one todo list with its todos
/// GET /todolists/{id}
#[utoipa::path(
    get,
    path = "/todolists/{id}",
    params(
        ("id" = i32, Path, description = "Todo list ID")
    ),
    responses(
        (status = 200, description = "Todo list found", body = TodoListResponse),
        (status = 401, description = "Invalid token or not the owner", body = crate::error::ErrorResponse),
        (status = 404, description = "Todo list does not exist", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "todo lists"
)]
pub async fn get_todo_list_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(raw_id): Path<String>,
) -> Result<Json<TodoListResponse>, TodoError> {
    let list_id = parse_id(&raw_id, || TodoError::TodoListNotFound)?;

    tracing::debug!("User {} fetching todo list {}", user.user_id, list_id);

    let list = state
        .todo_service
        .get_todo_list(list_id, user.user_id)
        .await?;

    Ok(Json(list))
}

/// Delete a todo list and its todos
/// DELETE /todolists/{id}
#[utoipa::path(
    delete,
    path = "/todolists/{id}",
    params(
        ("id" = i32, Path, description = "Todo list ID")
    ),
    responses(
        (status = 200, description = "Deleted todo list", body = TodoListResponse),
        (status = 401, description = "Invalid token or not the owner", body = crate::error::ErrorResponse),
        (status = 404, description = "Todo list does not exist", body = crate::error::ErrorResponse),
        (status = 500, description = "Todo list could not be deleted", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "todo lists"
)]
pub async fn delete_todo_list_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(raw_id): Path<String>,
) -> Result<Json<TodoListResponse>, TodoError> {
    let list_id = parse_id(&raw_id, || TodoError::TodoListNotFound)?;

    tracing::debug!("User {} deleting todo list {}", user.user_id, list_id);

    let list = state
        .todo_service
        .delete_todo_list(list_id, user.user_id)
        .await?;

    Ok(Json(list))
}

/// Add a todo to a list
/// POST /todolists/{id}/todos
#[utoipa::path(
    post,
    path = "/todolists/{id}/todos",
    params(
        ("id" = i32, Path, description = "Todo list ID")
    ),
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 401, description = "Invalid token or not the owner", body = crate::error::ErrorResponse),
        (status = 404, description = "Todo list does not exist", body = crate::error::ErrorResponse),
        (status = 500, description = "Todo could not be created", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "todos"
)]
pub async fn create_todo_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(raw_id): Path<String>,
    JsonBody(request): JsonBody<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let list_id = parse_id(&raw_id, || TodoError::TodoListNotFound)?;

    tracing::debug!("User {} adding todo to list {}", user.user_id, list_id);

    let todo = state
        .todo_service
        .create_todo(list_id, user.user_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Replace a todo's text and completed flag
/// PUT /todos/{id}
#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(
        ("id" = i32, Path, description = "Todo ID")
    ),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Updated todo", body = Todo),
        (status = 401, description = "Invalid token or not the owner", body = crate::error::ErrorResponse),
        (status = 404, description = "Todo does not exist", body = crate::error::ErrorResponse),
        (status = 500, description = "Todo could not be updated", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "todos"
)]
pub async fn update_todo_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(raw_id): Path<String>,
    JsonBody(request): JsonBody<UpdateTodoRequest>,
) -> Result<Json<Todo>, TodoError> {
    let todo_id = parse_id(&raw_id, || TodoError::InvalidTodoId)?;

    tracing::debug!("User {} updating todo {}", user.user_id, todo_id);

    let todo = state
        .todo_service
        .update_todo(todo_id, user.user_id, request)
        .await?;

    Ok(Json(todo))
}
