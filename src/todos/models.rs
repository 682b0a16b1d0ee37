use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Reference color a todo list is tagged with
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Color {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "coral")]
    pub name: String,
    #[schema(example = "#FF6B6B")]
    pub color_hex: String,
}

/// Todo list row as stored
#[derive(Debug, Clone, FromRow)]
pub struct TodoList {
    pub id: i32,
    pub name: String,
    pub color_id: i32,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single todo inside a list
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Todo {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Buy milk")]
    pub text: String,
    #[schema(example = false)]
    pub completed: bool,
    #[schema(example = 1)]
    pub todo_list_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Todo row joined with the owner of its parent list
#[derive(Debug, Clone, FromRow)]
pub struct OwnedTodo {
    pub id: i32,
    pub text: String,
    pub completed: bool,
    pub todo_list_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_id: i32,
}

impl OwnedTodo {
    /// Split into the todo and its list owner's id
    pub fn into_parts(self) -> (Todo, i32) {
        let todo = Todo {
            id: self.id,
            text: self.text,
            completed: self.completed,
            todo_list_id: self.todo_list_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        (todo, self.owner_id)
    }
}

/// Request DTO for creating a todo list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTodoListRequest {
    #[schema(example = "Groceries")]
    pub name: String,
    #[schema(example = 1)]
    pub color_id: i32,
}

/// Request DTO for creating a todo
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    #[schema(example = "Buy milk")]
    pub text: String,
}

/// Request DTO for updating a todo. Both fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    #[schema(example = "Buy oat milk")]
    pub text: String,
    #[schema(example = true)]
    pub completed: bool,
}

/// Response DTO for a todo list with its todos
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodoListResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Groceries")]
    pub name: String,
    #[schema(example = 1)]
    pub color_id: i32,
    #[schema(example = 1)]
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub todos: Vec<Todo>,
}

impl TodoListResponse {
    pub fn new(list: TodoList, todos: Vec<Todo>) -> Self {
        Self {
            id: list.id,
            name: list.name,
            color_id: list.color_id,
            owner_id: list.owner_id,
            created_at: list.created_at,
            updated_at: list.updated_at,
            todos,
        }
    }
}
