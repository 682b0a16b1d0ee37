use sqlx::PgPool;

use crate::auth::ensure_owner;
use crate::todos::{
    ColorRepository, CreateTodoListRequest, CreateTodoRequest, Todo, TodoError, TodoList,
    TodoListRepository, TodoListResponse, TodoRepository, UpdateTodoRequest,
};

/// Service layer for todo list and todo business logic.
///
/// Every method takes the authenticated caller's id; the caller never
/// supplies an owner id directly.
#[derive(Clone)]
pub struct TodoService {
    pool: PgPool,
    colors: ColorRepository,
    lists: TodoListRepository,
    todos: TodoRepository,
}

impl TodoService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            colors: ColorRepository::new(pool.clone()),
            lists: TodoListRepository::new(pool.clone()),
            todos: TodoRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a todo list owned by the caller
    ///
    /// This method:
    /// 1. Verifies the color exists
    /// 2. Inserts the list with the caller as owner
    pub async fn create_todo_list(
        &self,
        caller_id: i32,
        request: CreateTodoListRequest,
    ) -> Result<TodoListResponse, TodoError> {
        // 1. Verify color exists
        if self.colors.find_by_id(request.color_id).await?.is_none() {
            return Err(TodoError::InvalidColor);
        }

        // 2. Insert list
        let list = self
            .lists
            .create(&request.name, request.color_id, caller_id)
            .await
            .map_err(TodoError::TodoListCreateFailed)?;

        tracing::info!("User {} created todo list {}", caller_id, list.id);
        Ok(TodoListResponse::new(list, Vec::new()))
    }

    /// All of the caller's lists with their todos, newest list first
    pub async fn list_todo_lists(&self, caller_id: i32) -> Result<Vec<TodoListResponse>, TodoError> {
        let lists = self.lists.find_by_owner(caller_id).await?;
        let ids: Vec<i32> = lists.iter().map(|list| list.id).collect();
        let mut todos = self.todos.find_by_lists(&ids).await?;

        Ok(lists
            .into_iter()
            .map(|list| {
                let items = todos.remove(&list.id).unwrap_or_default();
                TodoListResponse::new(list, items)
            })
            .collect())
    }

    /// A single list with its todos; the caller must own it
    pub async fn get_todo_list(
        &self,
        list_id: i32,
        caller_id: i32,
    ) -> Result<TodoListResponse, TodoError> {
        let list = self.owned_list(list_id, caller_id).await?;
        let todos = self.todos.find_by_list(list.id).await?;

        Ok(TodoListResponse::new(list, todos))
    }

    /// Delete a list and its todos; the caller must own it.
    /// Returns the list with exactly the todos the delete removed.
    ///
    /// This method, in one transaction:
    /// 1. Locks the list row, so no todo can be added to it meanwhile
    /// 2. Checks ownership
    /// 3. Reads the todos, then deletes the list (todos cascade)
    pub async fn delete_todo_list(
        &self,
        list_id: i32,
        caller_id: i32,
    ) -> Result<TodoListResponse, TodoError> {
        let mut tx = self.pool.begin().await?;

        // 1. Lock list
        let list = TodoListRepository::lock_by_id(&mut *tx, list_id)
            .await?
            .ok_or(TodoError::TodoListNotFound)?;

        // 2. Check ownership
        ensure_owner(list.owner_id, caller_id, || TodoError::TodoListNotOwned)?;

        // 3. Snapshot todos and delete
        let todos = TodoRepository::select_by_list(&mut *tx, list.id).await?;
        TodoListRepository::delete(&mut *tx, list.id)
            .await
            .map_err(TodoError::TodoListDeleteFailed)?;

        tx.commit().await.map_err(TodoError::TodoListDeleteFailed)?;

        tracing::info!(
            "User {} deleted todo list {} with {} todos",
            caller_id,
            list.id,
            todos.len()
        );
        Ok(TodoListResponse::new(list, todos))
    }

    /// Add a todo to a list the caller owns
    pub async fn create_todo(
        &self,
        list_id: i32,
        caller_id: i32,
        request: CreateTodoRequest,
    ) -> Result<Todo, TodoError> {
        let list = self.owned_list(list_id, caller_id).await?;

        let todo = self
            .todos
            .create(list.id, &request.text)
            .await
            .map_err(TodoError::TodoCreateFailed)?;

        tracing::info!("User {} created todo {} in list {}", caller_id, todo.id, list.id);
        Ok(todo)
    }

    /// Replace a todo's text and completion; the caller must own its list
    pub async fn update_todo(
        &self,
        todo_id: i32,
        caller_id: i32,
        request: UpdateTodoRequest,
    ) -> Result<Todo, TodoError> {
        let (existing, owner_id) = self
            .todos
            .find_with_owner(todo_id)
            .await?
            .ok_or(TodoError::TodoNotFound)?
            .into_parts();

        ensure_owner(owner_id, caller_id, || TodoError::TodoNotOwned)?;

        let updated = self
            .todos
            .update(existing.id, &request.text, request.completed)
            .await
            .map_err(TodoError::TodoUpdateFailed)?
            .ok_or(TodoError::TodoNotFound)?;

        tracing::info!("User {} updated todo {}", caller_id, updated.id);
        Ok(updated)
    }

    // Fetch a list and check the caller owns it
    async fn owned_list(&self, list_id: i32, caller_id: i32) -> Result<TodoList, TodoError> {
        let list = self
            .lists
            .find_by_id(list_id)
            .await?
            .ok_or(TodoError::TodoListNotFound)?;

        ensure_owner(list.owner_id, caller_id, || TodoError::TodoListNotOwned)?;
        Ok(list)
    }
}
