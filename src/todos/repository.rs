use std::collections::HashMap;

use sqlx::{PgExecutor, PgPool};

use crate::todos::{Color, OwnedTodo, Todo, TodoList};

/// Read access to the reference color palette
#[derive(Clone)]
pub struct ColorRepository {
    pool: PgPool,
}

impl ColorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Color>, sqlx::Error> {
        sqlx::query_as::<_, Color>("SELECT id, name, color_hex FROM colors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}

/// Repository for database operations on todo lists
#[derive(Clone)]
pub struct TodoListRepository {
    pool: PgPool,
}

impl TodoListRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        color_id: i32,
        owner_id: i32,
    ) -> Result<TodoList, sqlx::Error> {
        sqlx::query_as::<_, TodoList>(
            r#"
            INSERT INTO todo_lists (name, color_id, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, color_id, owner_id, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(color_id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TodoList>, sqlx::Error> {
        sqlx::query_as::<_, TodoList>(
            r#"
            SELECT id, name, color_id, owner_id, created_at, updated_at
            FROM todo_lists
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// All lists owned by a user, newest first
    pub async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<TodoList>, sqlx::Error> {
        sqlx::query_as::<_, TodoList>(
            r#"
            SELECT id, name, color_id, owner_id, created_at, updated_at
            FROM todo_lists
            WHERE owner_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Fetch a list and hold a row lock on it until the transaction ends.
    /// Concurrent todo inserts into the list wait for the lock.
    pub async fn lock_by_id<'e, E>(executor: E, id: i32) -> Result<Option<TodoList>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, TodoList>(
            r#"
            SELECT id, name, color_id, owner_id, created_at, updated_at
            FROM todo_lists
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Delete a list. Its todos go with it through the foreign key cascade.
    pub async fn delete<'e, E>(executor: E, id: i32) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM todo_lists WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Repository for database operations on todos
#[derive(Clone)]
pub struct TodoRepository {
    pool: PgPool,
}

impl TodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, todo_list_id: i32, text: &str) -> Result<Todo, sqlx::Error> {
        sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (text, todo_list_id)
            VALUES ($1, $2)
            RETURNING id, text, completed, todo_list_id, created_at, updated_at
            "#,
        )
        .bind(text)
        .bind(todo_list_id)
        .fetch_one(&self.pool)
        .await
    }

    /// Find a todo together with the owner of its list
    pub async fn find_with_owner(&self, id: i32) -> Result<Option<OwnedTodo>, sqlx::Error> {
        sqlx::query_as::<_, OwnedTodo>(
            r#"
            SELECT t.id, t.text, t.completed, t.todo_list_id, t.created_at, t.updated_at,
                   l.owner_id
            FROM todos t
            JOIN todo_lists l ON l.id = t.todo_list_id
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Replace text and completion. Returns `None` if the row vanished.
    pub async fn update(
        &self,
        id: i32,
        text: &str,
        completed: bool,
    ) -> Result<Option<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET text = $1, completed = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING id, text, completed, todo_list_id, created_at, updated_at
            "#,
        )
        .bind(text)
        .bind(completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn find_by_list(&self, todo_list_id: i32) -> Result<Vec<Todo>, sqlx::Error> {
        Self::select_by_list(&self.pool, todo_list_id).await
    }

    /// Todos of one list in creation order, on any executor
    pub async fn select_by_list<'e, E>(
        executor: E,
        todo_list_id: i32,
    ) -> Result<Vec<Todo>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, text, completed, todo_list_id, created_at, updated_at
            FROM todos
            WHERE todo_list_id = $1
            ORDER BY id
            "#,
        )
        .bind(todo_list_id)
        .fetch_all(executor)
        .await
    }

    /// Todos of several lists in one query, grouped by list id
    pub async fn find_by_lists(
        &self,
        todo_list_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Todo>>, sqlx::Error> {
        if todo_list_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, text, completed, todo_list_id, created_at, updated_at
            FROM todos
            WHERE todo_list_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(todo_list_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<i32, Vec<Todo>> = HashMap::new();
        for todo in todos {
            grouped.entry(todo.todo_list_id).or_default().push(todo);
        }
        Ok(grouped)
    }
}
