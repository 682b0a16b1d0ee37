// Database repositories for users and session tokens

use sqlx::{PgExecutor, PgPool};

use crate::auth::models::{Token, User};

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user. Accepts any executor so signup can run it in a transaction.
    pub async fn insert<'e, E>(
        executor: E,
        email: &str,
        hashed_password: &str,
    ) -> Result<User, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, hashed_password)
            VALUES ($1, $2)
            RETURNING id, email, hashed_password, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(hashed_password)
        .fetch_one(executor)
        .await
    }

    /// Find a user by exact email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, hashed_password, created_at, updated_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, hashed_password, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}

/// Token repository for session token operations
#[derive(Clone)]
pub struct TokenRepository {
    pool: PgPool,
}

impl TokenRepository {
    /// Create a new TokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a token for a user
    pub async fn insert<'e, E>(executor: E, owner_id: i32, token: &str) -> Result<Token, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Token>(
            r#"
            INSERT INTO tokens (token, owner_id)
            VALUES ($1, $2)
            RETURNING id, token, owner_id, created_at, updated_at
            "#,
        )
        .bind(token)
        .bind(owner_id)
        .fetch_one(executor)
        .await
    }

    /// Store a token using the repository's pool
    pub async fn create(&self, owner_id: i32, token: &str) -> Result<Token, sqlx::Error> {
        Self::insert(&self.pool, owner_id, token).await
    }

    /// Find a token row by exact token string
    pub async fn find_by_token(&self, token: &str) -> Result<Option<Token>, sqlx::Error> {
        sqlx::query_as::<_, Token>(
            "SELECT id, token, owner_id, created_at, updated_at FROM tokens WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete a token. Returns the number of rows removed.
    pub async fn delete_by_token(&self, token: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tokens WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
