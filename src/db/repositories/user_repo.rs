//! User repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::{AppError, AppResult},
    models::User,
};

/// Persisted collection of inventory users
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find a user by ID
    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>>;

    /// Insert a user, failing with `DuplicateId` if the ID is taken
    async fn create(&self, user: User) -> AppResult<User>;

    /// Delete a user, failing with `NotFound` if absent
    async fn delete(&self, user_id: &str) -> AppResult<()>;
}

/// Postgres-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(r#"SELECT * FROM users ORDER BY user_id"#)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (user_id, name, email)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&user.user_id)
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                AppError::DuplicateId("User with this ID already exists".to_string()),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, user_id: &str) -> AppResult<()> {
        let result = sqlx::query(r#"DELETE FROM users WHERE user_id = $1"#)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
