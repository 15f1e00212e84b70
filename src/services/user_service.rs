//! User service

use crate::{db::repositories::UserRepository, error::AppResult, models::User};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// List all users
    pub async fn list_users(users: &dyn UserRepository) -> AppResult<Vec<User>> {
        users.list().await
    }

    /// Create a user
    pub async fn create_user(
        users: &dyn UserRepository,
        user_id: &str,
        name: &str,
        email: &str,
    ) -> AppResult<User> {
        let user = users
            .create(User {
                user_id: user_id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
            })
            .await?;

        tracing::info!(user_id = %user.user_id, "User created");

        Ok(user)
    }

    /// Delete a user
    pub async fn delete_user(users: &dyn UserRepository, user_id: &str) -> AppResult<()> {
        users.delete(user_id).await?;

        tracing::info!(user_id = %user_id, "User deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{memory::MemoryUserRepository, repositories::MockUserRepository},
        error::AppError,
    };

    #[tokio::test]
    async fn test_duplicate_user_id_rejected() {
        let repo = MemoryUserRepository::new();

        UserService::create_user(&repo, "u1", "Jane", "jane@x.com")
            .await
            .unwrap();
        let err = UserService::create_user(&repo, "u1", "John", "john@x.com")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateId(_)));
        assert_eq!(UserService::list_users(&repo).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .withf(|id| id == "ghost")
            .returning(|_| Err(AppError::NotFound("User not found".to_string())));

        let err = UserService::delete_user(&repo, "ghost").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
