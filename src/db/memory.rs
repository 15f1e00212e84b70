//! In-memory repositories.
//!
//! Used when no `DATABASE_URL` is configured and by the test suites.
//! Data is lost on restart. Every operation runs under a single lock
//! acquisition, so the last-super-admin guard is atomic here as well.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    db::repositories::{AdminRepository, UserRepository},
    error::{AppError, AppResult},
    models::{Admin, NewAdmin, Role, User},
};

/// In-memory admin repository
#[derive(Clone, Default)]
pub struct MemoryAdminRepository {
    /// Admins in insertion order
    admins: Arc<RwLock<Vec<Admin>>>,
}

impl MemoryAdminRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminRepository for MemoryAdminRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let admins = self.admins.read().await;
        Ok(admins.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_id(&self, admin_id: &str) -> AppResult<Option<Admin>> {
        let admins = self.admins.read().await;
        Ok(admins.iter().find(|a| a.admin_id == admin_id).cloned())
    }

    async fn count_by_role(&self, role: Role) -> AppResult<i64> {
        let admins = self.admins.read().await;
        Ok(admins.iter().filter(|a| a.role == role).count() as i64)
    }

    async fn list(&self) -> AppResult<Vec<Admin>> {
        Ok(self.admins.read().await.clone())
    }

    async fn create(&self, admin: NewAdmin) -> AppResult<Admin> {
        let mut admins = self.admins.write().await;

        if admins.iter().any(|a| a.email == admin.email) {
            return Err(AppError::DuplicateEmail);
        }
        if admins.iter().any(|a| a.admin_id == admin.admin_id) {
            return Err(AppError::DuplicateId(
                "Admin with this ID already exists".to_string(),
            ));
        }

        let admin = Admin {
            admin_id: admin.admin_id,
            name: admin.name,
            email: admin.email,
            password_hash: admin.password_hash,
            role: admin.role,
            created_at: Utc::now(),
        };
        admins.push(admin.clone());

        Ok(admin)
    }

    async fn delete(&self, admin_id: &str) -> AppResult<()> {
        let mut admins = self.admins.write().await;

        let index = admins
            .iter()
            .position(|a| a.admin_id == admin_id)
            .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))?;

        let super_admins = admins.iter().filter(|a| a.role.is_super_admin()).count();
        if admins[index].role.is_super_admin() && super_admins <= 1 {
            return Err(AppError::LastSuperAdmin);
        }

        admins.remove(index);
        Ok(())
    }
}

/// In-memory user repository
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<BTreeMap<String, User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.user_id) {
            return Err(AppError::DuplicateId(
                "User with this ID already exists".to_string(),
            ));
        }

        users.insert(user.user_id.clone(), user.clone());
        Ok(user)
    }

    async fn delete(&self, user_id: &str) -> AppResult<()> {
        self.users
            .write()
            .await
            .remove(user_id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
