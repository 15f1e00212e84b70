//! Admin repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::{AppError, AppResult},
    models::{Admin, AdminRecord, NewAdmin, Role},
};

/// Persisted collection of administrator accounts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find an admin by email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>>;

    /// Find an admin by ID
    async fn find_by_id(&self, admin_id: &str) -> AppResult<Option<Admin>>;

    /// Count admins holding a role
    async fn count_by_role(&self, role: Role) -> AppResult<i64>;

    /// List every admin, oldest first
    async fn list(&self) -> AppResult<Vec<Admin>>;

    /// Insert an admin.
    ///
    /// Fails with `DuplicateEmail` or `DuplicateId` when either key is taken.
    async fn create(&self, admin: NewAdmin) -> AppResult<Admin>;

    /// Delete an admin.
    ///
    /// Fails with `NotFound` when absent and `LastSuperAdmin` when the
    /// target is the only remaining super admin.
    async fn delete(&self, admin_id: &str) -> AppResult<()>;
}

/// Postgres-backed admin repository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_admin(record: AdminRecord) -> AppResult<Admin> {
    Admin::try_from(record).map_err(AppError::Database)
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let record = sqlx::query_as::<_, AdminRecord>(r#"SELECT * FROM admins WHERE email = $1"#)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        record.map(into_admin).transpose()
    }

    async fn find_by_id(&self, admin_id: &str) -> AppResult<Option<Admin>> {
        let record =
            sqlx::query_as::<_, AdminRecord>(r#"SELECT * FROM admins WHERE admin_id = $1"#)
                .bind(admin_id)
                .fetch_optional(&self.pool)
                .await?;

        record.map(into_admin).transpose()
    }

    async fn count_by_role(&self, role: Role) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM admins WHERE role = $1"#)
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn list(&self) -> AppResult<Vec<Admin>> {
        let records =
            sqlx::query_as::<_, AdminRecord>(r#"SELECT * FROM admins ORDER BY created_at, admin_id"#)
                .fetch_all(&self.pool)
                .await?;

        records.into_iter().map(into_admin).collect()
    }

    async fn create(&self, admin: NewAdmin) -> AppResult<Admin> {
        let result = sqlx::query_as::<_, AdminRecord>(
            r#"
            INSERT INTO admins (admin_id, name, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&admin.admin_id)
        .bind(&admin.name)
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(admin.role.as_str())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(record) => into_admin(record),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                match db_err.constraint() {
                    Some("admins_email_key") => Err(AppError::DuplicateEmail),
                    _ => Err(AppError::DuplicateId(
                        "Admin with this ID already exists".to_string(),
                    )),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, admin_id: &str) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        // Lock every super admin row first so concurrent deletes serialize
        let super_admins: Vec<String> = sqlx::query_scalar(
            r#"SELECT admin_id FROM admins WHERE role = 'SUPER_ADMIN' ORDER BY admin_id FOR UPDATE"#,
        )
        .fetch_all(&mut *tx)
        .await?;

        let role: Option<String> =
            sqlx::query_scalar(r#"SELECT role FROM admins WHERE admin_id = $1 FOR UPDATE"#)
                .bind(admin_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(role) = role else {
            return Err(AppError::NotFound("Admin not found".to_string()));
        };

        if role == Role::SuperAdmin.as_str() && super_admins.len() <= 1 {
            return Err(AppError::LastSuperAdmin);
        }

        sqlx::query(r#"DELETE FROM admins WHERE admin_id = $1"#)
            .bind(admin_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
