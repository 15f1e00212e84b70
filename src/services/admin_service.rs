//! Admin management service

use crate::{
    config::SeedConfig,
    constants::seed,
    db::repositories::AdminRepository,
    error::{AppError, AppResult},
    models::{Admin, NewAdmin, Role},
    services::AuthService,
};

/// Admin service for account management
pub struct AdminService;

impl AdminService {
    /// Create a moderator account.
    ///
    /// The persisted role is always `MODERATOR`; a requested role is ignored.
    pub async fn create_moderator(
        admins: &dyn AdminRepository,
        admin_id: &str,
        name: &str,
        email: &str,
        password: &str,
        requested_role: Option<&str>,
    ) -> AppResult<Admin> {
        if let Some(role) = requested_role.filter(|r| *r != Role::Moderator.as_str()) {
            tracing::warn!(admin_id = %admin_id, requested_role = %role, "Ignoring requested role for new admin");
        }

        if admins.find_by_email(email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = AuthService::hash_password(password)?;

        let admin = admins
            .create(NewAdmin {
                admin_id: admin_id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role: Role::Moderator,
            })
            .await?;

        tracing::info!(admin_id = %admin.admin_id, email = %admin.email, "Moderator created");

        Ok(admin)
    }

    /// List all admins
    pub async fn list_admins(admins: &dyn AdminRepository) -> AppResult<Vec<Admin>> {
        admins.list().await
    }

    /// Delete an admin, refusing to remove the last super admin
    pub async fn delete_admin(admins: &dyn AdminRepository, admin_id: &str) -> AppResult<()> {
        match admins.delete(admin_id).await {
            Ok(()) => {
                tracing::info!(admin_id = %admin_id, "Admin deleted");
                Ok(())
            }
            Err(AppError::LastSuperAdmin) => {
                tracing::warn!(admin_id = %admin_id, "Refused to delete the only super admin");
                Err(AppError::LastSuperAdmin)
            }
            Err(e) => Err(e),
        }
    }

    /// Create the default super admin and moderator if they are missing
    pub async fn seed_default_admins(
        admins: &dyn AdminRepository,
        config: &SeedConfig,
    ) -> AppResult<usize> {
        let defaults = [
            (seed::SUPER_ADMIN_ID, seed::SUPER_ADMIN_NAME, seed::SUPER_ADMIN_EMAIL, Role::SuperAdmin),
            (seed::MODERATOR_ID, seed::MODERATOR_NAME, seed::MODERATOR_EMAIL, Role::Moderator),
        ];

        let mut created = 0;
        for (admin_id, name, email, role) in defaults {
            if admins.find_by_id(admin_id).await?.is_some()
                || admins.find_by_email(email).await?.is_some()
            {
                tracing::debug!(admin_id = %admin_id, "Seed account already present");
                continue;
            }

            admins
                .create(NewAdmin {
                    admin_id: admin_id.to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                    password_hash: AuthService::hash_password(&config.admin_password)?,
                    role,
                })
                .await?;

            tracing::info!(admin_id = %admin_id, email = %email, role = %role, "Seeded admin account");
            created += 1;
        }

        Ok(created)
    }
}
