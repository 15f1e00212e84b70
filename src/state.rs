//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::Config,
    db::{
        memory::{MemoryAdminRepository, MemoryUserRepository},
        repositories::{AdminRepository, PgAdminRepository, PgUserRepository, UserRepository},
    },
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Admin accounts
    admins: Arc<dyn AdminRepository>,

    /// Inventory users
    users: Arc<dyn UserRepository>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        admins: Arc<dyn AdminRepository>,
        users: Arc<dyn UserRepository>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                admins,
                users,
                config,
            }),
        }
    }

    /// State backed by Postgres
    pub fn with_pool(pool: PgPool, config: Config) -> Self {
        Self::new(
            Arc::new(PgAdminRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
            config,
        )
    }

    /// State backed by the in-memory repositories
    pub fn in_memory(config: Config) -> Self {
        Self::new(
            Arc::new(MemoryAdminRepository::new()),
            Arc::new(MemoryUserRepository::new()),
            config,
        )
    }

    /// Get a reference to the admin repository
    pub fn admins(&self) -> &dyn AdminRepository {
        self.inner.admins.as_ref()
    }

    /// Get a reference to the user repository
    pub fn users(&self) -> &dyn UserRepository {
        self.inner.users.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
