//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod admin_repo;
pub mod user_repo;

pub use admin_repo::{AdminRepository, PgAdminRepository};
pub use user_repo::{PgUserRepository, UserRepository};

#[cfg(test)]
pub use admin_repo::MockAdminRepository;
#[cfg(test)]
pub use user_repo::MockUserRepository;
