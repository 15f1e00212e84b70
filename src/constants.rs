//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum admin password length, shared by the API and the dashboard form
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Token type reported alongside issued tokens
pub const TOKEN_TYPE: &str = "Bearer";

// =============================================================================
// SEED DEFAULTS
// =============================================================================

/// Seeded accounts
pub mod seed {
    pub const SUPER_ADMIN_ID: &str = "admin-001";
    pub const SUPER_ADMIN_NAME: &str = "Super Admin";
    pub const SUPER_ADMIN_EMAIL: &str = "superadmin@inventory.com";

    pub const MODERATOR_ID: &str = "admin-002";
    pub const MODERATOR_NAME: &str = "Moderator User";
    pub const MODERATOR_EMAIL: &str = "moderator@inventory.com";

    pub const DEFAULT_PASSWORD: &str = "password123";
}

// =============================================================================
// DASHBOARD ROUTES
// =============================================================================

/// Dashboard route paths
pub mod paths {
    pub const ROOT: &str = "/";
    pub const SIGN_IN: &str = "/signin";
    pub const DASHBOARD: &str = "/dashboard";
    pub const INVENTORY: &str = "/inventory";
    pub const PRODUCTS: &str = "/products";
    pub const USERS: &str = "/users";
    pub const MODERATORS: &str = "/moderators";
    pub const SETTINGS: &str = "/settings";
    pub const EXPENSES: &str = "/expenses";
}
