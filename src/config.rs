//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;

use crate::constants::{
    seed, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_JWT_EXPIRY_HOURS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub seed: SeedConfig,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
    pub request_timeout_secs: u64,
    /// Allowed CORS origin; `None` allows any origin
    pub cors_allow_origin: Option<String>,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Postgres URL; the in-memory store is used when unset
    pub url: Option<String>,
    pub max_connections: u32,
}

/// JWT authentication configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

/// Default account seeding
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub enabled: bool,
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            seed: SeedConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") | Err(_) => LogFormat::Pretty,
            Ok(_) => return Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        };

        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format,
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REQUEST_TIMEOUT_SECS".to_string()))?,
            cors_allow_origin: env::var("CORS_ALLOW_ORIGIN").ok().filter(|o| o != "*"),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| DEFAULT_JWT_EXPIRY_HOURS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_EXPIRY_HOURS".to_string()))?,
        })
    }
}

impl SeedConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            enabled: env::var("SEED_DEFAULT_ADMINS")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SEED_DEFAULT_ADMINS".to_string()))?,
            admin_password: env::var("SEED_ADMIN_PASSWORD")
                .unwrap_or_else(|_| seed::DEFAULT_PASSWORD.to_string()),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
