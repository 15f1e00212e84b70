//! Test utilities
//!
//! Builds an in-memory application seeded with the default admin accounts,
//! plus helpers for driving the router one request at a time.

use crate::config::{
    Config, DatabaseConfig, JwtConfig, LogFormat, SeedConfig, ServerConfig,
};
use crate::constants::seed;

/// Configuration for tests: no database, fixed JWT secret
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "warn".to_string(),
            log_format: LogFormat::Pretty,
            request_timeout_secs: 5,
            cors_allow_origin: None,
        },
        database: DatabaseConfig {
            url: None,
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_for_testing_only".to_string(),
            expiry_hours: 1,
        },
        seed: SeedConfig {
            enabled: true,
            admin_password: seed::DEFAULT_PASSWORD.to_string(),
        },
    }
}

pub mod test_app {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::test_config;
    use crate::{services::AdminService, services::AuthService, state::AppState};

    /// Create an in-memory application with the default admins seeded
    pub async fn create_test_app() -> (Router, AppState) {
        let config = test_config();
        let state = AppState::in_memory(config.clone());

        AdminService::seed_default_admins(state.admins(), &config.seed)
            .await
            .expect("Failed to seed admins");

        (crate::create_router(state.clone()), state)
    }

    /// Issue a bearer token for a seeded admin
    pub async fn token_for(state: &AppState, admin_id: &str) -> String {
        let admin = state
            .admins()
            .find_by_id(admin_id)
            .await
            .unwrap()
            .expect("Admin not seeded");

        AuthService::generate_access_token(&admin, &state.config().jwt)
            .unwrap()
            .token
    }

    /// Send one request and return the status plus decoded JSON body
    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}

#[cfg(test)]
mod tests {
    use super::test_app::*;
    use crate::constants::seed;

    #[tokio::test]
    async fn test_app_is_seeded() {
        let (_app, state) = create_test_app().await;

        let admins = state.admins().list().await.unwrap();
        assert_eq!(admins.len(), 2);
        assert!(!token_for(&state, seed::SUPER_ADMIN_ID).await.is_empty());
    }
}
