//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    config::JwtConfig,
    db::repositories::AdminRepository,
    error::{AppError, AppResult},
    models::{Admin, Role},
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // admin_id
    pub email: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

/// Issued access token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Sign in with email and password.
    ///
    /// Unknown emails and wrong passwords both yield `InvalidCredentials`.
    pub async fn sign_in(
        admins: &dyn AdminRepository,
        jwt: &JwtConfig,
        email: &str,
        password: &str,
    ) -> AppResult<(Admin, IssuedToken)> {
        let Some(admin) = admins.find_by_email(email).await? else {
            tracing::debug!(email = %email, "Sign-in failed: unknown email");
            return Err(AppError::InvalidCredentials);
        };

        if !Self::verify_password(password, &admin.password_hash)? {
            tracing::debug!(admin_id = %admin.admin_id, "Sign-in failed: password mismatch");
            return Err(AppError::InvalidCredentials);
        }

        let token = Self::generate_access_token(&admin, jwt)?;

        tracing::info!(admin_id = %admin.admin_id, role = %admin.role, "Admin signed in");

        Ok((admin, token))
    }

    /// Get admin by ID
    pub async fn get_admin_by_id(
        admins: &dyn AdminRepository,
        admin_id: &str,
    ) -> AppResult<Option<Admin>> {
        admins.find_by_id(admin_id).await
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate access token
    pub fn generate_access_token(admin: &Admin, jwt: &JwtConfig) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(jwt.expiry_hours);

        let claims = Claims {
            sub: admin.admin_id.clone(),
            email: admin.email.clone(),
            role: admin.role,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: jwt.expiry_hours * 3600,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::memory::MemoryAdminRepository,
        models::NewAdmin,
        test_utils::test_config,
    };

    async fn repo_with(email: &str, password: &str, role: Role) -> MemoryAdminRepository {
        let repo = MemoryAdminRepository::new();
        repo.create(NewAdmin {
            admin_id: "admin-001".to_string(),
            name: "Super Admin".to_string(),
            email: email.to_string(),
            password_hash: AuthService::hash_password(password).unwrap(),
            role,
        })
        .await
        .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_sign_in_with_exact_credentials() {
        let config = test_config();
        let repo = repo_with("root@x.com", "password123", Role::SuperAdmin).await;

        let (admin, issued) = AuthService::sign_in(&repo, &config.jwt, "root@x.com", "password123")
            .await
            .unwrap();

        assert_eq!(admin.admin_id, "admin-001");
        assert_eq!(admin.role, Role::SuperAdmin);
        assert_eq!(issued.expires_in, config.jwt.expiry_hours * 3600);

        let claims = AuthService::verify_token(&issued.token, &config.jwt.secret).unwrap();
        assert_eq!(claims.sub, "admin-001");
        assert_eq!(claims.role, Role::SuperAdmin);
    }

    #[tokio::test]
    async fn test_sign_in_failures_are_indistinguishable() {
        let config = test_config();
        let repo = repo_with("root@x.com", "password123", Role::Moderator).await;

        let unknown = AuthService::sign_in(&repo, &config.jwt, "nobody@x.com", "password123")
            .await
            .unwrap_err();
        let mismatch = AuthService::sign_in(&repo, &config.jwt, "root@x.com", "password124")
            .await
            .unwrap_err();
        let case_changed = AuthService::sign_in(&repo, &config.jwt, "root@x.com", "Password123")
            .await
            .unwrap_err();

        assert!(matches!(unknown, AppError::InvalidCredentials));
        assert!(matches!(mismatch, AppError::InvalidCredentials));
        assert!(matches!(case_changed, AppError::InvalidCredentials));
        assert_eq!(unknown.to_string(), mismatch.to_string());
    }

    #[test]
    fn test_hash_is_salted() {
        let a = AuthService::hash_password("password123").unwrap();
        let b = AuthService::hash_password("password123").unwrap();
        assert_ne!(a, b);
        assert!(AuthService::verify_password("password123", &a).unwrap());
        assert!(!AuthService::verify_password("password12", &a).unwrap());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let config = test_config();
        let admin = Admin {
            admin_id: "admin-002".to_string(),
            name: "Moderator User".to_string(),
            email: "mod@x.com".to_string(),
            password_hash: String::new(),
            role: Role::Moderator,
            created_at: Utc::now(),
        };
        let issued = AuthService::generate_access_token(&admin, &config.jwt).unwrap();

        let err = AuthService::verify_token(&issued.token, "another-secret").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let mut config = test_config();
        config.jwt.expiry_hours = -2;
        let admin = Admin {
            admin_id: "admin-002".to_string(),
            name: "Moderator User".to_string(),
            email: "mod@x.com".to_string(),
            password_hash: String::new(),
            role: Role::Moderator,
            created_at: Utc::now(),
        };
        let issued = AuthService::generate_access_token(&admin, &config.jwt).unwrap();

        let err = AuthService::verify_token(&issued.token, &config.jwt.secret).unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }
}
