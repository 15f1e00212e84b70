//! Authentication middleware

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::AppError,
    models::{Capability, Role},
    services::AuthService,
    state::AppState,
};

/// Authenticated admin extracted from JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedAdmin {
    pub admin_id: String,
    pub email: String,
    pub role: Role,
}

impl<S> FromRequestParts<S> for AuthenticatedAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedAdmin>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(auth_header) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        debug!(path = %path, "Auth failed: No Authorization header");
        return Err(AppError::Unauthorized);
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        debug!(path = %path, "Auth failed: Invalid Authorization format (expected 'Bearer <token>')");
        return Err(AppError::Unauthorized);
    };

    let claims = AuthService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: Token verification failed");
        e
    })?;

    // Tokens outlive accounts; the stored record decides who is calling
    let Some(stored) = AuthService::get_admin_by_id(state.admins(), &claims.sub).await? else {
        debug!(path = %path, admin_id = %claims.sub, "Auth failed: Admin no longer exists");
        return Err(AppError::Unauthorized);
    };

    let admin = AuthenticatedAdmin {
        admin_id: stored.admin_id,
        email: stored.email,
        role: stored.role,
    };

    debug!(path = %path, admin_id = %admin.admin_id, role = %admin.role, "Admin authenticated");

    request.extensions_mut().insert(admin);
    Ok(next.run(request).await)
}

/// Require the authenticated admin's role to grant a capability
pub fn require_capability(admin: &AuthenticatedAdmin, capability: Capability) -> Result<(), AppError> {
    if admin.role.can(capability) {
        Ok(())
    } else {
        debug!(admin_id = %admin.admin_id, role = %admin.role, ?capability, "Capability denied");
        Err(AppError::Forbidden(
            "Super admin access required".to_string(),
        ))
    }
}
