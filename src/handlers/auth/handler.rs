//! Authentication handler implementations

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use validator::Validate;

use crate::{
    constants::TOKEN_TYPE,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedAdmin,
    services::AuthService,
    state::AppState,
};

use super::{
    request::SignInRequest,
    response::{CurrentAdminResponse, SignInResponse},
};

/// Sign in with email and password
pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> AppResult<Json<SignInResponse>> {
    let Json(payload) = payload?;
    payload.validate()?;

    let (admin, issued) = AuthService::sign_in(
        state.admins(),
        &state.config().jwt,
        payload.email.as_deref().unwrap_or_default(),
        payload.password.as_deref().unwrap_or_default(),
    )
    .await?;

    Ok(Json(SignInResponse {
        success: true,
        admin: admin.into(),
        token: issued.token,
        token_type: TOKEN_TYPE.to_string(),
        expires_in: issued.expires_in,
    }))
}

/// Get the admin the bearer token belongs to
pub async fn get_current_admin(
    State(state): State<AppState>,
    auth_admin: AuthenticatedAdmin,
) -> AppResult<Json<CurrentAdminResponse>> {
    // The account may have been deleted after the token was issued
    let admin = AuthService::get_admin_by_id(state.admins(), &auth_admin.admin_id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(CurrentAdminResponse {
        success: true,
        admin: admin.into(),
    }))
}
