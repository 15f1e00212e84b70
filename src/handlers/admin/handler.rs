//! Admin handler implementations

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::{require_capability, AuthenticatedAdmin},
    models::Capability,
    services::AdminService,
    state::AppState,
};

use super::{
    request::CreateAdminRequest,
    response::{AdminSummary, CreateAdminResponse, MessageResponse},
};

/// Create a moderator account
pub async fn create_admin(
    State(state): State<AppState>,
    auth_admin: AuthenticatedAdmin,
    payload: Result<Json<CreateAdminRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreateAdminResponse>)> {
    require_capability(&auth_admin, Capability::ManageAdmins)?;

    let Json(payload) = payload?;
    payload.validate()?;

    let admin = AdminService::create_moderator(
        state.admins(),
        payload.admin_id.as_deref().unwrap_or_default(),
        payload.name.as_deref().unwrap_or_default(),
        payload.email.as_deref().unwrap_or_default(),
        payload.password.as_deref().unwrap_or_default(),
        payload.role.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAdminResponse {
            success: true,
            admin: admin.into(),
        }),
    ))
}

/// List all admins
pub async fn list_admins(
    State(state): State<AppState>,
    auth_admin: AuthenticatedAdmin,
) -> AppResult<Json<Vec<AdminSummary>>> {
    require_capability(&auth_admin, Capability::ManageAdmins)?;

    let admins = AdminService::list_admins(state.admins()).await?;

    Ok(Json(admins.into_iter().map(AdminSummary::from).collect()))
}

/// Delete an admin
pub async fn delete_admin(
    State(state): State<AppState>,
    auth_admin: AuthenticatedAdmin,
    Path(admin_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    require_capability(&auth_admin, Capability::ManageAdmins)?;

    AdminService::delete_admin(state.admins(), &admin_id).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Admin deleted successfully".to_string(),
    }))
}
