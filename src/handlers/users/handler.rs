//! User handler implementations

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::admin::MessageResponse,
    middleware::auth::{require_capability, AuthenticatedAdmin},
    models::{Capability, User},
    services::UserService,
    state::AppState,
};

use super::{request::CreateUserRequest, response::CreateUserResponse};

/// List all users
pub async fn list_users(
    State(state): State<AppState>,
    auth_admin: AuthenticatedAdmin,
) -> AppResult<Json<Vec<User>>> {
    require_capability(&auth_admin, Capability::ManageUsers)?;

    let users = UserService::list_users(state.users()).await?;

    Ok(Json(users))
}

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    auth_admin: AuthenticatedAdmin,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreateUserResponse>)> {
    require_capability(&auth_admin, Capability::ManageUsers)?;

    let Json(payload) = payload?;
    payload.validate()?;

    let user = UserService::create_user(
        state.users(),
        payload.user_id.as_deref().unwrap_or_default(),
        payload.name.as_deref().unwrap_or_default(),
        payload.email.as_deref().unwrap_or_default(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            success: true,
            user,
        }),
    ))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    auth_admin: AuthenticatedAdmin,
    Path(user_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    require_capability(&auth_admin, Capability::ManageUsers)?;

    UserService::delete_user(state.users(), &user_id).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "User deleted successfully".to_string(),
    }))
}
