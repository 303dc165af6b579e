use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::guard::require_api;
use crate::models::matching::{AdminUser, PlatformStats, UsagePoint};
use crate::models::user::Role;
use crate::state::AppState;

/// GET /api/v1/admin/stats
pub async fn handle_stats(
    State(state): State<AppState>,
) -> Result<Json<PlatformStats>, AppError> {
    require_api(&state, &[Role::Admin])?;
    let stats = state.admin.get_stats().await?;
    Ok(Json(stats))
}

/// GET /api/v1/admin/usage
pub async fn handle_usage(
    State(state): State<AppState>,
) -> Result<Json<Vec<UsagePoint>>, AppError> {
    require_api(&state, &[Role::Admin])?;
    let usage = state.admin.get_usage_data().await?;
    Ok(Json(usage))
}

/// GET /api/v1/admin/users
pub async fn handle_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminUser>>, AppError> {
    require_api(&state, &[Role::Admin])?;
    let users = state.admin.get_users().await?;
    Ok(Json(users))
}
