use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::user::{Role, Session, User};
use crate::state::AppState;

/// Minimum password length enforced at the form boundary, before the auth
/// facade is ever called.
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

fn validate_form(email: &str, password: &str) -> Result<(), AppError> {
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Session>, AppError> {
    validate_form(&req.email, &req.password)?;
    let session = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(session))
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<Session>, AppError> {
    validate_form(&req.email, &req.password)?;
    let session = state
        .auth
        .register(&req.email, &req.password, req.role)
        .await?;
    Ok(Json(session))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.auth.logout()?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
/// The stored user record, or null when logged out or storage is unreadable.
pub async fn handle_me(State(state): State<AppState>) -> Json<Option<User>> {
    Json(state.auth.get_user())
}
