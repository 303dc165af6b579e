use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::guard::require_api;
use crate::models::matching::MatchResult;
use crate::models::user::Role;
use crate::services::candidate::ResumeUpload;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UploadResumeRequest {
    pub file_name: String,
}

#[derive(Deserialize)]
pub struct MatchRequest {
    pub resume_id: String,
    pub job_description: String,
}

/// POST /api/v1/candidate/resume
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Json(req): Json<UploadResumeRequest>,
) -> Result<Json<ResumeUpload>, AppError> {
    require_api(&state, &[Role::Candidate])?;
    let upload = state.candidate.upload_resume(&req.file_name).await?;
    Ok(Json(upload))
}

/// POST /api/v1/candidate/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    require_api(&state, &[Role::Candidate])?;
    let result = state
        .candidate
        .match_resume(&req.resume_id, &req.job_description)
        .await?;
    Ok(Json(result))
}

/// GET /api/v1/candidate/history
pub async fn handle_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    require_api(&state, &[Role::Candidate])?;
    let history = state.candidate.get_match_history().await?;
    Ok(Json(history))
}
