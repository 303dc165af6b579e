use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::guard::require_api;
use crate::models::matching::CandidateResume;
use crate::models::user::Role;
use crate::services::recruiter::JobUpload;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct JobUploadRequest {
    pub description: String,
}

#[derive(Deserialize)]
pub struct RankingQuery {
    pub job_id: Option<String>,
}

/// POST /api/v1/recruiter/jobs
pub async fn handle_upload_job(
    State(state): State<AppState>,
    Json(req): Json<JobUploadRequest>,
) -> Result<Json<JobUpload>, AppError> {
    require_api(&state, &[Role::Recruiter])?;
    let job = state.recruiter.upload_job_description(&req.description).await?;
    Ok(Json(job))
}

/// GET /api/v1/recruiter/candidates
pub async fn handle_ranked_candidates(
    State(state): State<AppState>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<Vec<CandidateResume>>, AppError> {
    require_api(&state, &[Role::Recruiter])?;
    let candidates = state
        .recruiter
        .get_ranked_candidates(query.job_id.as_deref())
        .await?;
    Ok(Json(candidates))
}

/// GET /api/v1/recruiter/candidates/:id/resume
pub async fn handle_download_resume(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_api(&state, &[Role::Recruiter])?;
    let bytes = state.recruiter.download_resume(&candidate_id).await?;
    Ok(([(header::CONTENT_TYPE, "application/pdf")], bytes))
}
