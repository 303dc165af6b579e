use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::matching::MatchResult;
use crate::services::{fixtures, simulate_delay};

const UPLOAD_LATENCY: Duration = Duration::from_millis(1500);
const MATCH_LATENCY: Duration = Duration::from_millis(2000);
const HISTORY_LATENCY: Duration = Duration::from_millis(600);

#[derive(Debug, Serialize)]
pub struct ResumeUpload {
    pub message: String,
    pub resume_id: String,
}

/// Candidate-facing mock operations: resume upload, matching, history.
pub struct CandidateService {
    latency_override: Option<Duration>,
}

impl CandidateService {
    pub fn new(latency_override: Option<Duration>) -> Self {
        Self { latency_override }
    }

    fn latency(&self, default: Duration) -> Duration {
        self.latency_override.unwrap_or(default)
    }

    /// Accepts a resume and mints an id for it. The file content is ignored;
    /// nothing is stored.
    pub async fn upload_resume(&self, file_name: &str) -> Result<ResumeUpload, AppError> {
        simulate_delay(self.latency(UPLOAD_LATENCY)).await;
        if file_name.is_empty() {
            return Err(AppError::Validation("A resume file is required".to_string()));
        }
        Ok(ResumeUpload {
            message: "Resume uploaded successfully".to_string(),
            resume_id: format!("resume_{}", Uuid::new_v4()),
        })
    }

    /// "Matches" a resume against a job description. No parsing or similarity
    /// computation happens; the first sample report is returned as-is.
    pub async fn match_resume(
        &self,
        _resume_id: &str,
        _job_description: &str,
    ) -> Result<MatchResult, AppError> {
        simulate_delay(self.latency(MATCH_LATENCY)).await;
        fixtures::sample_match_results()
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("No match results available".to_string()))
    }

    pub async fn get_match_history(&self) -> Result<Vec<MatchResult>, AppError> {
        simulate_delay(self.latency(HISTORY_LATENCY)).await;
        Ok(fixtures::sample_match_results())
    }
}
