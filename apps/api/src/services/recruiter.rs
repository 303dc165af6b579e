use std::time::Duration;

use bytes::Bytes;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::matching::CandidateResume;
use crate::services::{fixtures, simulate_delay};

const JOB_UPLOAD_LATENCY: Duration = Duration::from_millis(1000);
const RANKING_LATENCY: Duration = Duration::from_millis(800);
const DOWNLOAD_LATENCY: Duration = Duration::from_millis(500);

const MOCK_RESUME_PDF: &[u8] = b"Mock resume content";

#[derive(Debug, Serialize)]
pub struct JobUpload {
    pub job_id: String,
}

/// Recruiter-facing mock operations: JD upload, ranked candidates, downloads.
pub struct RecruiterService {
    latency_override: Option<Duration>,
}

impl RecruiterService {
    pub fn new(latency_override: Option<Duration>) -> Self {
        Self { latency_override }
    }

    fn latency(&self, default: Duration) -> Duration {
        self.latency_override.unwrap_or(default)
    }

    pub async fn upload_job_description(&self, description: &str) -> Result<JobUpload, AppError> {
        simulate_delay(self.latency(JOB_UPLOAD_LATENCY)).await;
        if description.trim().is_empty() {
            return Err(AppError::Validation(
                "A job description is required".to_string(),
            ));
        }
        Ok(JobUpload {
            job_id: format!("job_{}", Uuid::new_v4()),
        })
    }

    /// Candidates "ranked" for a job. The job id is accepted but ignored; the
    /// same pre-sorted fixture list is returned for every job.
    pub async fn get_ranked_candidates(
        &self,
        _job_id: Option<&str>,
    ) -> Result<Vec<CandidateResume>, AppError> {
        simulate_delay(self.latency(RANKING_LATENCY)).await;
        Ok(fixtures::sample_candidates())
    }

    pub async fn download_resume(&self, _candidate_id: &str) -> Result<Bytes, AppError> {
        simulate_delay(self.latency(DOWNLOAD_LATENCY)).await;
        Ok(Bytes::from_static(MOCK_RESUME_PDF))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_job_uploads_mint_distinct_ids() {
        let svc = RecruiterService::new(None);
        let first = svc.upload_job_description("We need a Rust engineer").await.unwrap();
        let second = svc.upload_job_description("We need a Rust engineer").await.unwrap();
        assert!(first.job_id.starts_with("job_"));
        assert_ne!(first.job_id, second.job_id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_job_description_rejected() {
        let svc = RecruiterService::new(None);
        let err = svc.upload_job_description("   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ranking_ignores_job_id() {
        let svc = RecruiterService::new(None);
        let with_id = svc.get_ranked_candidates(Some("job_42")).await.unwrap();
        let without = svc.get_ranked_candidates(None).await.unwrap();
        assert_eq!(with_id.len(), without.len());
        assert_eq!(with_id[0].name, "Priya Sharma");
    }

    #[tokio::test(start_paused = true)]
    async fn test_download_returns_mock_bytes() {
        let svc = RecruiterService::new(None);
        let bytes = svc.download_resume("1").await.unwrap();
        assert_eq!(&bytes[..], b"Mock resume content");
    }
}
