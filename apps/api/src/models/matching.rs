use serde::{Deserialize, Serialize};

/// One resume-vs-JD match report as shown on the candidate dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub date: String,
}

/// A ranked candidate resume as listed on the recruiter dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResume {
    pub id: String,
    pub name: String,
    pub email: String,
    pub match_score: u32,
    pub skills: Vec<String>,
    pub experience: String,
    pub upload_date: String,
}

/// Headline numbers for the admin panel stat cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_matches: u32,
    pub avg_score: f64,
    pub total_users: u32,
    pub resumes_processed: u32,
    pub total_job_descriptions: u32,
}

/// One month of platform activity for the admin usage chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsagePoint {
    pub month: String,
    pub matches: u32,
    pub users: u32,
}

/// A row in the admin user-management table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub last_login: String,
}
