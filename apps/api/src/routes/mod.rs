pub mod admin;
pub mod auth;
pub mod candidate;
pub mod health;
pub mod pages;
pub mod recruiter;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::landing))
        .route("/auth", get(pages::auth_page))
        .route("/candidate", get(pages::candidate_dashboard))
        .route("/recruiter", get(pages::recruiter_dashboard))
        .route("/admin", get(pages::admin_panel))
        // Auth API
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/auth/me", get(auth::handle_me))
        // Candidate API
        .route(
            "/api/v1/candidate/resume",
            post(candidate::handle_upload_resume),
        )
        .route("/api/v1/candidate/match", post(candidate::handle_match))
        .route("/api/v1/candidate/history", get(candidate::handle_history))
        // Recruiter API
        .route("/api/v1/recruiter/jobs", post(recruiter::handle_upload_job))
        .route(
            "/api/v1/recruiter/candidates",
            get(recruiter::handle_ranked_candidates),
        )
        .route(
            "/api/v1/recruiter/candidates/:id/resume",
            get(recruiter::handle_download_resume),
        )
        // Admin API
        .route("/api/v1/admin/stats", get(admin::handle_stats))
        .route("/api/v1/admin/usage", get(admin::handle_usage))
        .route("/api/v1/admin/users", get(admin::handle_users))
        // Registered last so every named route above wins first.
        .fallback(pages::not_found)
        .with_state(state)
}
