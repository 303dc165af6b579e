use std::sync::Arc;

use crate::auth::AuthService;
use crate::config::Config;
use crate::services::admin::AdminService;
use crate::services::candidate::CandidateService;
use crate::services::recruiter::RecruiterService;
use crate::services::ApiClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The session context loaded at startup. Handlers go through the auth
    /// facade; the store itself is kept here for future direct consumers.
    #[allow(dead_code)]
    pub sessions: Arc<SessionStore>,
    pub auth: Arc<AuthService>,
    pub candidate: Arc<CandidateService>,
    pub recruiter: Arc<RecruiterService>,
    pub admin: Arc<AdminService>,
    /// Client reserved for the future real backend. Unused by the mock layer.
    #[allow(dead_code)]
    pub api_client: Arc<ApiClient>,
    #[allow(dead_code)]
    pub config: Config,
}
