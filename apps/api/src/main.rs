mod auth;
mod config;
mod errors;
mod guard;
mod models;
mod routes;
mod services;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::service::AUTH_LATENCY;
use crate::auth::{AuthService, DemoAuthBackend};
use crate::config::Config;
use crate::routes::build_router;
use crate::services::admin::AdminService;
use crate::services::candidate::CandidateService;
use crate::services::recruiter::RecruiterService;
use crate::services::ApiClient;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("skillmatch_api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the session store and restore any persisted session
    let sessions = Arc::new(SessionStore::new(config.session_file.clone()));
    match sessions.load() {
        Some(session) => info!(
            "Restored session for {} ({})",
            session.user.email, session.user.role
        ),
        None => info!("No persisted session found"),
    }

    // Auth facade over the demo-account backend
    let backend = Arc::new(DemoAuthBackend::new(
        config.mock_latency.unwrap_or(AUTH_LATENCY),
    ));
    let auth = Arc::new(AuthService::new(backend, sessions.clone()));

    // Client reserved for the future real backend
    let api_client = Arc::new(ApiClient::new(config.api_base_url.clone(), sessions.clone())?);
    info!("API client configured for {}", config.api_base_url);

    let state = AppState {
        auth,
        candidate: Arc::new(CandidateService::new(config.mock_latency)),
        recruiter: Arc::new(RecruiterService::new(config.mock_latency)),
        admin: Arc::new(AdminService::new(config.mock_latency)),
        api_client,
        sessions,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // demo-only; tighten before any real deployment

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
