use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use serde::Deserialize;

use crate::guard::require_page;
use crate::models::user::Role;
use crate::state::AppState;

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\">\
         <title>{title} | SkillMatch</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    ))
}

/// GET /
pub async fn landing() -> Html<String> {
    page(
        "AI-Powered Resume Matching",
        "<h1>SkillMatch</h1>\
         <p>Match your resume to any job description in seconds.</p>\
         <nav><a href=\"/auth?mode=login\">Sign In</a> \
         <a href=\"/auth?mode=register\">Get Started</a></nav>",
    )
}

#[derive(Deserialize)]
pub struct AuthPageQuery {
    pub mode: Option<String>,
}

/// GET /auth?mode=login|register
/// Unknown or missing modes fall back to login.
pub async fn auth_page(Query(query): Query<AuthPageQuery>) -> Html<String> {
    let mode = match query.mode.as_deref() {
        Some("register") => "register",
        _ => "login",
    };
    let heading = if mode == "register" {
        "Create Account"
    } else {
        "Welcome Back"
    };
    page(
        heading,
        &format!("<h1>{heading}</h1><form data-mode=\"{mode}\"></form>"),
    )
}

/// GET /candidate (candidate role only).
pub async fn candidate_dashboard(
    State(state): State<AppState>,
) -> Result<Html<String>, Redirect> {
    let user = require_page(&state, &[Role::Candidate])?;
    Ok(page(
        "Candidate Dashboard",
        &format!(
            "<h1>Candidate Dashboard</h1><p>Welcome back, {}.</p>",
            user.name
        ),
    ))
}

/// GET /recruiter (recruiter role only).
pub async fn recruiter_dashboard(
    State(state): State<AppState>,
) -> Result<Html<String>, Redirect> {
    let user = require_page(&state, &[Role::Recruiter])?;
    Ok(page(
        "Recruiter Dashboard",
        &format!(
            "<h1>Recruiter Dashboard</h1><p>Welcome back, {}.</p>",
            user.name
        ),
    ))
}

/// GET /admin (admin role only).
pub async fn admin_panel(State(state): State<AppState>) -> Result<Html<String>, Redirect> {
    let user = require_page(&state, &[Role::Admin])?;
    Ok(page(
        "Admin Panel",
        &format!("<h1>Admin Panel</h1><p>Signed in as {}.</p>", user.name),
    ))
}

/// Catch-all fallback for unknown paths.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        page(
            "Page Not Found",
            "<h1>404</h1><p>This page does not exist.</p><a href=\"/\">Back to home</a>",
        ),
    )
}
