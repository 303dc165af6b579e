use axum::response::Redirect;

use crate::errors::AppError;
use crate::models::user::{Role, User};
use crate::state::AppState;

/// Where an unauthenticated visitor is sent. Login mode is pre-selected; the
/// original destination is not restored after signing in.
pub const LOGIN_REDIRECT: &str = "/auth?mode=login";

/// Outcome of evaluating a guarded navigation.
#[derive(Debug)]
pub enum GuardDecision {
    /// No token, no readable user record, or the two disagree.
    Unauthenticated,
    /// Logged in, but this route requires a different role. Carries the
    /// visitor's own destination: their dashboard, or the landing page when
    /// the stored role is not one of the three known variants.
    WrongRole { redirect_to: &'static str },
    /// Role is in the allowed set; render the protected content unmodified.
    Authorized(User),
}

/// Decides whether a visitor may see a route restricted to `allowed`.
///
/// Evaluated fresh on every navigation; nothing here is cached, since a
/// logout elsewhere can invalidate the session between requests.
pub fn evaluate(authenticated: bool, user: Option<User>, allowed: &[Role]) -> GuardDecision {
    let user = match (authenticated, user) {
        (true, Some(user)) => user,
        _ => return GuardDecision::Unauthenticated,
    };
    match user.role() {
        Some(role) if allowed.contains(&role) => GuardDecision::Authorized(user),
        Some(role) => GuardDecision::WrongRole {
            redirect_to: role.dashboard_path(),
        },
        None => GuardDecision::WrongRole { redirect_to: "/" },
    }
}

/// Page-route guard: denied visitors get a redirect instead of the page.
pub fn require_page(state: &AppState, allowed: &[Role]) -> Result<User, Redirect> {
    match evaluate(state.auth.is_authenticated(), state.auth.get_user(), allowed) {
        GuardDecision::Authorized(user) => Ok(user),
        GuardDecision::Unauthenticated => Err(Redirect::to(LOGIN_REDIRECT)),
        GuardDecision::WrongRole { redirect_to } => Err(Redirect::to(redirect_to)),
    }
}

/// API-route guard: same decision, expressed as 401/403 instead of redirects.
pub fn require_api(state: &AppState, allowed: &[Role]) -> Result<User, AppError> {
    match evaluate(state.auth.is_authenticated(), state.auth.get_user(), allowed) {
        GuardDecision::Authorized(user) => Ok(user),
        GuardDecision::Unauthenticated => Err(AppError::Unauthorized),
        GuardDecision::WrongRole { .. } => Err(AppError::Forbidden),
    }
}
