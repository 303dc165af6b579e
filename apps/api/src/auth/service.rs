use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::auth::accounts;
use crate::errors::AppError;
use crate::models::user::{Role, Session, User};
use crate::services::simulate_delay;
use crate::session::SessionStore;

/// Latency applied to login and register. Loading indicators in the demo UI
/// depend on this being noticeable, so keep it well above 800ms.
pub const AUTH_LATENCY: Duration = Duration::from_millis(1000);

static TOKEN_SEQ: AtomicU64 = AtomicU64::new(0);

/// Mints an opaque session token, distinct per call. Timestamp plus a process
/// counter; explicitly not a real JWT and not cryptographically meaningful.
fn mint_token() -> String {
    let seq = TOKEN_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("mock_jwt_token_{}_{seq}", Utc::now().timestamp_millis())
}

/// The credential-checking seam. Implement this to swap the demo table for a
/// real identity provider without touching handlers or the session layer.
///
/// Carried in `AuthService` as `Arc<dyn AuthBackend>`.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError>;
    async fn register(&self, email: &str, password: &str, role: Role) -> Result<User, AppError>;
}

/// Default backend: the closed demo-account table behind simulated latency.
pub struct DemoAuthBackend {
    latency: Duration,
}

impl DemoAuthBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for DemoAuthBackend {
    fn default() -> Self {
        Self::new(AUTH_LATENCY)
    }
}

#[async_trait]
impl AuthBackend for DemoAuthBackend {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        simulate_delay(self.latency).await;
        let account = accounts::find(email).ok_or(AppError::InvalidCredentials)?;
        if account.password != password {
            // Same error as unknown email; the response never says which.
            return Err(AppError::InvalidCredentials);
        }
        Ok(User {
            id: format!("user_{}", account.role),
            email: email.to_string(),
            name: account.name.to_string(),
            role: account.role.as_str().to_string(),
        })
    }

    async fn register(&self, email: &str, password: &str, role: Role) -> Result<User, AppError> {
        simulate_delay(self.latency).await;
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ));
        }
        if role == Role::Admin {
            return Err(AppError::Validation(
                "Admin accounts cannot self-register".to_string(),
            ));
        }
        // No duplicate-email check: nothing is persisted beyond this session,
        // so there is no account table to collide with.
        let name = email.split('@').next().unwrap_or(email).to_string();
        Ok(User {
            id: format!("user_{}", Uuid::new_v4()),
            email: email.to_string(),
            name,
            role: role.as_str().to_string(),
        })
    }
}

/// The auth facade: credential checks via the backend, session persistence
/// via the store. A failed login leaves any existing session untouched.
pub struct AuthService {
    backend: Arc<dyn AuthBackend>,
    sessions: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(backend: Arc<dyn AuthBackend>, sessions: Arc<SessionStore>) -> Self {
        Self { backend, sessions }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let user = self.backend.authenticate(email, password).await?;
        let session = Session {
            token: mint_token(),
            user,
        };
        self.sessions.save(&session.token, &session.user)?;
        info!("Login: {} ({})", session.user.email, session.user.role);
        Ok(session)
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Session, AppError> {
        let user = self.backend.register(email, password, role).await?;
        let session = Session {
            token: mint_token(),
            user,
        };
        self.sessions.save(&session.token, &session.user)?;
        info!("Registered: {} ({})", session.user.email, session.user.role);
        Ok(session)
    }

    pub fn logout(&self) -> Result<(), AppError> {
        self.sessions.clear()
    }

    /// The currently stored user, or `None`. Never fails on malformed storage.
    pub fn get_user(&self) -> Option<User> {
        self.sessions.load().map(|session| session.user)
    }

    /// True iff a token entry is present. No freshness or signature check
    /// exists to apply.
    pub fn is_authenticated(&self) -> bool {
        self.sessions.token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(dir: &tempfile::TempDir) -> AuthService {
        let sessions = Arc::new(SessionStore::new(dir.path().join("session.json")));
        AuthService::new(Arc::new(DemoAuthBackend::default()), sessions)
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_demo_accounts_log_in_with_their_role() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        for (email, password, role) in [
            ("candidate@demo.com", "Candidate@123", "candidate"),
            ("recruiter@demo.com", "Recruiter@123", "recruiter"),
            ("admin@demo.com", "Admin@123", "admin"),
        ] {
            let session = svc.login(email, password).await.unwrap();
            assert_eq!(session.user.role, role);
            assert!(svc.is_authenticated());
            assert_eq!(svc.get_user().unwrap().role, role);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_email_fails() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let err = svc.login("wrong@demo.com", "whatever").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
        assert!(!svc.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_password_fails_with_same_error() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let err = svc
            .login("candidate@demo.com", "not-the-password")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_login_keeps_previous_session() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        svc.login("candidate@demo.com", "Candidate@123")
            .await
            .unwrap();

        let err = svc.login("wrong@demo.com", "whatever").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
        assert!(svc.is_authenticated());
        assert_eq!(svc.get_user().unwrap().role, "candidate");
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_candidate_and_recruiter() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        for role in [Role::Candidate, Role::Recruiter] {
            let session = svc
                .register("new.user@example.com", "Secret@123", role)
                .await
                .unwrap();
            assert_eq!(session.user.role, role.as_str());
            assert_eq!(session.user.name, "new.user");
            assert!(svc.is_authenticated());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_registered_users_get_distinct_ids() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let first = svc
            .register("one@example.com", "Secret@123", Role::Candidate)
            .await
            .unwrap();
        let second = svc
            .register("two@example.com", "Secret@123", Role::Candidate)
            .await
            .unwrap();
        assert!(first.user.id.starts_with("user_"));
        assert_ne!(first.user.id, second.user.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_admin_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let err = svc
            .register("sneaky@example.com", "Secret@123", Role::Admin)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(!svc.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_empty_inputs_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let err = svc.register("", "Secret@123", Role::Candidate).await;
        assert!(matches!(err, Err(AppError::Validation(_))));
        let err = svc
            .register("someone@example.com", "", Role::Recruiter)
            .await;
        assert!(matches!(err, Err(AppError::Validation(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        svc.login("admin@demo.com", "Admin@123").await.unwrap();

        svc.logout().unwrap();
        assert!(!svc.is_authenticated());
        assert!(svc.get_user().is_none());
        svc.logout().unwrap();
        assert!(!svc.is_authenticated());
        assert!(svc.get_user().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokens_are_distinct_across_logins() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let first = svc
            .login("candidate@demo.com", "Candidate@123")
            .await
            .unwrap();
        let second = svc
            .login("candidate@demo.com", "Candidate@123")
            .await
            .unwrap();
        assert_ne!(first.token, second.token);
    }
}
