use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::debug;

use crate::errors::AppError;
use crate::models::user::{Session, User};

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "user";

/// Durable store for the current session: two string entries (opaque token,
/// serialized user record) under fixed keys in a single JSON file.
///
/// Reads and writes are synchronous and short; the mutex is never held across
/// an await point. Last write wins, matching the one-session-per-client model.
pub struct SessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Writes both entries, overwriting any prior session. No validation of
    /// the token or user is performed here; that is the caller's job.
    pub fn save(&self, token: &str, user: &User) -> Result<(), AppError> {
        let user_json =
            serde_json::to_string(user).map_err(|e| AppError::Internal(e.into()))?;
        let mut entries = BTreeMap::new();
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        entries.insert(USER_KEY.to_string(), user_json);
        let body =
            serde_json::to_string_pretty(&entries).map_err(|e| AppError::Internal(e.into()))?;

        let _guard = self.lock.lock().unwrap_or_else(|p| p.into_inner());
        std::fs::write(&self.path, body)?;
        Ok(())
    }

    /// Returns the stored session, or `None` if either entry is absent or the
    /// file does not parse. Corruption is recovered as logged-out, never as an
    /// error.
    pub fn load(&self) -> Option<Session> {
        let entries = self.read_entries()?;
        let token = entries.get(TOKEN_KEY)?.clone();
        let user: User = match serde_json::from_str(entries.get(USER_KEY)?) {
            Ok(u) => u,
            Err(e) => {
                debug!("Stored user record is corrupted, treating as logged out: {e}");
                return None;
            }
        };
        Some(Session { token, user })
    }

    /// The raw token entry, if present. Checked independently of the user
    /// record, so a corrupt user payload does not hide the token.
    pub fn token(&self) -> Option<String> {
        self.read_entries()?.get(TOKEN_KEY).cloned()
    }

    /// Removes both entries. Idempotent; clearing an empty store is a no-op.
    pub fn clear(&self) -> Result<(), AppError> {
        let _guard = self.lock.lock().unwrap_or_else(|p| p.into_inner());
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn read_entries(&self) -> Option<BTreeMap<String, String>> {
        let _guard = self.lock.lock().unwrap_or_else(|p| p.into_inner());
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                debug!("Session file unreadable, treating as logged out: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Some(entries),
            Err(e) => {
                debug!("Session file is corrupted, treating as logged out: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user() -> User {
        User {
            id: "user_candidate".to_string(),
            email: "candidate@demo.com".to_string(),
            name: "Demo Candidate".to_string(),
            role: "candidate".to_string(),
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("tok_1", &demo_user()).unwrap();

        let session = store.load().unwrap();
        assert_eq!(session.token, "tok_1");
        assert_eq!(session.user.email, "candidate@demo.com");
        assert_eq!(store.token().as_deref(), Some("tok_1"));
    }

    #[test]
    fn test_save_overwrites_previous_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("tok_1", &demo_user()).unwrap();

        let mut other = demo_user();
        other.role = "recruiter".to_string();
        store.save("tok_2", &other).unwrap();

        let session = store.load().unwrap();
        assert_eq!(session.token, "tok_2");
        assert_eq!(session.user.role, "recruiter");
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_corrupted_file_loads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not valid json").unwrap();

        let store = SessionStore::new(path.clone());
        assert!(store.load().is_none());
        assert!(store.token().is_none());
        // The file itself is left alone until the next save or clear.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not valid json");
    }

    #[test]
    fn test_corrupted_user_entry_keeps_token_visible() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("tok_1", &demo_user()).unwrap();

        let mut entries: BTreeMap<String, String> = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("session.json")).unwrap(),
        )
        .unwrap();
        entries.insert(USER_KEY.to_string(), "###".to_string());
        std::fs::write(
            dir.path().join("session.json"),
            serde_json::to_string(&entries).unwrap(),
        )
        .unwrap();

        assert!(store.load().is_none());
        assert_eq!(store.token().as_deref(), Some("tok_1"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("tok_1", &demo_user()).unwrap();

        store.clear().unwrap();
        assert!(store.load().is_none());
        store.clear().unwrap(); // second clear must not error
        assert!(store.load().is_none());
    }
}
