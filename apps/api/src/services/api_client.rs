use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

use crate::session::SessionStore;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client reserved for the future real backend. Configured from
/// `API_BASE_URL` and attaches the stored bearer token to every request, the
/// same contract the mock services will be swapped against. No mock code path
/// uses it today.
#[allow(dead_code)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    sessions: Arc<SessionStore>,
}

#[allow(dead_code)]
impl ApiClient {
    pub fn new(base_url: String, sessions: Arc<SessionStore>) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url,
            sessions,
        })
    }

    /// Builds a request against the configured base URL, adding the session
    /// token as a bearer header when one is stored.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url.trim_end_matches('/'));
        let builder = self.http.request(method, url);
        match self.sessions.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}
