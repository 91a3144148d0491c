//! Shared state of the webhook server

use axum::http::{header, HeaderMap};
use std::sync::Arc;
use telegram::Router;

/// Hostname used when neither an override nor a `Host` header is available
const FALLBACK_HOSTNAME: &str = "localhost";

/// State handed to every request
#[derive(Clone)]
pub struct WebhookState {
    router: Arc<Router>,
    /// Overrides the `Host` header for rendered links
    public_hostname: Option<String>,
}

impl WebhookState {
    /// Create new webhook state
    ///
    /// # Arguments
    /// * `router` - Update router shared by all requests
    /// * `public_hostname` - Hostname to advertise instead of the request's `Host`
    pub fn new(router: Arc<Router>, public_hostname: Option<String>) -> Self {
        Self {
            router,
            public_hostname,
        }
    }

    /// Get the update router
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Hostname the request was addressed to, without port
    pub fn hostname_for(&self, headers: &HeaderMap) -> String {
        if let Some(hostname) = &self.public_hostname {
            return hostname.clone();
        }

        headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .map(strip_port)
            .filter(|host| !host.is_empty())
            .unwrap_or(FALLBACK_HOSTNAME)
            .to_string()
    }
}

/// Drop a trailing `:port`, keeping bracketed IPv6 literals intact
fn strip_port(authority: &str) -> &str {
    if authority.starts_with('[') {
        return match authority.find(']') {
            Some(end) => &authority[..=end],
            None => authority,
        };
    }
    authority.split(':').next().unwrap_or(authority)
}
