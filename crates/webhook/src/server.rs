//! Webhook HTTP server

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use telegram::Update;
use tower_http::trace::TraceLayer;

use crate::state::WebhookState;

/// Route Telegram posts updates to unless configured otherwise
pub const DEFAULT_WEBHOOK_PATH: &str = "/telegram";

/// Body returned for every delivered update
const ACK_BODY: &str = "OK";

/// Webhook server API
#[derive(Clone)]
pub struct WebhookServer {
    state: WebhookState,
    path: String,
}

impl WebhookServer {
    /// Create a new webhook server
    ///
    /// # Arguments
    /// * `router` - Update router handling classified updates
    /// * `path` - Route updates are posted to (e.g., "/telegram")
    /// * `public_hostname` - Hostname override for rendered links
    pub fn new(router: Arc<telegram::Router>, path: impl Into<String>, public_hostname: Option<String>) -> Self {
        Self {
            state: WebhookState::new(router, public_hostname),
            path: path.into(),
        }
    }

    /// Create the axum router with all routes configured
    ///
    /// Paths other than the update route and `/health` are left to axum's
    /// default 404.
    pub fn router(&self) -> Router {
        Router::new()
            .route(&self.path, post(receive_update))
            .route("/health", get(health_check))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http())
    }

    /// Start the webhook server
    ///
    /// # Arguments
    /// * `host` - Host to bind to (e.g., "0.0.0.0")
    /// * `port` - Port to bind to (e.g., 8080)
    pub async fn serve(self, host: &str, port: u16) -> crate::Result<()> {
        let addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tracing::info!("Webhook server listening on {}{}", addr, self.path);

        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Webhook server running.")
}

/// Update endpoint
///
/// Always answers `200 OK` with `OK`; handler failures only reach the log.
async fn receive_update(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    body: Bytes,
) -> &'static str {
    let update = Update::from_slice(&body);
    let hostname = state.hostname_for(&headers);

    if let Err(e) = state.router().handle(update, &hostname).await {
        tracing::error!("Failed to handle update: {}", e);
    }

    ACK_BODY
}
