//! HTTP endpoint receiving Telegram webhook updates
//!
//! This crate exposes the axum server that accepts update payloads on a
//! single POST route and hands them to the [`telegram::Router`].

mod server;
mod state;

pub use server::{WebhookServer, DEFAULT_WEBHOOK_PATH};
pub use state::WebhookState;

/// Result type alias for webhook server operations
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
