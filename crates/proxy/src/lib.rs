//! Proxy service clients
//!
//! This crate wraps the external services the bot talks to besides
//! Telegram: the proxy directory, the proxy health checker, the
//! Cloudflare Workers custom-domain API, and the HTML renderer that
//! turns a proxy list into a downloadable page.

pub mod cloudflare;
pub mod directory;
pub mod error;
pub mod health;
pub mod model;
pub mod render;

pub use cloudflare::{CloudflareApi, CloudflareCredentials};
pub use directory::{filter_by_country, parse_proxy_list, ProxyDirectory};
pub use error::{ProxyError, Result};
pub use health::HealthChecker;
pub use model::{HealthResult, ProxyRecord};
pub use render::{HtmlRenderer, PROXIES_PER_PAGE};
