//! Command handlers for the Telegram bot
//!
//! This module contains the verb dispatch table and its handlers,
//! organized by category:
//! - `basic`: the welcome menu
//! - `proxies`: proxy listing and health checks
//! - `domain`: custom domain registration

mod basic;
mod domain;
mod proxies;

pub use basic::*;
pub use domain::*;
pub use proxies::*;

use std::collections::HashMap;

use crate::constants::verbs;
use crate::types::Handler;

/// Verbs with the description shown in the Telegram command menu
pub const DESCRIPTIONS: [(&str, &str); 4] = [
    (verbs::START, "Show the main menu"),
    (verbs::PROXIES, "Get proxies: /proxies [country] [page]"),
    (verbs::CHECK, "Check a proxy: /check <ip:port>"),
    (verbs::ADD_DOMAIN, "Register a domain: /adddomain <domain>"),
];

/// Build the verb dispatch table
pub fn table() -> HashMap<&'static str, Handler> {
    let mut table: HashMap<&'static str, Handler> = HashMap::new();
    table.insert(verbs::START, start);
    table.insert(verbs::PROXIES, proxies);
    table.insert(verbs::CHECK, check);
    table.insert(verbs::ADD_DOMAIN, add_domain);
    table
}
