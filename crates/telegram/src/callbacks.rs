//! Callback query handlers for inline keyboard interactions
//!
//! Only the "Get Proxies" button has an action; any other callback data
//! is just acknowledged. The router acknowledges every callback query
//! itself once the handler returns.

use std::collections::HashMap;

use crate::constants::callback;
use crate::handlers::send_proxy_list;
use crate::router::Router;
use crate::types::{BoxFuture, Handler, HandlerResult, Invocation};

/// Build the callback data dispatch table
pub fn table() -> HashMap<&'static str, Handler> {
    let mut table: HashMap<&'static str, Handler> = HashMap::new();
    table.insert(callback::PROXIES, proxies_callback);
    table
}

/// "Get Proxies": the unfiltered first page
fn proxies_callback<'a>(router: &'a Router, inv: Invocation<'a>) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move { send_proxy_list(router, inv.chat_id, None, 0, inv.hostname).await })
}
