//! Custom domain registration

use crate::constants::{usage, REGISTER_SUCCESS_STATUS};
use crate::handlers::send_response;
use crate::router::Router;
use crate::types::{BoxFuture, HandlerResult, Invocation};
use crate::utils;

/// `/adddomain <domain>`: attach a domain to the worker service
pub fn add_domain<'a>(router: &'a Router, inv: Invocation<'a>) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let domain = match utils::first_arg(inv.args) {
            Some(domain) => domain,
            None => return send_response(router, inv.chat_id, usage::ADD_DOMAIN).await,
        };

        let status = router.registrar().register_domain(domain).await?;
        let reply = if status == REGISTER_SUCCESS_STATUS {
            format!("Domain {} registered successfully.", utils::escape_html(domain))
        } else {
            tracing::warn!("Registering {} returned status {}", domain, status);
            format!(
                "Failed to register domain {}. Status: {}",
                utils::escape_html(domain),
                status
            )
        };
        send_response(router, inv.chat_id, &reply).await
    })
}
