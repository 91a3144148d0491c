//! Proxy listing and health-check commands

use crate::constants::usage;
use crate::handlers::{send_proxy_list, send_response};
use crate::router::Router;
use crate::types::{BoxFuture, HandlerResult, Invocation};
use crate::utils;

/// `/proxies [country] [page]`: send a page of the directory as a file
pub fn proxies<'a>(router: &'a Router, inv: Invocation<'a>) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let country = utils::first_arg(inv.args);
        let page = utils::parse_page(inv.args.get(1));
        send_proxy_list(router, inv.chat_id, country, page, inv.hostname).await
    })
}

/// `/check <ip:port>`: probe a proxy and reply with the verdict
pub fn check<'a>(router: &'a Router, inv: Invocation<'a>) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let target = match utils::first_arg(inv.args) {
            Some(target) => target,
            None => return send_response(router, inv.chat_id, usage::CHECK).await,
        };

        let (host, port) = utils::split_host_port(target);
        let result = router.health().check_health(host, port).await?;
        send_response(router, inv.chat_id, &utils::preformatted(&result.to_pretty_json())).await
    })
}
