//! Helpers shared by command and callback handlers

use teloxide::types::ChatId;

use crate::constants::PROXIES_FILENAME;
use crate::router::Router;
use crate::types::HandlerResult;

/// Fetch the directory, filter it, render one page and send it as a file
///
/// `country` is compared uppercased against each record's country code.
pub async fn send_proxy_list(
    router: &Router,
    chat_id: ChatId,
    country: Option<&str>,
    page: usize,
    hostname: &str,
) -> HandlerResult {
    let proxies = router.directory().proxy_list().await?;
    let proxies = match country {
        Some(country) => proxy::filter_by_country(proxies, country),
        None => proxies,
    };

    tracing::info!(
        "Sending {} proxies (country: {:?}, page: {}) to chat {}",
        proxies.len(),
        country,
        page,
        chat_id
    );

    let artifact = router.renderer().render(hostname, &proxies, page);
    router
        .messenger()
        .send_document(chat_id, artifact, PROXIES_FILENAME)
        .await
}

/// Send a plain reply without a keyboard
pub async fn send_response(router: &Router, chat_id: ChatId, text: &str) -> HandlerResult {
    router.messenger().send_message(chat_id, text, None).await
}
