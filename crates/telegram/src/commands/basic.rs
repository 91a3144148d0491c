//! Basic bot commands

use crate::constants::WELCOME_TEXT;
use crate::keyboards;
use crate::router::Router;
use crate::types::{BoxFuture, HandlerResult, Invocation};

/// Welcome message with the action menu
pub fn start<'a>(router: &'a Router, inv: Invocation<'a>) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        router
            .messenger()
            .send_message(
                inv.chat_id,
                WELCOME_TEXT,
                Some(keyboards::welcome_menu_keyboard()),
            )
            .await
    })
}
