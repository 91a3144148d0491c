use std::future::Future;
use std::pin::Pin;

use teloxide::types::ChatId;

use crate::error::BotResult;
use crate::router::Router;

/// Type alias for handler result types
pub type HandlerResult = BotResult<()>;

/// Boxed future returned by table-dispatched handlers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Everything a handler needs to know about the update it serves
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    /// Chat the reply goes to
    pub chat_id: ChatId,
    /// Command arguments after the verb (empty for interactions)
    pub args: &'a [String],
    /// Hostname the webhook was reached on, used in rendered links
    pub hostname: &'a str,
}

/// Entry of the verb and interaction dispatch tables
pub type Handler = for<'a> fn(&'a Router, Invocation<'a>) -> BoxFuture<'a, HandlerResult>;
