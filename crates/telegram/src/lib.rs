pub mod callbacks;
pub mod collaborators;
pub mod commands;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod keyboards;
pub mod messenger;
pub mod parser;
pub mod router;
pub mod telegram;
pub mod types;
pub mod update;
pub mod utils;

#[cfg(test)]
mod testing;

pub use collaborators::{ArtifactRenderer, DomainRegistrar, HealthProbe, ProxySource};
pub use error::{BotError, BotResult};
pub use messenger::{Messenger, TelegramMessenger};
pub use parser::{parse, Command};
pub use router::{Collaborators, Router};
pub use teloxide::types::ChatId;
pub use types::{HandlerResult, Invocation};
pub use update::Update;
