//! Update routing
//!
//! The router owns the collaborators and two dispatch tables: one keyed by
//! command verb, one keyed by callback data. Lookups are exact string
//! matches; anything not in a table is ignored.

use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::ChatId;

use crate::collaborators::{ArtifactRenderer, DomainRegistrar, HealthProbe, ProxySource};
use crate::messenger::Messenger;
use crate::parser::{parse, Command};
use crate::types::{Handler, HandlerResult, Invocation};
use crate::update::Update;
use crate::{callbacks, commands};

/// External services the handlers call
#[derive(Clone)]
pub struct Collaborators {
    pub messenger: Arc<dyn Messenger>,
    pub directory: Arc<dyn ProxySource>,
    pub health: Arc<dyn HealthProbe>,
    pub registrar: Arc<dyn DomainRegistrar>,
    pub renderer: Arc<dyn ArtifactRenderer>,
}

/// Dispatches classified updates to their handlers
pub struct Router {
    deps: Collaborators,
    commands: HashMap<&'static str, Handler>,
    callbacks: HashMap<&'static str, Handler>,
}

impl Router {
    /// Create a router with the built-in command and callback tables
    pub fn new(deps: Collaborators) -> Self {
        Self {
            deps,
            commands: commands::table(),
            callbacks: callbacks::table(),
        }
    }

    pub fn messenger(&self) -> &dyn Messenger {
        self.deps.messenger.as_ref()
    }

    pub fn directory(&self) -> &dyn ProxySource {
        self.deps.directory.as_ref()
    }

    pub fn health(&self) -> &dyn HealthProbe {
        self.deps.health.as_ref()
    }

    pub fn registrar(&self) -> &dyn DomainRegistrar {
        self.deps.registrar.as_ref()
    }

    pub fn renderer(&self) -> &dyn ArtifactRenderer {
        self.deps.renderer.as_ref()
    }

    /// Whether `verb` has a handler
    #[cfg(test)]
    pub fn knows_verb(&self, verb: &str) -> bool {
        self.commands.contains_key(verb)
    }

    /// Handle one update received on `hostname`
    ///
    /// # Errors
    /// Returns the first collaborator failure, which ends the effects of a
    /// message update. Interactions differ: the acknowledgment is still sent
    /// after a failed handler, and the handler's error is returned after it.
    pub async fn handle(&self, update: Update, hostname: &str) -> HandlerResult {
        match update {
            Update::Message { chat_id, text } => {
                let command = parse(&text);
                self.route(chat_id, &command, hostname).await
            }
            Update::Interaction { id, chat_id, data } => {
                self.route_interaction(&id, chat_id, &data, hostname).await
            }
            Update::Unrecognized => {
                tracing::debug!("Ignoring unrecognized update");
                Ok(())
            }
        }
    }

    /// Run the handler registered for the command's verb, if any
    pub async fn route(&self, chat_id: ChatId, command: &Command, hostname: &str) -> HandlerResult {
        let handler = match self.commands.get(command.verb.as_str()) {
            Some(handler) => handler,
            None => {
                tracing::debug!("No handler for verb {:?} in chat {}", command.verb, chat_id);
                return Ok(());
            }
        };

        tracing::info!(
            "Handling {} with {} argument(s) for chat {}",
            command.verb,
            command.args.len(),
            chat_id
        );
        let inv = Invocation {
            chat_id,
            args: &command.args,
            hostname,
        };
        handler(self, inv).await
    }

    /// Run the handler registered for the callback data, then acknowledge
    /// the callback query
    async fn route_interaction(
        &self,
        callback_query_id: &str,
        chat_id: ChatId,
        data: &str,
        hostname: &str,
    ) -> HandlerResult {
        let outcome = match self.callbacks.get(data) {
            Some(handler) => {
                tracing::info!("Handling callback {:?} for chat {}", data, chat_id);
                let inv = Invocation {
                    chat_id,
                    args: &[],
                    hostname,
                };
                handler(self, inv).await
            }
            None => {
                tracing::debug!("No handler for callback data {:?}", data);
                Ok(())
            }
        };

        let ack = self.messenger().answer_callback_query(callback_query_id).await;
        if let Err(ref e) = outcome {
            tracing::warn!("Callback {:?} failed before acknowledgment: {}", data, e);
        }
        outcome.and(ack)
    }
}
