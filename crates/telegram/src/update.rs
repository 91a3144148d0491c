//! Classification of inbound webhook payloads
//!
//! Telegram posts one JSON update per request. Only two shapes matter to
//! the bot: a text message and a callback query from an inline button.
//! The payload is decoded into one of those in a fixed order, message
//! first, and anything else becomes [`Update::Unrecognized`].

use serde::Deserialize;
use teloxide::types::ChatId;

/// An inbound update, reduced to what the router needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// Text typed by the user
    Message { chat_id: ChatId, text: String },
    /// Inline button press
    Interaction {
        /// Callback query id, used to acknowledge the press
        id: String,
        chat_id: ChatId,
        /// Opaque data attached to the pressed button
        data: String,
    },
    /// Neither shape; no action is taken
    Unrecognized,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    message: IncomingMessage,
}

#[derive(Deserialize)]
struct IncomingMessage {
    chat: IncomingChat,
    text: String,
}

#[derive(Deserialize)]
struct CallbackEnvelope {
    callback_query: IncomingCallback,
}

#[derive(Deserialize)]
struct IncomingCallback {
    id: String,
    message: CallbackOrigin,
    // Buttons without data still need their press acknowledged
    #[serde(default)]
    data: String,
}

#[derive(Deserialize)]
struct CallbackOrigin {
    chat: IncomingChat,
}

#[derive(Deserialize)]
struct IncomingChat {
    id: i64,
}

impl Update {
    /// Classify a decoded JSON payload
    pub fn classify(payload: &serde_json::Value) -> Self {
        if let Ok(envelope) = MessageEnvelope::deserialize(payload) {
            return Update::Message {
                chat_id: ChatId(envelope.message.chat.id),
                text: envelope.message.text,
            };
        }

        if let Ok(envelope) = CallbackEnvelope::deserialize(payload) {
            let query = envelope.callback_query;
            return Update::Interaction {
                id: query.id,
                chat_id: ChatId(query.message.chat.id),
                data: query.data,
            };
        }

        Update::Unrecognized
    }

    /// Classify a raw request body; a body that is not JSON is unrecognized
    pub fn from_slice(body: &[u8]) -> Self {
        match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(payload) => Self::classify(&payload),
            Err(e) => {
                tracing::debug!("Ignoring non-JSON update body: {}", e);
                Update::Unrecognized
            }
        }
    }
}
