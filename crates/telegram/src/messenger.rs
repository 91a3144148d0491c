//! Outbound calls to the Telegram Bot API

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, InputFile, ParseMode};

use crate::error::{BotError, BotResult};

/// Default Telegram Bot API base URL
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// The effects a handler can have on the chat
///
/// Each call is independent; a handler issues them in sequence and gets
/// the outcome of every call back.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send an HTML-formatted text message, optionally with an inline keyboard
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        markup: Option<InlineKeyboardMarkup>,
    ) -> BotResult<()>;

    /// Send `content` as a file attachment named `filename`
    async fn send_document(&self, chat_id: ChatId, content: Vec<u8>, filename: &str) -> BotResult<()>;

    /// Clear the pending state of a pressed inline button
    async fn answer_callback_query(&self, callback_query_id: &str) -> BotResult<()>;
}

/// [`Messenger`] backed by a teloxide [`Bot`]
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    /// Create a messenger for `token` talking to the Bot API at `api_url`
    ///
    /// # Errors
    /// Returns an error if `api_url` is not a valid URL
    pub fn new(token: impl Into<String>, api_url: &str) -> BotResult<Self> {
        let url = reqwest::Url::parse(api_url)
            .map_err(|e| BotError::InvalidConfig(format!("Telegram API URL {}: {}", api_url, e)))?;
        Ok(Self {
            bot: Bot::new(token).set_api_url(url),
        })
    }

    /// The underlying bot, for setup calls outside the update flow
    pub fn bot(&self) -> &Bot {
        &self.bot
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        markup: Option<InlineKeyboardMarkup>,
    ) -> BotResult<()> {
        let mut request = self
            .bot
            .send_message(chat_id, text.to_string())
            .parse_mode(ParseMode::Html);
        if let Some(markup) = markup {
            request = request.reply_markup(markup);
        }
        request.await?;
        Ok(())
    }

    async fn send_document(&self, chat_id: ChatId, content: Vec<u8>, filename: &str) -> BotResult<()> {
        let document = InputFile::memory(content).file_name(filename.to_string());
        self.bot.send_document(chat_id, document).await?;
        Ok(())
    }

    async fn answer_callback_query(&self, callback_query_id: &str) -> BotResult<()> {
        self.bot
            .answer_callback_query(callback_query_id.to_string())
            .await?;
        Ok(())
    }
}
