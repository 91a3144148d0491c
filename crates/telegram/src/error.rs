use std::fmt;

/// Custom error type for telegram bot operations
#[derive(Debug)]
pub enum BotError {
    /// Telegram API error
    TelegramError(teloxide::RequestError),
    /// Proxy service error (directory, health check, registrar)
    ProxyError(proxy::ProxyError),
    /// Invalid bot configuration
    InvalidConfig(String),
    /// Generic error with message
    Message(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::TelegramError(e) => write!(f, "Telegram error: {}", e),
            BotError::ProxyError(e) => write!(f, "Proxy service error: {}", e),
            BotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            BotError::Message(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BotError {}

impl From<teloxide::RequestError> for BotError {
    fn from(err: teloxide::RequestError) -> Self {
        BotError::TelegramError(err)
    }
}

impl From<proxy::ProxyError> for BotError {
    fn from(err: proxy::ProxyError) -> Self {
        BotError::ProxyError(err)
    }
}

/// Result type alias for bot operations
pub type BotResult<T> = Result<T, BotError>;
