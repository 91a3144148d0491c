use teloxide::{prelude::*, types::BotCommand};

use crate::commands;

/// Commands as shown in the Telegram command menu
pub fn bot_commands() -> Vec<BotCommand> {
    commands::DESCRIPTIONS
        .iter()
        .map(|(verb, description)| BotCommand::new(verb.trim_start_matches('/'), *description))
        .collect()
}

/// Register bot commands in Telegram menu
pub async fn set_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(bot_commands()).await?;
    Ok(())
}

/// Point Telegram's update delivery at `url`
pub async fn register_webhook(bot: &Bot, url: reqwest::Url) -> Result<(), teloxide::RequestError> {
    tracing::info!("Registering webhook at {}", url);
    bot.set_webhook(url).await?;
    Ok(())
}
