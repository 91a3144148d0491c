mod config;

use std::sync::Arc;

use config::{Config, LogFormat};
use proxy::{CloudflareApi, HealthChecker, HtmlRenderer, ProxyDirectory};
use telegram::{Collaborators, Router, TelegramMessenger};
use tracing_subscriber::EnvFilter;
use webhook::WebhookServer;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            eprintln!("Please check your settings in the .env file");
            return;
        }
    };

    init_logging(config.log_format);

    if let Err(e) = run(config).await {
        tracing::error!("Bot stopped: {}", e);
    }
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn run(config: Config) -> webhook::Result<()> {
    let messenger = TelegramMessenger::new(config.bot_token.clone(), &config.telegram_api_url)?;

    if let Some(url) = &config.webhook_url {
        let url = reqwest::Url::parse(url)?;
        telegram::telegram::register_webhook(messenger.bot(), url).await?;
    }
    if let Err(e) = telegram::telegram::set_bot_commands(messenger.bot()).await {
        tracing::warn!("Failed to register bot commands: {}", e);
    }

    let http = reqwest::Client::new();
    let router = Router::new(Collaborators {
        messenger: Arc::new(messenger),
        directory: Arc::new(ProxyDirectory::new(http.clone(), config.proxy_bank_url.clone())),
        health: Arc::new(HealthChecker::new(http.clone(), config.health_check_api.clone())),
        registrar: Arc::new(CloudflareApi::new(http, config.cloudflare.clone())),
        renderer: Arc::new(HtmlRenderer::new(config.cloudflare.service_name.clone())),
    });

    tracing::info!("Bot started successfully!");

    WebhookServer::new(Arc::new(router), config.webhook_path, config.public_hostname)
        .serve(&config.host, config.port)
        .await
}
