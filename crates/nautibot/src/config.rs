//! Configuration loaded from the environment

use std::fmt;

use proxy::CloudflareCredentials;

const DEFAULT_PROXY_BANK_URL: &str =
    "https://raw.githubusercontent.com/FoolVPN-ID/Nautica/refs/heads/main/proxyList.txt";
const DEFAULT_HEALTH_CHECK_API: &str = "https://id1.foolvpn.me/api/v1/check";
const DEFAULT_SERVICE_NAME: &str = "nautica";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration error
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set
    Missing(&'static str),
    /// A variable is set to something unusable
    Invalid(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set in .env file", key),
            ConfigError::Invalid(key, msg) => write!(f, "{} is invalid: {}", key, msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Everything the bot needs to start
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub telegram_api_url: String,
    pub host: String,
    pub port: u16,
    pub webhook_path: String,
    /// When set, Telegram is told to deliver updates here at startup
    pub webhook_url: Option<String>,
    pub public_hostname: Option<String>,
    pub proxy_bank_url: String,
    pub health_check_api: String,
    pub cloudflare: CloudflareCredentials,
    pub log_format: LogFormat,
}

impl Config {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let port = match get("WEBHOOK_PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid("WEBHOOK_PORT", e.to_string()))?,
            None => DEFAULT_PORT,
        };

        let webhook_path = or_default("WEBHOOK_PATH", webhook::DEFAULT_WEBHOOK_PATH);
        if !webhook_path.starts_with('/') {
            return Err(ConfigError::Invalid(
                "WEBHOOK_PATH",
                "must start with '/'".to_string(),
            ));
        }

        let log_format = match get("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid(
                    "LOG_FORMAT",
                    format!("expected 'text' or 'json', got '{}'", other),
                ))
            }
        };

        Ok(Self {
            bot_token: required("TELOXIDE_TOKEN")?,
            telegram_api_url: or_default("TELEGRAM_API_URL", telegram::messenger::TELEGRAM_API_URL),
            host: or_default("WEBHOOK_HOST", DEFAULT_HOST),
            port,
            webhook_path,
            webhook_url: get("WEBHOOK_URL"),
            public_hostname: get("PUBLIC_HOSTNAME"),
            proxy_bank_url: or_default("PROXY_BANK_URL", DEFAULT_PROXY_BANK_URL),
            health_check_api: or_default("PROXY_HEALTH_CHECK_API", DEFAULT_HEALTH_CHECK_API),
            cloudflare: CloudflareCredentials {
                account_id: required("CLOUDFLARE_ACCOUNT_ID")?,
                zone_id: required("CLOUDFLARE_ZONE_ID")?,
                api_key: required("CLOUDFLARE_API_KEY")?,
                api_email: required("CLOUDFLARE_API_EMAIL")?,
                service_name: or_default("SERVICE_NAME", DEFAULT_SERVICE_NAME),
                root_domain: required("ROOT_DOMAIN")?,
            },
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 6] = [
        ("TELOXIDE_TOKEN", "123:abc"),
        ("CLOUDFLARE_ACCOUNT_ID", "acc"),
        ("CLOUDFLARE_ZONE_ID", "zone"),
        ("CLOUDFLARE_API_KEY", "key"),
        ("CLOUDFLARE_API_EMAIL", "me@example.com"),
        ("ROOT_DOMAIN", "example.com"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.telegram_api_url, "https://api.telegram.org");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.webhook_path, "/telegram");
        assert_eq!(config.webhook_url, None);
        assert_eq!(config.public_hostname, None);
        assert_eq!(config.health_check_api, DEFAULT_HEALTH_CHECK_API);
        assert_eq!(config.cloudflare.service_name, "nautica");
        assert_eq!(config.cloudflare.root_domain, "example.com");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("WEBHOOK_PORT", "9000"),
            ("WEBHOOK_PATH", "/hook"),
            ("PUBLIC_HOSTNAME", "bot.example.com"),
            ("TELEGRAM_API_URL", "http://localhost:8081"),
            ("LOG_FORMAT", "json"),
        ]);
        let config = Config::from_lookup(lookup(&pairs)).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.webhook_path, "/hook");
        assert_eq!(config.public_hostname.as_deref(), Some("bot.example.com"));
        assert_eq!(config.telegram_api_url, "http://localhost:8081");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_required() {
        let pairs: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != "ROOT_DOMAIN")
            .collect();
        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("ROOT_DOMAIN"));

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("TELOXIDE_TOKEN", ""));
        let vars = lookup(&pairs);
        assert_eq!(
            Config::from_lookup(vars).unwrap_err(),
            ConfigError::Missing("TELOXIDE_TOKEN")
        );
    }

    #[test]
    fn test_invalid_values() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("WEBHOOK_PORT", "eighty"));
        assert!(matches!(
            Config::from_lookup(lookup(&pairs)),
            Err(ConfigError::Invalid("WEBHOOK_PORT", _))
        ));

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("WEBHOOK_PATH", "telegram"));
        assert!(matches!(
            Config::from_lookup(lookup(&pairs)),
            Err(ConfigError::Invalid("WEBHOOK_PATH", _))
        ));

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("LOG_FORMAT", "xml"));
        assert!(matches!(
            Config::from_lookup(lookup(&pairs)),
            Err(ConfigError::Invalid("LOG_FORMAT", _))
        ));
    }
}
