//! Cloudflare Workers custom-domain client

use serde::{Deserialize, Serialize};

use crate::Result;

/// Default Cloudflare API v4 base URL
pub const CLOUDFLARE_API_URL: &str = "https://api.cloudflare.com/client/v4";

/// Status reported when the domain is outside the root domain
const STATUS_BAD_REQUEST: u16 = 400;
/// Status reported when the domain is already attached to the service
const STATUS_CONFLICT: u16 = 409;

/// Account and zone the worker domains are registered under
#[derive(Debug, Clone)]
pub struct CloudflareCredentials {
    pub account_id: String,
    pub zone_id: String,
    pub api_key: String,
    pub api_email: String,
    /// Worker service the domains are routed to
    pub service_name: String,
    /// Only subdomains of this domain may be registered
    pub root_domain: String,
}

#[derive(Deserialize)]
struct DomainListResponse {
    #[serde(default)]
    result: Vec<WorkerDomain>,
}

#[derive(Deserialize)]
struct WorkerDomain {
    hostname: String,
    service: String,
}

#[derive(Serialize)]
struct RegisterDomainBody<'a> {
    environment: &'a str,
    hostname: &'a str,
    service: &'a str,
    zone_id: &'a str,
}

/// Wrapper around the Workers domains endpoint
#[derive(Clone)]
pub struct CloudflareApi {
    client: reqwest::Client,
    base_url: String,
    credentials: CloudflareCredentials,
}

impl CloudflareApi {
    /// Create a client against the public Cloudflare API
    pub fn new(client: reqwest::Client, credentials: CloudflareCredentials) -> Self {
        Self::with_base_url(client, CLOUDFLARE_API_URL, credentials)
    }

    /// Create a client against a custom API base URL
    pub fn with_base_url(
        client: reqwest::Client,
        base_url: impl Into<String>,
        credentials: CloudflareCredentials,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn domains_url(&self) -> String {
        format!(
            "{}/accounts/{}/workers/domains",
            self.base_url, self.credentials.account_id
        )
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.credentials.api_key)
            .header("X-Auth-Email", &self.credentials.api_email)
            .header("X-Auth-Key", &self.credentials.api_key)
    }

    /// List hostnames currently routed to the configured service
    ///
    /// A non-200 answer is treated as an empty list.
    pub async fn list_domains(&self) -> Result<Vec<String>> {
        let resp = self
            .authorized(self.client.get(self.domains_url()))
            .send()
            .await?;

        if resp.status() != reqwest::StatusCode::OK {
            tracing::warn!("Listing worker domains returned {}", resp.status());
            return Ok(Vec::new());
        }

        let list: DomainListResponse = resp.json().await?;
        Ok(list
            .result
            .into_iter()
            .filter(|d| d.service == self.credentials.service_name)
            .map(|d| d.hostname)
            .collect())
    }

    /// Attach `domain` to the worker service
    ///
    /// Returns the HTTP status of the registration, or a locally decided
    /// status: 400 when the domain is not under the root domain, 409 when
    /// it is already registered.
    ///
    /// # Errors
    /// Returns an error only on transport failure
    pub async fn register_domain(&self, domain: &str) -> Result<u16> {
        let domain = domain.to_lowercase();

        if !is_under_root(&domain, &self.credentials.root_domain) {
            tracing::warn!("Rejecting {}: not under {}", domain, self.credentials.root_domain);
            return Ok(STATUS_BAD_REQUEST);
        }

        let registered = self.list_domains().await?;
        if registered.iter().any(|d| d == &domain) {
            tracing::info!("Domain {} is already registered", domain);
            return Ok(STATUS_CONFLICT);
        }

        tracing::info!("Registering worker domain {}", domain);
        let body = RegisterDomainBody {
            environment: "production",
            hostname: &domain,
            service: &self.credentials.service_name,
            zone_id: &self.credentials.zone_id,
        };
        let resp = self
            .authorized(self.client.put(self.domains_url()))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to register domain {}: {}", domain, e);
                e
            })?;

        Ok(resp.status().as_u16())
    }
}

/// Whether `domain` is `root_domain` itself or one of its subdomains
fn is_under_root(domain: &str, root_domain: &str) -> bool {
    let root = root_domain.to_lowercase();
    domain == root || domain.ends_with(&format!(".{}", root))
}
