//! Proxy directory client

use crate::model::ProxyRecord;
use crate::Result;

/// Client for the published proxy list
///
/// The list is a plain text file with one `ip,port,country,org`
/// record per line.
#[derive(Clone)]
pub struct ProxyDirectory {
    client: reqwest::Client,
    source_url: String,
}

impl ProxyDirectory {
    /// Create a directory client reading from `source_url`
    pub fn new(client: reqwest::Client, source_url: impl Into<String>) -> Self {
        Self {
            client,
            source_url: source_url.into(),
        }
    }

    /// Fetch the full, unfiltered proxy list
    ///
    /// # Errors
    /// Returns an error if the request fails or the server answers with a
    /// non-success status
    pub async fn fetch(&self) -> Result<Vec<ProxyRecord>> {
        tracing::info!("Fetching proxy list from {}", self.source_url);

        let body = self
            .client
            .get(&self.source_url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                tracing::error!("Failed to fetch proxy list: {}", e);
                e
            })?
            .text()
            .await?;

        let proxies = parse_proxy_list(&body);
        tracing::debug!("Proxy directory returned {} records", proxies.len());
        Ok(proxies)
    }
}

/// Parse the directory text format into records
///
/// Blank lines are skipped. Missing fields are filled with `Unknown`
/// (`Unknown Org` for the organisation) rather than dropping the line.
pub fn parse_proxy_list(body: &str) -> Vec<ProxyRecord> {
    body.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut fields = line.split(',');
            let mut next_or = |fallback: &str| {
                fields
                    .next()
                    .filter(|f| !f.is_empty())
                    .unwrap_or(fallback)
                    .to_string()
            };
            ProxyRecord {
                proxy_ip: next_or("Unknown"),
                proxy_port: next_or("Unknown"),
                country: next_or("Unknown"),
                org: next_or("Unknown Org"),
            }
        })
        .collect()
}

/// Keep only records whose country equals the uppercased `country`
pub fn filter_by_country(proxies: Vec<ProxyRecord>, country: &str) -> Vec<ProxyRecord> {
    let wanted = country.to_uppercase();
    proxies.into_iter().filter(|p| p.country == wanted).collect()
}
