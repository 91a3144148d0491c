//! HTML rendering of proxy lists
//!
//! The bot sends this page back as `proxies.html`. Each proxy gets a set
//! of websocket client links pointing at the worker host, one per
//! protocol and port.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt::Write as _;

use crate::model::ProxyRecord;

/// Number of proxies listed per page
pub const PROXIES_PER_PAGE: usize = 24;

const PROTOCOLS: [&str; 3] = ["trojan", "vless", "ss"];
const PORTS: [u16; 2] = [443, 80];

/// Renders a page of the proxy list into a standalone HTML document
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    service_name: String,
    per_page: usize,
}

impl HtmlRenderer {
    /// Create a renderer tagging links with `service_name`
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            per_page: PROXIES_PER_PAGE,
        }
    }

    /// Render page `page` (0-indexed) of `proxies` for clients connecting
    /// through `hostname`
    ///
    /// A page past the end renders an empty listing.
    pub fn render(&self, hostname: &str, proxies: &[ProxyRecord], page: usize) -> String {
        let total_pages = proxies.len().div_ceil(self.per_page).max(1);
        let start = page.saturating_mul(self.per_page);
        let page_items: Vec<(usize, &ProxyRecord)> = proxies
            .iter()
            .enumerate()
            .skip(start)
            .take(self.per_page)
            .collect();
        let uuid = uuid::Uuid::new_v4().to_string();

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(html, "<title>{} proxies</title>", escape_html(&self.service_name));
        html.push_str(
            "<style>body{font-family:sans-serif;margin:1rem}\
             table{border-collapse:collapse;width:100%}\
             td,th{border:1px solid #ccc;padding:.3rem;vertical-align:top}\
             input{width:100%;font-family:monospace}</style>\n",
        );
        html.push_str("</head>\n<body>\n");
        let _ = writeln!(
            html,
            "<h1>{} proxies</h1>\n<p>Host: {} | Page {} of {} | {} proxies total</p>",
            escape_html(&self.service_name),
            escape_html(hostname),
            page.saturating_add(1),
            total_pages,
            proxies.len()
        );

        if page_items.is_empty() {
            html.push_str("<p>No proxies on this page.</p>\n");
        } else {
            html.push_str("<table>\n<tr><th>#</th><th>Country</th><th>Org</th><th>Address</th><th>Links</th></tr>\n");
            for (index, proxy) in page_items {
                let _ = writeln!(
                    html,
                    "<tr><td>{}</td><td>{} {}</td><td>{}</td><td>{}</td><td>",
                    index + 1,
                    country_flag(&proxy.country),
                    escape_html(&proxy.country),
                    escape_html(&proxy.org),
                    escape_html(&proxy.address())
                );
                for link in self.proxy_links(hostname, &uuid, index + 1, proxy) {
                    let _ = writeln!(html, "<input readonly value=\"{}\">", escape_html(&link));
                }
                html.push_str("</td></tr>\n");
            }
            html.push_str("</table>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Client links for one proxy, every protocol on every port
    fn proxy_links(
        &self,
        hostname: &str,
        uuid: &str,
        number: usize,
        proxy: &ProxyRecord,
    ) -> Vec<String> {
        let path = format!("/{}-{}", proxy.proxy_ip, proxy.proxy_port);
        let mut links = Vec::with_capacity(PORTS.len() * PROTOCOLS.len());

        for port in PORTS {
            let tls = port == 443;
            for protocol in PROTOCOLS {
                let user = if protocol == "ss" {
                    STANDARD.encode(format!("none:{}", uuid))
                } else {
                    uuid.to_string()
                };
                let sni = if !tls && protocol == "vless" { "" } else { hostname };
                let fragment = format!(
                    "{} {} {} WS {} [{}]",
                    number,
                    country_flag(&proxy.country),
                    proxy.org,
                    if tls { "TLS" } else { "NTLS" },
                    self.service_name
                );

                links.push(format!(
                    "{}://{}@{}:{}?encryption=none&type=ws&host={}&path={}&security={}&sni={}#{}",
                    protocol,
                    urlencoding::encode(&user),
                    hostname,
                    port,
                    urlencoding::encode(hostname),
                    urlencoding::encode(&path),
                    if tls { "tls" } else { "none" },
                    urlencoding::encode(sni),
                    urlencoding::encode(&fragment)
                ));
            }
        }

        links
    }
}

/// Regional-indicator flag for a two-letter country code
pub fn country_flag(country: &str) -> String {
    let code = country.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return "🏳".to_string();
    }
    code.to_ascii_uppercase()
        .chars()
        .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
        .collect()
}

/// Escape text for inclusion in HTML element content and attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
