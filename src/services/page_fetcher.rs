use std::time::{Duration, Instant};
use reqwest::header::{HeaderName, ACCEPT_ENCODING, CACHE_CONTROL, CONTENT_ENCODING};
use reqwest::{Client, Response};
use crate::config::constants;
use crate::errors::{SeolyzerError, SeolyzerResult};
use crate::structs::fetched_page::FetchedPage;

/// HTTP client shared by all categories within a run: one connection pool,
/// one cookie jar, one fixed User-Agent. Redirects are followed.
pub struct PageFetcher {
    client: Client,
    base_url: String,
}

impl PageFetcher {
    pub fn new(base_url: &str) -> SeolyzerResult<Self> {
        let client = Client::builder()
            .user_agent(constants::USER_AGENT)
            .cookie_store(true)
            .build()
            .map_err(|e| SeolyzerError::system_error("HTTP client setup", &e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_homepage(&self) -> SeolyzerResult<FetchedPage> {
        self.fetch("/", constants::homepage_timeout()).await
    }

    pub async fn fetch(&self, path: &str, timeout: Duration) -> SeolyzerResult<FetchedPage> {
        let url = format!("{}{}", self.base_url, path);
        let started = Instant::now();

        let response = self.client.get(&url).timeout(timeout).send().await?;

        let status = response.status().as_u16();
        let content_encoding = header_value(&response, CONTENT_ENCODING);
        let cache_control = header_value(&response, CACHE_CONTROL);
        let body = response.text().await?;
        let elapsed = started.elapsed();

        Ok(FetchedPage {
            status,
            body_bytes: body.len(),
            body,
            content_encoding,
            cache_control,
            elapsed,
        })
    }

    /// Asks the server for a gzip response and reports what it negotiated.
    /// Kept separate so the regular fetches stay un-encoded and parseable.
    pub async fn probe_compression(&self) -> SeolyzerResult<Option<String>> {
        let url = format!("{}/", self.base_url);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT_ENCODING, "gzip")
            .timeout(constants::aux_timeout())
            .send()
            .await?;

        Ok(header_value(&response, CONTENT_ENCODING))
    }
}

fn header_value(response: &Response, name: HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
