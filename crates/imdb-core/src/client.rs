//! HTTP client for IMDb
//!
//! Plain GET requests with browser-like headers. Relative links found in
//! scraped pages are resolved against the configured base URL, which lets
//! tests point the whole client at a mock server.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use tracing::debug;
use url::Url;

use crate::error::{ImdbError, Result};

/// Base URL for IMDb
pub const IMDB_BASE_URL: &str = "https://www.imdb.com";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Profile pages are only scraped in their English rendition
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Configuration for the IMDb HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host every relative path is resolved against
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: IMDB_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at a different host
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for IMDb pages
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ImdbClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Parsed base URL
    base_url: Url,
}

impl ImdbClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `ImdbError::InvalidUrl` - `base_url` is not an absolute URL
    /// - `ImdbError::HttpError` - the HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ImdbError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Resolve a path or link target to an absolute URL
    ///
    /// Absolute inputs are returned unchanged.
    pub fn resolve(&self, href: &str) -> Result<String> {
        self.base_url
            .join(href)
            .map(String::from)
            .map_err(|e| ImdbError::InvalidUrl(format!("{}: {}", href, e)))
    }

    /// Fetch HTML content from a path on the configured host
    ///
    /// # Errors
    /// - `ImdbError::InvalidUrl` - the path cannot be joined to the base URL
    /// - `ImdbError::NotFound` - server returned 404
    /// - `ImdbError::HttpError` - network error or any other non-success status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = self.resolve(path)?;
        self.fetch_url(&url).await
    }

    /// Fetch HTML content from an absolute URL
    pub async fn fetch_url(&self, url: &str) -> Result<String> {
        debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ImdbError::NotFound(url.to_string()));
        }

        let response = response.error_for_status()?;
        debug!(%url, status = status.as_u16(), "response received");

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.imdb.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_client_creation() {
        let client = ImdbClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_relative_base_url() {
        let result = ImdbClient::with_config(ClientConfig::with_base_url("www.imdb.com"));
        assert!(matches!(result, Err(ImdbError::InvalidUrl(_))));
    }

    #[test]
    fn test_resolve_relative_path() {
        let client = ImdbClient::new().unwrap();
        assert_eq!(
            client.resolve("/name/nm0000093/bio").unwrap(),
            "https://www.imdb.com/name/nm0000093/bio"
        );
    }

    #[test]
    fn test_resolve_absolute_url_unchanged() {
        let client = ImdbClient::new().unwrap();
        assert_eq!(
            client.resolve("https://m.media-amazon.com/images/M/a.jpg").unwrap(),
            "https://m.media-amazon.com/images/M/a.jpg"
        );
    }

    #[test]
    fn test_resolve_against_custom_base() {
        let client =
            ImdbClient::with_config(ClientConfig::with_base_url("http://127.0.0.1:8080")).unwrap();
        assert_eq!(
            client.resolve("/name/nm1/mediaviewer/rm2").unwrap(),
            "http://127.0.0.1:8080/name/nm1/mediaviewer/rm2"
        );
    }
}
