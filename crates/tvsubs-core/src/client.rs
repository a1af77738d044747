//! HTTP client for the wiki index page
//!
//! One GET per run, no retries, default redirect handling. Reddit rejects
//! anonymous requests, so a descriptive User-Agent is required up front.

use std::time::Duration;

use crate::error::{Result, TvSubsError};

/// Default location of the r/television "big list" wiki page.
pub const DEFAULT_SOURCE_URL: &str = "https://www.reddit.com/r/television/wiki/thelist";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the index page client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the index page.
    pub source_url: String,
    /// Descriptive User-Agent string. Must be non-empty.
    pub user_agent: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Configuration for the given page URL and User-Agent.
    pub fn new(source_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            user_agent: user_agent.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// HTTP client for the wiki index page
pub struct WikiClient {
    client: reqwest::Client,
    source_url: String,
}

impl WikiClient {
    /// Create a new client.
    ///
    /// # Errors
    /// - `TvSubsError::Config` if the User-Agent is empty
    /// - `TvSubsError::Http` if the HTTP client cannot be created
    pub fn new(config: ClientConfig) -> Result<Self> {
        let user_agent = config.user_agent.trim();
        if user_agent.is_empty() {
            return Err(TvSubsError::Config(
                "User-Agent must not be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            source_url: config.source_url,
        })
    }

    /// Fetch the raw markup of the index page.
    ///
    /// # Returns
    /// The response body as a string.
    ///
    /// # Errors
    /// - `TvSubsError::Http` on a network failure
    /// - `TvSubsError::Fetch` on a non-success status
    pub async fn fetch_index(&self) -> Result<String> {
        let response = self.client.get(&self.source_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(TvSubsError::Fetch {
                status: status.as_u16(),
                url: self.source_url.clone(),
            });
        }

        Ok(response.text().await?)
    }

    /// URL this client fetches from.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::new(DEFAULT_SOURCE_URL, "tvsubs tests");
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let result = WikiClient::new(ClientConfig::new(DEFAULT_SOURCE_URL, ""));
        assert!(matches!(result, Err(TvSubsError::Config(_))));

        let result = WikiClient::new(ClientConfig::new(DEFAULT_SOURCE_URL, "   "));
        assert!(matches!(result, Err(TvSubsError::Config(_))));
    }

    #[tokio::test]
    async fn test_fetch_index_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/r/television/wiki/thelist"))
            .and(header("user-agent", "tvsubs tests"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>list</html>"))
            .mount(&server)
            .await;

        let url = format!("{}/r/television/wiki/thelist", server.uri());
        let client = WikiClient::new(ClientConfig::new(url, "tvsubs tests")).unwrap();

        let body = client.fetch_index().await.unwrap();
        assert_eq!(body, "<html>list</html>");
    }

    #[tokio::test]
    async fn test_fetch_index_non_success_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/r/television/wiki/thelist"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let url = format!("{}/r/television/wiki/thelist", server.uri());
        let client = WikiClient::new(ClientConfig::new(url.clone(), "tvsubs tests")).unwrap();

        match client.fetch_index().await {
            Err(TvSubsError::Fetch { status, url: failed }) => {
                assert_eq!(status, 429);
                assert_eq!(failed, url);
            }
            other => panic!("expected Fetch error, got {other:?}"),
        }
    }
}
