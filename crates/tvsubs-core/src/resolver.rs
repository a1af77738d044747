//! Subreddit name resolution through the Reddit API
//!
//! The comment archives key subreddits by fullname ("t5_…"), which is stabler
//! than the display name, so every show is resolved once against the live
//! API. Lookups run one at a time, in catalogue order.

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::warn;

use crate::error::{Result, TvSubsError};

/// OAuth token endpoint host.
const DEFAULT_AUTH_URL: &str = "https://www.reddit.com";

/// Authenticated API host.
const DEFAULT_API_URL: &str = "https://oauth.reddit.com";

/// How a failed lookup is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvePolicy {
    /// Abort the whole run on the first failed lookup; no output is written.
    #[default]
    FailFast,
    /// Log the failure and record an empty id for that show.
    SkipAndRecord,
}

/// Resolve a subreddit display name to its stable fullname.
#[async_trait]
pub trait ResolveSubreddit {
    /// Look up one subreddit by name.
    ///
    /// # Errors
    /// `TvSubsError::Lookup` if the subreddit does not exist or the name is
    /// invalid.
    async fn resolve(&self, name: &str) -> Result<String>;
}

/// Reddit API credentials.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    /// Descriptive User-Agent; Reddit throttles generic ones.
    pub user_agent: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct AboutResponse {
    data: AboutData,
}

#[derive(Deserialize)]
struct AboutData {
    /// Subreddit fullname, e.g. "t5_2qnzg".
    name: String,
}

/// Resolver backed by the Reddit API's client-credentials grant.
///
/// The bearer token is fetched on first use and reused for the rest of the
/// run. One `GET /r/{name}/about` per lookup, no caching across names.
pub struct RedditResolver {
    http: reqwest::Client,
    credentials: RedditCredentials,
    auth_url: String,
    api_url: String,
    token: Mutex<Option<String>>,
}

impl RedditResolver {
    /// Create a resolver against the live Reddit endpoints.
    ///
    /// # Errors
    /// - `TvSubsError::Config` if the User-Agent is empty
    /// - `TvSubsError::Http` if the HTTP client cannot be created
    pub fn new(credentials: RedditCredentials) -> Result<Self> {
        Self::with_base_urls(credentials, DEFAULT_AUTH_URL, DEFAULT_API_URL)
    }

    /// Create a resolver against alternative endpoints (used by tests).
    pub fn with_base_urls(
        credentials: RedditCredentials,
        auth_url: &str,
        api_url: &str,
    ) -> Result<Self> {
        if credentials.user_agent.trim().is_empty() {
            return Err(TvSubsError::Config(
                "User-Agent must not be empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .user_agent(credentials.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            credentials,
            auth_url: auth_url.trim_end_matches('/').to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token: Mutex::new(None),
        })
    }

    /// Return the cached bearer token, fetching it on first use.
    async fn token(&self) -> Result<String> {
        let mut token = self.token.lock().await;
        if let Some(token) = token.as_ref() {
            return Ok(token.clone());
        }

        let url = format!("{}/api/v1/access_token", self.auth_url);
        let response = self
            .http
            .post(&url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TvSubsError::Auth(format!(
                "token request returned status {}",
                status.as_u16()
            )));
        }

        let body: TokenResponse = response.json().await?;
        *token = Some(body.access_token.clone());
        Ok(body.access_token)
    }
}

#[async_trait]
impl ResolveSubreddit for RedditResolver {
    async fn resolve(&self, name: &str) -> Result<String> {
        let token = self.token().await?;
        let url = format!("{}/r/{}/about", self.api_url, name);

        let response = self.http.get(&url).bearer_auth(&token).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TvSubsError::Lookup {
                name: name.to_string(),
                reason: format!("status {}", status.as_u16()),
            });
        }

        let text = response.text().await?;
        let body: AboutResponse =
            serde_json::from_str(&text).map_err(|e| TvSubsError::Lookup {
                name: name.to_string(),
                reason: format!("unexpected response: {e}"),
            })?;

        Ok(body.data.name)
    }
}

/// Resolve every show name in order, one lookup per name.
///
/// The returned ids are index-aligned with `names`. Under
/// [`ResolvePolicy::SkipAndRecord`] a failed lookup records an empty id;
/// under [`ResolvePolicy::FailFast`] it aborts the run.
pub async fn resolve_all<R: ResolveSubreddit>(
    resolver: &R,
    names: &[String],
    policy: ResolvePolicy,
) -> Result<Vec<String>> {
    let mut ids = Vec::with_capacity(names.len());

    for name in names {
        match resolver.resolve(name).await {
            Ok(id) => ids.push(id),
            Err(err) if policy == ResolvePolicy::SkipAndRecord => {
                warn!("leaving '{name}' unresolved: {err}");
                ids.push(String::new());
            }
            Err(err) => return Err(err),
        }
    }

    Ok(ids)
}
