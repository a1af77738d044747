//! Runtime configuration from the environment
//!
//! Credentials are never hard-coded; the binary loads a `.env` file before
//! calling [`Settings::from_env`].

use std::env;
use std::path::PathBuf;

use crate::client::{ClientConfig, DEFAULT_SOURCE_URL};
use crate::error::{Result, TvSubsError};
use crate::export::OUTPUT_FILE;
use crate::resolver::RedditCredentials;

const ENV_SOURCE_URL: &str = "TVSUBS_SOURCE_URL";
const ENV_USER_AGENT: &str = "TVSUBS_USER_AGENT";
const ENV_CLIENT_ID: &str = "REDDIT_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "REDDIT_CLIENT_SECRET";
const ENV_OUTPUT_PATH: &str = "TVSUBS_OUTPUT_PATH";

/// Settings for one catalogue run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Index page URL (default: the r/television "big list").
    pub source_url: String,
    /// Descriptive User-Agent, used for both the page fetch and the API.
    pub user_agent: String,
    /// Reddit API client id.
    pub client_id: String,
    /// Reddit API client secret.
    pub client_secret: String,
    /// Where the catalogue CSV is written.
    pub output_path: PathBuf,
}

impl Settings {
    /// Load settings from the environment.
    ///
    /// # Errors
    /// `TvSubsError::Config` if a required variable is missing or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            source_url: env::var(ENV_SOURCE_URL)
                .unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string()),
            user_agent: required(ENV_USER_AGENT)?,
            client_id: required(ENV_CLIENT_ID)?,
            client_secret: required(ENV_CLIENT_SECRET)?,
            output_path: env::var(ENV_OUTPUT_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(OUTPUT_FILE)),
        })
    }

    /// Client configuration for the index page fetch.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.source_url.clone(), self.user_agent.clone())
    }

    /// Credentials for the Reddit API resolver.
    pub fn credentials(&self) -> RedditCredentials {
        RedditCredentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TvSubsError::Config(format!("{name} must be set"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-wide, so everything runs in one test.
    #[test]
    fn test_from_env() {
        env::set_var(ENV_USER_AGENT, "tvsubs tests");
        env::set_var(ENV_CLIENT_ID, "id");
        env::set_var(ENV_CLIENT_SECRET, "secret");
        env::remove_var(ENV_SOURCE_URL);
        env::remove_var(ENV_OUTPUT_PATH);

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(settings.output_path, PathBuf::from(OUTPUT_FILE));
        assert_eq!(settings.credentials().client_id, "id");
        assert_eq!(settings.client_config().user_agent, "tvsubs tests");

        env::set_var(ENV_SOURCE_URL, "http://localhost/list");
        env::set_var(ENV_OUTPUT_PATH, "/tmp/out.csv");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.source_url, "http://localhost/list");
        assert_eq!(settings.output_path, PathBuf::from("/tmp/out.csv"));

        env::set_var(ENV_USER_AGENT, "   ");
        let result = Settings::from_env();
        assert!(matches!(result, Err(TvSubsError::Config(_))));

        env::remove_var(ENV_USER_AGENT);
        let result = Settings::from_env();
        match result {
            Err(TvSubsError::Config(message)) => {
                assert!(message.contains(ENV_USER_AGENT));
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
