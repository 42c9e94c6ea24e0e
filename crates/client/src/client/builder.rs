//! Client builder for constructing [`GitHubClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (access token, base URL)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, user agent)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`GitHubClient`] methods in `mod.rs`)
//!
//! # Invariants
//! - `access_token` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use gitlabel_config::Settings;
use gitlabel_config::constants::DEFAULT_GITHUB_API_URL;
use secrecy::SecretString;

use crate::client::GitHubClient;
use crate::error::{ClientError, Result};

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent` header; GitHub rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("gitlabel/", env!("CARGO_PKG_VERSION"));

/// Builder for creating a new [`GitHubClient`].
pub struct GitHubClientBuilder {
    base_url: String,
    access_token: Option<SecretString>,
    timeout: Duration,
    user_agent: String,
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GITHUB_API_URL.to_string(),
            access_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl GitHubClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. Trailing slashes are removed.
    ///
    /// Default is `https://api.github.com`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the access token sent as a bearer token.
    pub fn access_token(mut self, token: SecretString) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Take the base URL and access token from loaded settings.
    ///
    /// An absent token in `settings` leaves any token set earlier in place.
    pub fn from_settings(mut self, settings: &Settings) -> Self {
        self.base_url = settings.github_api_url.clone();
        if let Some(token) = &settings.github_access_token {
            self.access_token = Some(token.clone());
        }
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`GitHubClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAccessToken`] if no token was provided.
    /// Returns [`ClientError::InvalidUrl`] if the base URL is empty or unparsable.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<GitHubClient> {
        let access_token = self.access_token.ok_or(ClientError::MissingAccessToken)?;

        let base_url = Self::normalize_base_url(self.base_url);
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is required".to_string()));
        }
        url::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL: {}", e)))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;

        Ok(GitHubClient {
            http,
            base_url,
            access_token,
        })
    }
}
