//! GitHub REST API client and label methods.
//!
//! This module provides [`GitHubClient`], which holds the HTTP client, base
//! URL and access token and forwards calls to [`crate::endpoints`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Synchronization between repositories (see [`crate::sync`])
//!
//! # Invariants
//! - The access token is only exposed when building a request header.

pub mod builder;

use secrecy::{ExposeSecret, SecretString};

use crate::endpoints;
use crate::error::Result;
use crate::models::Label;

/// GitHub REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use gitlabel_client::GitHubClient;
/// use secrecy::SecretString;
///
/// let client = GitHubClient::builder()
///     .access_token(SecretString::new("ghp_token".to_string().into()))
///     .build()?;
/// ```
pub struct GitHubClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) access_token: SecretString,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GitHubClientBuilder {
        builder::GitHubClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the labels of `owner/repo`.
    pub async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>> {
        endpoints::list_labels(
            &self.http,
            &self.base_url,
            self.access_token.expose_secret(),
            owner,
            repo,
        )
        .await
    }

    /// Create `label` in `owner/repo`.
    pub async fn create_label(&self, owner: &str, repo: &str, label: &Label) -> Result<()> {
        endpoints::create_label(
            &self.http,
            &self.base_url,
            self.access_token.expose_secret(),
            owner,
            repo,
            label,
        )
        .await
    }

    /// Delete the label called `name` from `owner/repo`.
    pub async fn delete_label(&self, owner: &str, repo: &str, name: &str) -> Result<()> {
        endpoints::delete_label(
            &self.http,
            &self.base_url,
            self.access_token.expose_secret(),
            owner,
            repo,
            name,
        )
        .await
    }
}
