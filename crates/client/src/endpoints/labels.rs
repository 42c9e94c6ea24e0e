//! Repository label REST API endpoints.
//!
//! Responsibilities:
//! - Low-level HTTP calls to `/repos/{owner}/{repo}/labels`.
//! - Handle request serialization and response parsing.
//!
//! Does NOT handle:
//! - Pagination; only the first page of labels is returned.
//! - Synchronization logic (see `crate::sync`).

use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::debug;
use url::Url;

use crate::endpoints::{GITHUB_ACCEPT, encode_path_segment, send_request};
use crate::error::{ClientError, Result};
use crate::models::Label;

/// `{base_url}/repos/{owner}/{repo}/labels[/{name}]` with every segment encoded.
fn labels_url(base_url: &str, owner: &str, repo: &str, name: Option<&str>) -> Result<Url> {
    let mut url = format!(
        "{}/repos/{}/{}/labels",
        base_url.trim_end_matches('/'),
        encode_path_segment(owner),
        encode_path_segment(repo)
    );
    if let Some(name) = name {
        url.push('/');
        url.push_str(&encode_path_segment(name));
    }
    Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL: {}", e)))
}

fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder
        .header("Authorization", format!("Bearer {}", token))
        .header("Accept", GITHUB_ACCEPT)
}

/// List the labels of a repository.
pub async fn list_labels(
    client: &Client,
    base_url: &str,
    token: &str,
    owner: &str,
    repo: &str,
) -> Result<Vec<Label>> {
    debug!(owner, repo, "Listing labels");

    let url = labels_url(base_url, owner, repo, None)?;
    let builder = authorized(client.get(url), token);

    let response = send_request(builder, StatusCode::OK).await?;
    let labels: Vec<Label> = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse labels: {}", e)))?;

    debug!(owner, repo, count = labels.len(), "Listed labels");
    Ok(labels)
}

/// Create a label in a repository.
pub async fn create_label(
    client: &Client,
    base_url: &str,
    token: &str,
    owner: &str,
    repo: &str,
    label: &Label,
) -> Result<()> {
    debug!(owner, repo, name = %label.name, "Creating label");

    let url = labels_url(base_url, owner, repo, None)?;
    let builder = authorized(client.post(url), token).json(label);

    send_request(builder, StatusCode::CREATED).await?;
    Ok(())
}

/// Delete a label from a repository by name.
pub async fn delete_label(
    client: &Client,
    base_url: &str,
    token: &str,
    owner: &str,
    repo: &str,
    name: &str,
) -> Result<()> {
    debug!(owner, repo, name, "Deleting label");

    let url = labels_url(base_url, owner, repo, Some(name))?;
    let builder = authorized(client.delete(url), token);

    send_request(builder, StatusCode::NO_CONTENT).await?;
    Ok(())
}
