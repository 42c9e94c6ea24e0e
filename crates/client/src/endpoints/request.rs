//! Request sending with a single expected status check.
//!
//! There is no retry: each call is sent once and any status other than the
//! expected one becomes `ClientError::ApiError`.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Error body returned by the GitHub API.
#[derive(Debug, Deserialize)]
struct GitHubMessage {
    message: String,
}

/// Send `builder` and require the response status to be `expected`.
///
/// # Errors
///
/// Returns `ClientError::HttpError` if the request could not be sent, or
/// `ClientError::ApiError` with the status, URL and GitHub's error message
/// (or the raw body) for any other status.
pub async fn send_request(builder: RequestBuilder, expected: StatusCode) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();

    if status == expected {
        return Ok(response);
    }

    let url = response.url().to_string();
    debug!(status = status.as_u16(), %url, "Unexpected response status");

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let message = match serde_json::from_str::<GitHubMessage>(&body) {
        Ok(m) => m.message,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("Unexpected status")
            .to_string(),
        Err(_) => body,
    };

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}
