//! HTTP client wrapper for downloading transfer pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::Result;

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download a page as text with a single blocking request.
///
/// Non-success statuses are errors; there is no retry.
pub fn download_text(client: &Client, url: &str) -> Result<String> {
    tracing::debug!(url, "Requesting page");
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.text()?)
}
