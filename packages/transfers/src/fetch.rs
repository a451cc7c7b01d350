//! Transfer page downloading.

use reqwest::blocking::Client;

use crate::error::{Result, TransferError};
use crate::http::download_text;
use crate::types::{TransferRequest, Window};

/// Download the transfer page of one request for a single window.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `request` - League, season and filters
/// * `window` - The window to list
///
/// # Returns
/// Raw page markup
pub fn download_transfers_html(
    client: &Client,
    request: &TransferRequest,
    window: Window,
) -> Result<String> {
    let url = request.url(window);
    download_text(client, &url).map_err(|e| {
        if let TransferError::Http(source) = e {
            TransferError::PageDownload {
                league: request.league.slug.clone(),
                season: request.season,
                window: window.to_string(),
                source,
            }
        } else {
            e
        }
    })
}
