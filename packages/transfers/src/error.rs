//! Error types for the transfer scraper.
//!
//! Extraction and normalization never fail: unparseable values degrade to
//! `None`. Errors only arise from input validation, the network fetch, the
//! marker registry check and export I/O.

use thiserror::Error;

use crate::markers::CellField;

/// Main error type for the transfer scraper library.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Season outside the range covered by the site.
    #[error("Invalid season: {0}. Expected the first calendar year of a season between {min} and {max}", min = crate::config::FIRST_SEASON, max = crate::config::current_season())]
    InvalidSeason(i32),

    /// Unknown league or malformed league slug/id.
    #[error("Invalid league: '{0}'")]
    InvalidLeague(String),

    /// Malformed numeric selection such as `"1 3-5"`.
    #[error("Invalid selection: '{0}'. Expected numbers or ranges, e.g. '1', '3 5', '6-10'")]
    InvalidSelection(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download a transfer page.
    #[error("Failed to download transfers for {league} {season} ({window}): {source}")]
    PageDownload {
        league: String,
        season: i32,
        window: String,
        #[source]
        source: reqwest::Error,
    },

    /// Some league seasons could not be downloaded; their files were left as they were.
    #[error("{failed} of {total} league season(s) failed to download and were not saved")]
    IncompleteScrape { failed: usize, total: usize },

    /// A cell field has no marker registered for it.
    #[error("No marker registered for field '{0}'")]
    MissingMarker(CellField),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for transfer scraper operations.
pub type Result<T> = std::result::Result<T, TransferError>;
