//! Transfermarkt transfer scraper - Download league transfer tables to CSV.
//!
//! This crate downloads the per-club transfer listings of a league season,
//! turns the loosely structured markup into typed records and writes them
//! to CSV.
//!
//! # Example
//!
//! ```
//! use tm_transfers::normalize::classify_fee;
//! use tm_transfers::types::LoanStatus;
//!
//! let fee = classify_fee(Some("Loan fee:€2m"));
//! assert_eq!(fee.fee, Some(2_000_000.0));
//! assert_eq!(fee.loan_status, LoanStatus::LoanWithFee);
//! ```
//!
//! # Architecture
//!
//! The scraper is organized into several modules:
//!
//! - [`config`]: Configuration constants, league catalog and validation
//! - [`types`]: Core data types (requests, raw rows, transfers, tables)
//! - [`schema`]: Column schemas shared by parsing, normalization and export
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client
//! - [`fetch`]: Transfer page downloading
//! - [`html`]: Markup navigation and text utilities
//! - [`extract`]: Club section extraction
//! - [`markers`]: Extensible cell marker handler system
//! - [`rows`]: Table row parsing
//! - [`normalize`]: Raw record normalization
//! - [`export`]: CSV output generation
//! - [`cli`]: Command-line interface
//! - [`harvester`]: Record assembly and window merging

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod harvester;
pub mod html;
pub mod http;
pub mod markers;
pub mod normalize;
pub mod rows;
pub mod schema;
pub mod types;

// Re-export main functions
pub use harvester::{assemble_document, merge_windows, scrape_transfers, Harvester, MarkupSource};
pub use normalize::{normalize, normalize_table};

// Re-export commonly used items
pub use config::{catalog_league, validate_league, validate_season};
pub use error::{Result, TransferError};
pub use schema::{Column, Schema, Tabular};
pub use types::{
    Direction, League, LoanStatus, RawRow, RawTransfer, Transfer, TransferRequest, TransferTable,
    Window,
};
