//! Core data types for the transfer scraper.
//!
//! A movement starts life as a [`RawRow`] produced by the row parser, is
//! tagged with its request context as a [`RawTransfer`] by the assembler,
//! and ends as a typed [`Transfer`] after normalization.

use std::fmt;

use clap::ValueEnum;

use crate::config::transfers_url;
use crate::schema::{Schema, Tabular};

/// Whether a player joined or left the club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    /// Get the string value used in exported tables.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-season transfer period.
///
/// Ordering follows the calendar: summer sorts before winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Window {
    Summer,
    Winter,
}

impl Window {
    /// Both windows, in season order.
    pub const ALL: [Window; 2] = [Window::Summer, Window::Winter];

    /// Single-letter code used in the `s_w` query parameter.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Summer => "s",
            Self::Winter => "w",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summer => "summer",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loan classification derived from the fee text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoanStatus {
    /// Permanent move (or free transfer).
    #[default]
    None,
    /// Player returning to the parent club.
    EndOfLoan,
    /// Loan with a fee attached.
    LoanWithFee,
    /// Loan without a fee.
    FreeLoan,
}

impl LoanStatus {
    /// Get the string value used in exported tables.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::EndOfLoan => "end of loan",
            Self::LoanWithFee => "loan with fee",
            Self::FreeLoan => "free loan",
        }
    }

    /// Whether this status marks a loan at all.
    #[must_use]
    pub fn is_loan(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Loan handling requested from the site (`leihe` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LoanFilter {
    /// Leave out every loan.
    Exclude,
    /// Include loans.
    Include,
    /// Only loans.
    Only,
    /// Include loans, but not players returning from one.
    #[default]
    ExcludeReturning,
}

impl LoanFilter {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Exclude => "0",
            Self::Include => "1",
            Self::Only => "2",
            Self::ExcludeReturning => "3",
        }
    }
}

/// Whether movements within a club (e.g. reserves to first team) are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InternalFilter {
    #[default]
    Exclude,
    Include,
}

impl InternalFilter {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Exclude => "0",
            Self::Include => "1",
        }
    }
}

/// Localised version of the site; decides the currency of fees and values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Site {
    /// transfermarkt.com, euros.
    #[default]
    Eur,
    /// transfermarkt.co.uk, pounds.
    Gbp,
    /// transfermarkt.us, dollars.
    Usd,
}

impl Site {
    #[must_use]
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Eur => "https://www.transfermarkt.com",
            Self::Gbp => "https://www.transfermarkt.co.uk",
            Self::Usd => "https://www.transfermarkt.us",
        }
    }
}

/// A league as addressed in site URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    /// URL slug, e.g. "premier-league".
    pub slug: String,
    /// League identifier, e.g. "GB1".
    pub id: String,
}

impl League {
    #[must_use]
    pub fn new(slug: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.slug)
    }
}

/// Everything needed to scrape one league season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Site base URL (scheme and host).
    pub base_url: String,
    pub league: League,
    /// First calendar year of the season.
    pub season: i32,
    /// Requested window; `None` scrapes both and merges them.
    pub window: Option<Window>,
    pub loans: LoanFilter,
    pub internal: InternalFilter,
}

impl TransferRequest {
    /// Create a request for both windows with default filters.
    #[must_use]
    pub fn new(site: Site, league: League, season: i32) -> Self {
        Self {
            base_url: site.base_url().to_string(),
            league,
            season,
            window: None,
            loans: LoanFilter::default(),
            internal: InternalFilter::default(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_window(mut self, window: Option<Window>) -> Self {
        self.window = window;
        self
    }

    #[must_use]
    pub fn with_loans(mut self, loans: LoanFilter) -> Self {
        self.loans = loans;
        self
    }

    #[must_use]
    pub fn with_internal(mut self, internal: InternalFilter) -> Self {
        self.internal = internal;
        self
    }

    /// URL of the page listing this request's movements for one window.
    #[must_use]
    pub fn url(&self, window: Window) -> String {
        transfers_url(
            &self.base_url,
            &self.league,
            self.season,
            Some(window),
            self.loans,
            self.internal,
        )
    }
}

/// One table row as read from the markup; every field is raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Club the movement is attributed to.
    pub club: String,
    pub name: Option<String>,
    pub age: Option<String>,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub short_pos: Option<String>,
    pub market_value: Option<String>,
    /// Counter-party club.
    pub dealing_club: Option<String>,
    /// Counter-party country.
    pub dealing_country: Option<String>,
    pub fee: Option<String>,
    pub movement: Direction,
}

impl RawRow {
    /// Create a row with every field unset.
    #[must_use]
    pub fn new(club: impl Into<String>, movement: Direction) -> Self {
        Self {
            club: club.into(),
            name: None,
            age: None,
            nationality: None,
            position: None,
            short_pos: None,
            market_value: None,
            dealing_club: None,
            dealing_country: None,
            fee: None,
            movement,
        }
    }
}

/// A raw row tagged with the request it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransfer {
    pub row: RawRow,
    pub window: Window,
    /// League slug as used in the request.
    pub league: String,
    /// Season as requested, e.g. "2020".
    pub season: String,
}

impl RawTransfer {
    #[must_use]
    pub fn new(row: RawRow, window: Window, league: impl Into<String>, season: impl Into<String>) -> Self {
        Self {
            row,
            window,
            league: league.into(),
            season: season.into(),
        }
    }
}

/// A normalized movement: the terminal record handed to export.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub club: String,
    pub name: Option<String>,
    pub age: Option<u32>,
    pub nationality: String,
    pub position: String,
    pub short_pos: String,
    pub market_value: Option<f64>,
    pub dealing_club: String,
    pub dealing_country: String,
    pub fee: Option<f64>,
    pub movement: Direction,
    pub window: Window,
    /// League display name, e.g. "Premier League".
    pub league: String,
    pub season: Option<i32>,
    pub is_loan: bool,
    pub loan_status: LoanStatus,
}

/// An ordered set of records sharing one schema.
///
/// The schema travels with the record type, so an empty table still knows
/// its columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferTable<R> {
    pub records: Vec<R>,
    /// Non-fatal problems met while building the table (e.g. failed fetches).
    pub warnings: Vec<String>,
}

impl<R> TransferTable<R> {
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Tabular> TransferTable<R> {
    /// Columns of this table, in export order.
    #[must_use]
    pub fn schema(&self) -> &'static Schema {
        R::SCHEMA
    }
}

impl<R> Default for TransferTable<R> {
    fn default() -> Self {
        Self::empty()
    }
}
