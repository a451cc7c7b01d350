//! Configuration constants and validation functions for the transfer scraper.

use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, TransferError};
use crate::types::{InternalFilter, League, LoanFilter, Window};

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Browser user agent sent with every request.
///
/// Transfermarkt answers requests from unknown agents with an error page.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/51.0.2704.103 Safari/537.36";

/// First season with transfer data available for every catalog league.
pub const FIRST_SEASON: i32 = 1992;

/// Default directory for CSV output.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Catalog entry: menu number, URL slug, league id and display label.
pub struct CatalogEntry {
    pub number: u32,
    pub slug: &'static str,
    pub id: &'static str,
    pub label: &'static str,
}

/// Leagues selectable from the command line.
pub const LEAGUES: [CatalogEntry; 10] = [
    CatalogEntry { number: 1, slug: "premier-league", id: "GB1", label: "ENG Premier League" },
    CatalogEntry { number: 2, slug: "laliga", id: "ES1", label: "ESP La Liga" },
    CatalogEntry { number: 3, slug: "1-bundesliga", id: "L1", label: "GER Bundesliga" },
    CatalogEntry { number: 4, slug: "serie-a", id: "IT1", label: "ITA Serie A" },
    CatalogEntry { number: 5, slug: "ligue-1", id: "FR1", label: "FRA Ligue 1" },
    CatalogEntry { number: 6, slug: "primeira-liga", id: "PO1", label: "POR Primeira Liga" },
    CatalogEntry { number: 7, slug: "eredivisie", id: "NL1", label: "NLD Eredivisie" },
    CatalogEntry { number: 8, slug: "premier-liga", id: "RU1", label: "RUS Premier Liga" },
    CatalogEntry { number: 9, slug: "jupiler-pro-league", id: "BE1", label: "BEL Jupiler Pro League" },
    CatalogEntry { number: 10, slug: "scottish-premiership", id: "SC1", label: "SCO Scottish Premiership" },
];

/// Catalog numbers selected when the user gives no league selection.
pub const DEFAULT_LEAGUES: [u32; 5] = [1, 2, 3, 4, 5];

/// League slug pattern: lowercase words joined by hyphens.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LEAGUE_SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex"));

/// League id pattern, e.g. GB1 or L1.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LEAGUE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{2,4}$").expect("valid regex"));

/// Look up a catalog league by its menu number.
///
/// # Examples
/// ```
/// use tm_transfers::config::catalog_league;
///
/// let league = catalog_league(3).unwrap();
/// assert_eq!(league.slug, "1-bundesliga");
/// assert!(catalog_league(11).is_err());
/// ```
pub fn catalog_league(number: u32) -> Result<League> {
    LEAGUES
        .iter()
        .find(|entry| entry.number == number)
        .map(|entry| League::new(entry.slug, entry.id))
        .ok_or_else(|| TransferError::InvalidLeague(number.to_string()))
}

/// Validate a league's slug and id before they are placed in a URL.
pub fn validate_league(league: &League) -> Result<()> {
    if !LEAGUE_SLUG_PATTERN.is_match(&league.slug) {
        return Err(TransferError::InvalidLeague(league.slug.clone()));
    }
    if !LEAGUE_ID_PATTERN.is_match(&league.id) {
        return Err(TransferError::InvalidLeague(league.id.clone()));
    }
    Ok(())
}

/// The season currently running (or most recently started).
///
/// Seasons are named after their first calendar year and start in July.
pub fn current_season() -> i32 {
    let today = chrono::Local::now().date_naive();
    season_for(today.year(), today.month())
}

fn season_for(year: i32, month: u32) -> i32 {
    if month >= 7 {
        year
    } else {
        year - 1
    }
}

/// Validate that a season lies between [`FIRST_SEASON`] and the current season.
///
/// # Examples
/// ```
/// use tm_transfers::config::validate_season;
///
/// assert!(validate_season(2020).is_ok());
/// assert!(validate_season(1980).is_err());
/// ```
pub fn validate_season(season: i32) -> Result<()> {
    if (FIRST_SEASON..=current_season()).contains(&season) {
        Ok(())
    } else {
        Err(TransferError::InvalidSeason(season))
    }
}

/// Build the transfer page URL for one league, season and window.
///
/// `window = None` requests both windows on one page; the scraper itself
/// always asks for a single window.
///
/// # Panics
/// Debug builds panic if the league doesn't match the expected formats.
pub fn transfers_url(
    base: &str,
    league: &League,
    season: i32,
    window: Option<Window>,
    loans: LoanFilter,
    internal: InternalFilter,
) -> String {
    debug_assert!(
        validate_league(league).is_ok(),
        "league should be validated before calling transfers_url"
    );
    let window_code = window.map(Window::code).unwrap_or_default();
    format!(
        "{}/{}/transfers/wettbewerb/{}/plus/?saison_id={season}&s_w={window_code}&leihe={}&intern={}",
        base.trim_end_matches('/'),
        league.slug,
        league.id,
        loans.code(),
        internal.code(),
    )
}
