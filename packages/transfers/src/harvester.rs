//! Main harvester service that ties all components together.
//!
//! Scraping one window is a function of (league, season, window). Scraping
//! a whole season is the merge of the two single-window results.

use reqwest::blocking::Client;
use scraper::Html;

use crate::config::{validate_league, validate_season};
use crate::error::Result;
use crate::extract::extract_sections;
use crate::fetch::download_transfers_html;
use crate::http::create_client;
use crate::rows::RowParser;
use crate::types::{Direction, RawTransfer, TransferRequest, TransferTable, Window};

/// Supplier of raw page markup.
pub trait MarkupSource {
    /// Fetch the markup listing one window of a request.
    fn fetch(&self, request: &TransferRequest, window: Window) -> Result<String>;
}

impl MarkupSource for Client {
    fn fetch(&self, request: &TransferRequest, window: Window) -> Result<String> {
        download_transfers_html(self, request, window)
    }
}

/// Assemble the records of one parsed page.
///
/// For each club section, arrivals come before departures; sections keep
/// page order. Every record is tagged with the window, league and season.
pub fn assemble_document(
    parser: &RowParser,
    doc: &Html,
    window: Window,
    league: &str,
    season: &str,
) -> TransferTable<RawTransfer> {
    let mut records = Vec::new();

    for section in extract_sections(doc) {
        let tables = [
            (section.table_in, Direction::In),
            (section.table_out, Direction::Out),
        ];
        for (table, direction) in tables {
            let Some(table) = table else {
                continue;
            };
            records.extend(
                parser
                    .parse_table(table, &section.club, direction)
                    .into_iter()
                    .map(|row| RawTransfer::new(row, window, league, season)),
            );
        }
    }

    TransferTable::new(records)
}

/// Merge single-window tables into one.
///
/// Records are concatenated in the given order, then stably sorted by club
/// and window. Warnings are concatenated.
pub fn merge_windows(
    tables: impl IntoIterator<Item = TransferTable<RawTransfer>>,
) -> TransferTable<RawTransfer> {
    let mut merged = TransferTable::empty();
    for table in tables {
        merged.records.extend(table.records);
        merged.warnings.extend(table.warnings);
    }

    merged
        .records
        .sort_by(|a, b| (&a.row.club, a.window).cmp(&(&b.row.club, b.window)));
    merged
}

/// Scrapes transfer pages from a markup source.
pub struct Harvester<S> {
    source: S,
    parser: RowParser,
}

impl<S: MarkupSource> Harvester<S> {
    #[must_use]
    pub fn new(source: S, parser: RowParser) -> Self {
        Self { source, parser }
    }

    /// Scrape a single window.
    ///
    /// A failed fetch is logged and recorded as a warning; the result is
    /// then an empty table.
    pub fn scrape_window(&self, request: &TransferRequest, window: Window) -> TransferTable<RawTransfer> {
        let markup = match self.source.fetch(request, window) {
            Ok(markup) => markup,
            Err(e) => {
                tracing::warn!(
                    league = %request.league.slug,
                    season = request.season,
                    window = %window,
                    error = %e,
                    "Fetch failed, continuing with no records"
                );
                let mut table = TransferTable::empty();
                table.warnings.push(e.to_string());
                return table;
            }
        };

        let doc = Html::parse_document(&markup);
        let table = assemble_document(
            &self.parser,
            &doc,
            window,
            &request.league.slug,
            &request.season.to_string(),
        );
        tracing::info!(
            league = %request.league.slug,
            season = request.season,
            window = %window,
            records = table.len(),
            "Parsed transfer page"
        );
        table
    }

    /// Scrape the request's window, or both windows merged when none is set.
    pub fn scrape(&self, request: &TransferRequest) -> TransferTable<RawTransfer> {
        match request.window {
            Some(window) => self.scrape_window(request, window),
            None => merge_windows(Window::ALL.map(|window| self.scrape_window(request, window))),
        }
    }
}

/// Download and parse the transfers of one league season.
///
/// # Arguments
/// * `request` - League, season, window and filters
///
/// # Returns
/// Raw records; fetch failures show up as warnings on the table
pub fn scrape_transfers(request: &TransferRequest) -> Result<TransferTable<RawTransfer>> {
    // Validate inputs
    validate_league(&request.league)?;
    validate_season(request.season)?;

    let harvester = Harvester::new(create_client()?, RowParser::with_default_markers()?);
    Ok(harvester.scrape(request))
}
