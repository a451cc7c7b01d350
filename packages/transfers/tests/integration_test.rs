//! End-to-end integration tests for the scraping pipeline.
//!
//! Tests the complete pipeline from page markup to CSV generation
//! using fixture pages of a Premier League 2020 season.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use tm_transfers::error::Result;
use tm_transfers::export::{generate_csv, save_csv};
use tm_transfers::harvester::{Harvester, MarkupSource};
use tm_transfers::normalize::normalize_table;
use tm_transfers::rows::RowParser;
use tm_transfers::types::{
    Direction, League, LoanStatus, RawTransfer, Site, Transfer, TransferRequest, TransferTable,
    Window,
};

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("premier_league")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

/// Serves the fixture page of each window.
struct FixtureSource;

impl MarkupSource for FixtureSource {
    fn fetch(&self, _request: &TransferRequest, window: Window) -> Result<String> {
        Ok(load_fixture(&format!("{}.html", window.as_str())))
    }
}

/// Serves the same markup for every window.
struct StaticSource(&'static str);

impl MarkupSource for StaticSource {
    fn fetch(&self, _request: &TransferRequest, _window: Window) -> Result<String> {
        Ok(self.0.to_string())
    }
}

fn request(window: Option<Window>) -> TransferRequest {
    TransferRequest::new(Site::Eur, League::new("premier-league", "GB1"), 2020).with_window(window)
}

/// Run the pipeline on the fixture pages.
fn run_pipeline(window: Option<Window>) -> (TransferTable<RawTransfer>, TransferTable<Transfer>) {
    let harvester = Harvester::new(FixtureSource, RowParser::with_default_markers().unwrap());
    let raw = harvester.scrape(&request(window));
    let normalized = normalize_table(&raw);
    (raw, normalized)
}

fn find<'a>(table: &'a TransferTable<Transfer>, name: &str) -> &'a Transfer {
    table
        .records
        .iter()
        .find(|t| t.name.as_deref() == Some(name))
        .unwrap_or_else(|| panic!("no record for {name}"))
}

#[test]
fn test_summer_window_page_order() {
    let (raw, _) = run_pipeline(Some(Window::Summer));

    let rows: Vec<_> = raw
        .records
        .iter()
        .map(|r| (r.row.club.as_str(), r.row.movement, r.row.name.as_deref()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Arsenal FC", Direction::In, Some("Thomas Partey")),
            ("Arsenal FC", Direction::In, Some("Willian")),
            ("Arsenal FC", Direction::Out, Some("Emiliano Martínez")),
            ("Arsenal FC", Direction::Out, Some("Matt Macey")),
            ("Aston Villa", Direction::In, Some("Ollie Watkins")),
        ]
    );
    assert!(raw.warnings.is_empty());
}

#[test]
fn test_both_windows_sorted_by_club_then_window() {
    let (raw, _) = run_pipeline(None);

    let order: Vec<_> = raw
        .records
        .iter()
        .map(|r| (r.row.club.as_str(), r.window, r.row.name.as_deref().unwrap_or("")))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Arsenal FC", Window::Summer, "Thomas Partey"),
            ("Arsenal FC", Window::Summer, "Willian"),
            ("Arsenal FC", Window::Summer, "Emiliano Martínez"),
            ("Arsenal FC", Window::Summer, "Matt Macey"),
            ("Arsenal FC", Window::Winter, "Martin Ødegaard"),
            ("Arsenal FC", Window::Winter, "Mat Ryan"),
            ("Arsenal FC", Window::Winter, "Mesut Özil"),
            ("Aston Villa", Window::Summer, "Ollie Watkins"),
            ("Aston Villa", Window::Winter, "Morgan Sanson"),
            ("Aston Villa", Window::Winter, "Jota"),
        ]
    );
}

#[test]
fn test_raw_cells() {
    let (raw, _) = run_pipeline(Some(Window::Summer));
    let partey = &raw.records[0];

    assert_eq!(partey.row.age.as_deref(), Some("27"));
    assert_eq!(partey.row.nationality.as_deref(), Some("Ghana"));
    assert_eq!(partey.row.market_value.as_deref(), Some("€40.00m"));
    assert_eq!(partey.row.dealing_club.as_deref(), Some("Atlético Madrid"));
    assert_eq!(partey.row.dealing_country.as_deref(), Some("Spain"));
    assert_eq!(partey.row.fee.as_deref(), Some("€50.00m"));
    assert_eq!(partey.league, "premier-league");
    assert_eq!(partey.season, "2020");

    // First flag wins for dual nationals
    assert_eq!(raw.records[1].row.nationality.as_deref(), Some("Brazil"));
}

#[test]
fn test_normalized_fees_and_loans() {
    let (_, table) = run_pipeline(None);

    let partey = find(&table, "Thomas Partey");
    assert_eq!(partey.fee, Some(50_000_000.0));
    assert_eq!(partey.market_value, Some(40_000_000.0));
    assert_eq!(partey.age, Some(27));
    assert_eq!(partey.league, "Premier League");
    assert_eq!(partey.season, Some(2020));
    assert!(!partey.is_loan);

    let willian = find(&table, "Willian");
    assert_eq!(willian.fee, Some(0.0));
    assert_eq!(willian.loan_status, LoanStatus::None);

    let macey = find(&table, "Matt Macey");
    assert_eq!(macey.fee, None);
    assert_eq!(macey.age, None);
    assert_eq!(macey.market_value, None);
    assert_eq!(macey.nationality, "");
    assert_eq!(macey.dealing_club, "");

    let odegaard = find(&table, "Martin Ødegaard");
    assert_eq!(odegaard.fee, Some(2_000_000.0));
    assert!(odegaard.is_loan);
    assert_eq!(odegaard.loan_status, LoanStatus::LoanWithFee);

    let ryan = find(&table, "Mat Ryan");
    assert_eq!(ryan.fee, Some(0.0));
    assert_eq!(ryan.loan_status, LoanStatus::FreeLoan);

    let ozil = find(&table, "Mesut Özil");
    assert_eq!(ozil.fee, None);
    assert!(!ozil.is_loan);

    let sanson = find(&table, "Morgan Sanson");
    assert_eq!(sanson.fee, Some(750_000.0));

    let jota = find(&table, "Jota");
    assert_eq!(jota.fee, Some(0.0));
    assert_eq!(jota.market_value, Some(1_500_000.0));
    assert_eq!(jota.loan_status, LoanStatus::EndOfLoan);
    assert!(jota.is_loan);
}

#[test]
fn test_loan_flag_matches_status() {
    let (_, table) = run_pipeline(None);
    for transfer in &table.records {
        assert_eq!(transfer.is_loan, transfer.loan_status != LoanStatus::None);
    }
}

#[test]
fn test_generate_csv_from_fixtures() {
    let (raw, table) = run_pipeline(None);

    let csv = generate_csv(&table).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(
        lines[1],
        "Arsenal FC,Thomas Partey,27,Ghana,Defensive Midfield,DM,40000000,Atlético Madrid,\
         Spain,50000000,in,summer,Premier League,2020,false,"
    );
    assert!(lines
        .iter()
        .any(|l| l.ends_with(",Real Madrid,Spain,2000000,in,winter,Premier League,2020,true,loan with fee")));

    let raw_csv = generate_csv(&raw).unwrap();
    assert!(raw_csv.contains(",\"€1,50m\","));
    assert!(raw_csv.lines().next().unwrap().ends_with(",league,season"));
}

#[test]
fn test_empty_page_gives_header_only_csv() {
    let harvester = Harvester::new(
        StaticSource("<html><body><p>No transfers</p></body></html>"),
        RowParser::with_default_markers().unwrap(),
    );
    let table = normalize_table(&harvester.scrape(&request(None)));
    assert!(table.is_empty());

    let temp_dir = tempdir().unwrap();
    let path = save_csv(&table, "premier-league", 2020, Some(temp_dir.path())).unwrap();
    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with("club,name,age,"));
}
