//! Normalization of raw transfer records into typed records.
//!
//! Every function here is a pure transform of raw text. A value that cannot
//! be read degrades to `None` for that field alone.

use chrono::{Datelike, NaiveDate};

use crate::types::{LoanStatus, RawTransfer, Transfer, TransferTable};

/// Fee and loan status read from a fee cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeClassification {
    pub fee: Option<f64>,
    pub is_loan: bool,
    pub loan_status: LoanStatus,
}

impl FeeClassification {
    fn new(fee: Option<f64>, loan_status: LoanStatus) -> Self {
        Self {
            fee,
            is_loan: loan_status.is_loan(),
            loan_status,
        }
    }
}

/// Classify a fee cell and parse the amount it states.
///
/// Prefixes are matched case-insensitively, first match wins:
/// "end of loan", "loan fee", "loan transfer", "free transfer". Anything
/// else is parsed as an amount.
///
/// A "loan fee" with nothing after the prefix counts as a zero fee, kept
/// for compatibility with "no fee text means 0". One whose amount cannot be
/// read leaves the fee undefined.
///
/// # Examples
/// ```
/// use tm_transfers::normalize::classify_fee;
/// use tm_transfers::types::LoanStatus;
///
/// let fee = classify_fee(Some("Loan fee:€2m"));
/// assert_eq!(fee.fee, Some(2_000_000.0));
/// assert!(fee.is_loan);
/// assert_eq!(fee.loan_status, LoanStatus::LoanWithFee);
/// ```
pub fn classify_fee(fee: Option<&str>) -> FeeClassification {
    let Some(fee) = fee else {
        return FeeClassification::new(None, LoanStatus::None);
    };
    let text = fee.trim().to_lowercase();

    if text.starts_with("end of loan") {
        FeeClassification::new(Some(0.0), LoanStatus::EndOfLoan)
    } else if let Some(rest) = text.strip_prefix("loan fee") {
        let amount = rest.trim_start().trim_start_matches(':').trim();
        let fee = if amount.is_empty() {
            Some(0.0)
        } else {
            parse_money(Some(amount))
        };
        FeeClassification::new(fee, LoanStatus::LoanWithFee)
    } else if text.starts_with("loan transfer") {
        FeeClassification::new(Some(0.0), LoanStatus::FreeLoan)
    } else if text.starts_with("free transfer") {
        FeeClassification::new(Some(0.0), LoanStatus::None)
    } else {
        FeeClassification::new(parse_money(Some(&text)), LoanStatus::None)
    }
}

/// Parse a currency amount such as "€1.50m" or "£750Th.".
///
/// The leading currency symbol is dropped and a decimal comma is accepted.
/// An "m" suffix scales by a million and "th." by a thousand; scaled
/// amounts are rounded to whole units.
///
/// # Returns
/// A finite, non-negative amount, or `None` for "-", "?", missing or
/// unreadable text
///
/// # Examples
/// ```
/// use tm_transfers::normalize::parse_money;
///
/// assert_eq!(parse_money(Some("€1,50m")), Some(1_500_000.0));
/// assert_eq!(parse_money(Some("£750Th.")), Some(750_000.0));
/// assert_eq!(parse_money(Some("-")), None);
/// assert_eq!(parse_money(Some("?")), None);
/// ```
pub fn parse_money(text: Option<&str>) -> Option<f64> {
    let text = text?.trim();
    if matches!(text, "" | "-" | "?") {
        return None;
    }

    let body = match text.chars().next() {
        Some(symbol) if !symbol.is_ascii_digit() => &text[symbol.len_utf8()..],
        _ => text,
    };
    let body = body.trim().to_lowercase().replace(',', ".");

    let value = if let Some(number) = body.strip_suffix('m') {
        (parse_plain(number)? * 1e6).round()
    } else if let Some(number) = body.strip_suffix("th.") {
        (parse_plain(number)? * 1e3).round()
    } else {
        parse_plain(&body)?
    };

    (value.is_finite() && value >= 0.0).then_some(value)
}

fn parse_plain(number: &str) -> Option<f64> {
    number.trim().parse::<f64>().ok()
}

/// Parse an age cell.
pub fn parse_age(age: Option<&str>) -> Option<u32> {
    age?.trim().parse().ok()
}

/// Read the calendar year of a season such as "2020" or "2020-07-01".
pub fn parse_season(season: &str) -> Option<i32> {
    let season = season.trim();
    NaiveDate::parse_from_str(season, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{season}-01-01"), "%Y-%m-%d"))
        .ok()
        .map(|date| date.year())
}

/// Turn a league slug into its display name.
///
/// Hyphens become spaces and every word is capitalised; a letter following
/// any non-letter starts a new word.
///
/// # Examples
/// ```
/// use tm_transfers::normalize::league_name;
///
/// assert_eq!(league_name("premier-league"), "Premier League");
/// assert_eq!(league_name("1-bundesliga"), "1 Bundesliga");
/// ```
pub fn league_name(slug: &str) -> String {
    let mut name = String::with_capacity(slug.len());
    let mut in_word = false;

    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            name.push(c);
            in_word = false;
        }
    }

    name
}

/// Normalize one raw record.
pub fn normalize(raw: &RawTransfer) -> Transfer {
    let row = &raw.row;
    let fee = classify_fee(row.fee.as_deref());

    Transfer {
        club: row.club.clone(),
        name: row.name.clone(),
        age: parse_age(row.age.as_deref()),
        nationality: row.nationality.clone().unwrap_or_default(),
        position: row.position.clone().unwrap_or_default(),
        short_pos: row.short_pos.clone().unwrap_or_default(),
        market_value: parse_money(row.market_value.as_deref()),
        dealing_club: row.dealing_club.clone().unwrap_or_default(),
        dealing_country: row.dealing_country.clone().unwrap_or_default(),
        fee: fee.fee,
        movement: row.movement,
        window: raw.window,
        league: league_name(&raw.league),
        season: parse_season(&raw.season),
        is_loan: fee.is_loan,
        loan_status: fee.loan_status,
    }
}

/// Normalize every record of a table, keeping order and warnings.
pub fn normalize_table(table: &TransferTable<RawTransfer>) -> TransferTable<Transfer> {
    TransferTable {
        records: table.records.iter().map(normalize).collect(),
        warnings: table.warnings.clone(),
    }
}
