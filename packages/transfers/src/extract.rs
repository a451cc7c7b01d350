//! Structural extraction of club sections from a transfer page.
//!
//! A transfer page lists one box per club: a header naming the club and
//! two tables, arrivals first and departures second. Headers and tables
//! are located independently and paired by position.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::html::{first_child_element, select_all, static_selector, visible_text};

/// Section headers. The first one on a page is the competition banner.
static HEADER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector("div.table-header"));

/// Containers wrapping each data table.
static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector("div.responsive-table"));

/// One club's section of a transfer page.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    /// Club name from the section header.
    pub club: String,
    /// Arrivals table; `None` if its container holds no element.
    pub table_in: Option<ElementRef<'a>>,
    /// Departures table; `None` if its container holds no element.
    pub table_out: Option<ElementRef<'a>>,
}

/// Find every club section on a page, in document order.
///
/// The i-th club header is paired with table containers 2i and 2i+1.
/// Surplus headers or tables are dropped.
pub fn extract_sections(doc: &Html) -> Vec<Section<'_>> {
    let clubs: Vec<String> = select_all(doc, &HEADER_SELECTOR)
        .into_iter()
        .skip(1)
        .map(|header| visible_text(header).unwrap_or_default())
        .collect();

    let tables: Vec<Option<ElementRef<'_>>> = select_all(doc, &TABLE_SELECTOR)
        .into_iter()
        .map(first_child_element)
        .collect();

    let pairs = tables.len() / 2;
    if clubs.len() != pairs {
        tracing::debug!(
            headers = clubs.len(),
            table_pairs = pairs,
            "Section header and table counts differ, truncating"
        );
    }

    clubs
        .into_iter()
        .zip(tables.chunks_exact(2))
        .map(|(club, pair)| Section {
            club,
            table_in: pair[0],
            table_out: pair[1],
        })
        .collect()
}
