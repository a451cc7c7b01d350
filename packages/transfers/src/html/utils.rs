//! Utility functions for navigating and extracting text from parsed markup.

use scraper::{ElementRef, Html, Selector};
use unicode_normalization::UnicodeNormalization;

/// Parse a CSS selector known at compile time.
///
/// # Panics
/// Panics if the selector is invalid; only call with literal selectors.
#[allow(clippy::expect_used)] // Only used with static selectors that are guaranteed to be valid
pub(crate) fn static_selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Collapse whitespace runs and apply NFC normalization.
///
/// # Examples
/// ```
/// use tm_transfers::html::clean_text;
///
/// assert_eq!(clean_text("  Martin\n  Ødegaard "), "Martin Ødegaard");
/// ```
pub fn clean_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .nfc()
        .collect()
}

/// Get the visible text of an element, cleaned.
///
/// # Returns
/// The text, or `None` if the element holds no visible text
///
/// # Examples
/// ```
/// use scraper::{Html, Selector};
/// use tm_transfers::html::visible_text;
///
/// let doc = Html::parse_document("<table><tr><td> <a>Thomas</a> Partey </td></tr></table>");
/// let td = doc.select(&Selector::parse("td").unwrap()).next().unwrap();
/// assert_eq!(visible_text(td), Some("Thomas Partey".to_string()));
/// ```
pub fn visible_text(element: ElementRef<'_>) -> Option<String> {
    let text = clean_text(&element.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

/// Find the first child element.
pub fn first_child_element<'a>(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.children().find_map(ElementRef::wrap)
}

/// Find all child elements with the given tag name.
pub fn child_elements<'a>(
    element: ElementRef<'a>,
    tag: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == tag)
}

/// Find the first descendant element with the given tag name.
pub fn find_descendant<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|node| node.value().name() == tag)
}

/// Get the descriptive text of the first icon inside an element.
///
/// Flags and crests carry the country or club name in their `alt` text,
/// not in visible text.
pub fn icon_text(element: ElementRef<'_>) -> Option<String> {
    let icon = if element.value().name() == "img" {
        element
    } else {
        find_descendant(element, "img")?
    };
    icon.value()
        .attr("alt")
        .map(clean_text)
        .filter(|alt| !alt.is_empty())
}

/// Get the visible text of the first link inside an element.
pub fn link_text(element: ElementRef<'_>) -> Option<String> {
    find_descendant(element, "a").and_then(visible_text)
}

/// Class tokens of an element.
pub fn class_tokens<'a>(element: ElementRef<'a>) -> Vec<&'a str> {
    element.value().classes().collect()
}

/// Rows of a table, in document order, without rows of nested tables.
///
/// Rows may sit directly under `<table>` or inside its `thead`, `tbody`
/// and `tfoot` sections.
pub fn table_rows<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(child_elements(child, "tr")),
            _ => {}
        }
    }
    rows
}

/// Data cells of a row, without cells of nested tables.
pub fn row_cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    child_elements(row, "td").collect()
}

/// Select all elements matching a selector, in document order.
pub fn select_all<'a>(doc: &'a Html, selector: &Selector) -> Vec<ElementRef<'a>> {
    doc.select(selector).collect()
}
