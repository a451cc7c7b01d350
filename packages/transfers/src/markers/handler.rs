//! Cell handler trait definition and the handlers used on transfer tables.

use scraper::ElementRef;

use super::types::CellField;
use crate::html::{first_child_element, icon_text, link_text, visible_text};
use crate::types::RawRow;

/// Trait for cell handlers.
///
/// A handler reads one table cell and writes the value(s) it finds into the
/// row under construction. Missing or empty content is written as `None`.
pub trait CellHandler: Send + Sync {
    /// The field this handler fills.
    fn field(&self) -> CellField;

    /// Extract the cell's value(s) into `row`.
    fn extract(&self, cell: ElementRef<'_>, row: &mut RawRow);
}

/// Takes the cell's visible text.
pub struct TextHandler(pub CellField);

impl CellHandler for TextHandler {
    fn field(&self) -> CellField {
        self.0
    }

    fn extract(&self, cell: ElementRef<'_>, row: &mut RawRow) {
        self.0.store(row, visible_text(cell));
    }
}

/// Takes the descriptive text of the icon inside the cell (e.g. a flag).
pub struct IconHandler(pub CellField);

impl CellHandler for IconHandler {
    fn field(&self) -> CellField {
        self.0
    }

    fn extract(&self, cell: ElementRef<'_>, row: &mut RawRow) {
        self.0.store(row, icon_text(cell));
    }
}

/// Counter-party cell: country flag followed by the linked club name.
pub struct CounterpartyHandler;

impl CellHandler for CounterpartyHandler {
    fn field(&self) -> CellField {
        CellField::Counterparty
    }

    fn extract(&self, cell: ElementRef<'_>, row: &mut RawRow) {
        row.dealing_country = icon_text(cell);
        row.dealing_club = link_text(cell);
    }
}

/// The unmarked column: the player name, held by the cell's first child.
///
/// Only the first unmarked cell of a row counts.
pub struct NameHandler;

impl CellHandler for NameHandler {
    fn field(&self) -> CellField {
        CellField::Name
    }

    fn extract(&self, cell: ElementRef<'_>, row: &mut RawRow) {
        if row.name.is_none() {
            row.name = first_child_element(cell).and_then(visible_text);
        }
    }
}
