//! Row parsing for a single transfer table.

use scraper::ElementRef;

use crate::error::Result;
use crate::html::{row_cells, table_rows};
use crate::markers::{create_transfer_registry, MarkerRegistry};
use crate::types::{Direction, RawRow};

/// Parses transfer tables into raw rows using a marker registry.
pub struct RowParser {
    registry: MarkerRegistry,
}

impl RowParser {
    /// Create a parser from a registry, validating it first.
    ///
    /// # Errors
    /// Returns `MissingMarker` if a required field has no registered marker.
    pub fn new(registry: MarkerRegistry) -> Result<Self> {
        registry.validate()?;
        Ok(Self { registry })
    }

    /// Create a parser with the transfer table markers.
    ///
    /// # Errors
    /// Returns `MissingMarker` if the built-in registry is incomplete.
    pub fn with_default_markers() -> Result<Self> {
        Self::new(create_transfer_registry())
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    /// Parse the data rows of one table.
    ///
    /// The first row holds column headers and is skipped. A row with a
    /// single cell is the "no movements" notice: parsing of the table stops
    /// there and later rows are dropped.
    pub fn parse_table(&self, table: ElementRef<'_>, club: &str, movement: Direction) -> Vec<RawRow> {
        let mut rows = Vec::new();

        for tr in table_rows(table).into_iter().skip(1) {
            let cells = row_cells(tr);
            if cells.len() == 1 {
                tracing::debug!(club, movement = %movement, "No movements row, stopping table");
                break;
            }

            let mut row = RawRow::new(club, movement);
            for cell in cells {
                if let Some(handler) = self.registry.handler_for(cell) {
                    handler.extract(cell, &mut row);
                }
            }
            rows.push(row);
        }

        rows
    }
}
