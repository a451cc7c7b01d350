//! Registry configuration for transfer tables.

use super::core::MarkerRegistry;
use super::handler::{CounterpartyHandler, IconHandler, TextHandler};
use super::types::CellField;

/// Marker tokens of the transfer table, in precedence order.
///
/// `rechts` (right-aligned) also sits on market value cells, so it must
/// come after `mw-transfer-cell`.
pub const MARKERS: [(&str, CellField); 7] = [
    ("alter-transfer-cell", CellField::Age),
    ("nat-transfer-cell", CellField::Nationality),
    ("pos-transfer-cell", CellField::Position),
    ("kurzpos-transfer-cell", CellField::ShortPosition),
    ("mw-transfer-cell", CellField::MarketValue),
    ("verein-flagge-transfer-cell", CellField::Counterparty),
    ("rechts", CellField::Fee),
];

/// Create a marker registry configured for transfer tables.
#[must_use]
pub fn create_transfer_registry() -> MarkerRegistry {
    let mut registry = MarkerRegistry::new();

    for (token, field) in MARKERS {
        match field {
            CellField::Nationality => registry.register(token, IconHandler(field)),
            CellField::Counterparty => registry.register(token, CounterpartyHandler),
            _ => registry.register(token, TextHandler(field)),
        }
    }

    registry
}
