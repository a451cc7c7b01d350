//! Marker registry for mapping table cells to transfer fields.
//!
//! Cells on a transfer page carry no schema; their meaning is given by an
//! incidental class token (the marker). The registry maps each known marker
//! to a typed handler, in precedence order, and is validated once against
//! the set of fields a transfer row needs.

mod config;
mod core;
mod handler;
mod types;

pub use config::{create_transfer_registry, MARKERS};
pub use core::MarkerRegistry;
pub use handler::{CellHandler, CounterpartyHandler, IconHandler, NameHandler, TextHandler};
pub use types::CellField;
