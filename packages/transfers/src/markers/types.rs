//! Types for the marker registry.

use std::fmt;

use crate::types::RawRow;

/// Semantic field a table cell feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellField {
    /// Player name; the column without a marker.
    Name,
    Age,
    Nationality,
    Position,
    ShortPosition,
    MarketValue,
    /// Counter-party club and its country.
    Counterparty,
    Fee,
}

impl CellField {
    /// Fields that must be reachable through a marker.
    pub const MARKED: [CellField; 7] = [
        CellField::Age,
        CellField::Nationality,
        CellField::Position,
        CellField::ShortPosition,
        CellField::MarketValue,
        CellField::Counterparty,
        CellField::Fee,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Nationality => "nationality",
            Self::Position => "position",
            Self::ShortPosition => "short_pos",
            Self::MarketValue => "market_value",
            Self::Counterparty => "dealing_club",
            Self::Fee => "fee",
        }
    }

    /// Store a single text value in the row slot for this field.
    ///
    /// The counter-party value sets the club; its country is written by
    /// [`super::CounterpartyHandler`] directly.
    pub fn store(self, row: &mut RawRow, value: Option<String>) {
        let slot = match self {
            Self::Name => &mut row.name,
            Self::Age => &mut row.age,
            Self::Nationality => &mut row.nationality,
            Self::Position => &mut row.position,
            Self::ShortPosition => &mut row.short_pos,
            Self::MarketValue => &mut row.market_value,
            Self::Counterparty => &mut row.dealing_club,
            Self::Fee => &mut row.fee,
        };
        *slot = value;
    }
}

impl fmt::Display for CellField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
