//! Column schema shared by the parser, normalizer and exporter.

use std::fmt;

use crate::types::{RawTransfer, Transfer};

/// A column of the transfer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Club,
    Name,
    Age,
    Nationality,
    Position,
    ShortPos,
    MarketValue,
    DealingClub,
    DealingCountry,
    Fee,
    Movement,
    Window,
    League,
    Season,
    IsLoan,
    LoanStatus,
}

impl Column {
    /// Header name in exported tables.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Club => "club",
            Self::Name => "name",
            Self::Age => "age",
            Self::Nationality => "nationality",
            Self::Position => "position",
            Self::ShortPos => "short_pos",
            Self::MarketValue => "market_value",
            Self::DealingClub => "dealing_club",
            Self::DealingCountry => "dealing_country",
            Self::Fee => "fee",
            Self::Movement => "movement",
            Self::Window => "window",
            Self::League => "league",
            Self::Season => "season",
            Self::IsLoan => "is_loan",
            Self::LoanStatus => "loan_status",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value type held by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    Decimal,
    Boolean,
    /// One of a closed set of labels.
    Category,
}

/// A column together with its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField {
    pub column: Column,
    pub kind: ColumnType,
}

const fn field(column: Column, kind: ColumnType) -> SchemaField {
    SchemaField { column, kind }
}

/// Ordered list of typed columns.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [SchemaField],
}

impl Schema {
    #[must_use]
    pub fn fields(&self) -> &'static [SchemaField] {
        self.fields
    }

    pub fn columns(&self) -> impl Iterator<Item = Column> {
        self.fields.iter().map(|f| f.column)
    }

    /// Header row for export.
    #[must_use]
    pub fn header(&self) -> Vec<&'static str> {
        self.columns().map(|c| c.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn contains(&self, column: Column) -> bool {
        self.columns().any(|c| c == column)
    }
}

/// Schema of scraped records before normalization; every value is text.
pub const RAW_SCHEMA: Schema = Schema {
    fields: &[
        field(Column::Club, ColumnType::Text),
        field(Column::Name, ColumnType::Text),
        field(Column::Age, ColumnType::Text),
        field(Column::Nationality, ColumnType::Text),
        field(Column::Position, ColumnType::Text),
        field(Column::ShortPos, ColumnType::Text),
        field(Column::MarketValue, ColumnType::Text),
        field(Column::DealingClub, ColumnType::Text),
        field(Column::DealingCountry, ColumnType::Text),
        field(Column::Fee, ColumnType::Text),
        field(Column::Movement, ColumnType::Category),
        field(Column::Window, ColumnType::Category),
        field(Column::League, ColumnType::Text),
        field(Column::Season, ColumnType::Text),
    ],
};

/// Schema of normalized records.
pub const SCHEMA: Schema = Schema {
    fields: &[
        field(Column::Club, ColumnType::Text),
        field(Column::Name, ColumnType::Text),
        field(Column::Age, ColumnType::Integer),
        field(Column::Nationality, ColumnType::Text),
        field(Column::Position, ColumnType::Text),
        field(Column::ShortPos, ColumnType::Text),
        field(Column::MarketValue, ColumnType::Decimal),
        field(Column::DealingClub, ColumnType::Text),
        field(Column::DealingCountry, ColumnType::Text),
        field(Column::Fee, ColumnType::Decimal),
        field(Column::Movement, ColumnType::Category),
        field(Column::Window, ColumnType::Category),
        field(Column::League, ColumnType::Text),
        field(Column::Season, ColumnType::Integer),
        field(Column::IsLoan, ColumnType::Boolean),
        field(Column::LoanStatus, ColumnType::Category),
    ],
};

/// A record that can be laid out as a table row.
pub trait Tabular {
    /// Schema describing the row layout.
    const SCHEMA: &'static Schema;

    /// Render one cell. Undefined values and columns outside the schema
    /// render as an empty string.
    fn cell(&self, column: Column) -> String;

    /// Render the full row in schema order.
    fn row(&self) -> Vec<String> {
        Self::SCHEMA.columns().map(|c| self.cell(c)).collect()
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl Tabular for RawTransfer {
    const SCHEMA: &'static Schema = &RAW_SCHEMA;

    fn cell(&self, column: Column) -> String {
        let row = &self.row;
        match column {
            Column::Club => row.club.clone(),
            Column::Name => text(&row.name),
            Column::Age => text(&row.age),
            Column::Nationality => text(&row.nationality),
            Column::Position => text(&row.position),
            Column::ShortPos => text(&row.short_pos),
            Column::MarketValue => text(&row.market_value),
            Column::DealingClub => text(&row.dealing_club),
            Column::DealingCountry => text(&row.dealing_country),
            Column::Fee => text(&row.fee),
            Column::Movement => row.movement.as_str().to_string(),
            Column::Window => self.window.as_str().to_string(),
            Column::League => self.league.clone(),
            Column::Season => self.season.clone(),
            Column::IsLoan | Column::LoanStatus => String::new(),
        }
    }
}

impl Tabular for Transfer {
    const SCHEMA: &'static Schema = &SCHEMA;

    fn cell(&self, column: Column) -> String {
        match column {
            Column::Club => self.club.clone(),
            Column::Name => text(&self.name),
            Column::Age => self.age.map(|a| a.to_string()).unwrap_or_default(),
            Column::Nationality => self.nationality.clone(),
            Column::Position => self.position.clone(),
            Column::ShortPos => self.short_pos.clone(),
            Column::MarketValue => number(self.market_value),
            Column::DealingClub => self.dealing_club.clone(),
            Column::DealingCountry => self.dealing_country.clone(),
            Column::Fee => number(self.fee),
            Column::Movement => self.movement.as_str().to_string(),
            Column::Window => self.window.as_str().to_string(),
            Column::League => self.league.clone(),
            Column::Season => self.season.map(|s| s.to_string()).unwrap_or_default(),
            Column::IsLoan => self.is_loan.to_string(),
            Column::LoanStatus => self.loan_status.as_str().to_string(),
        }
    }
}
