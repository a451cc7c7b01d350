//! Marker registry for mapping class tokens to cell handlers.

use scraper::ElementRef;

use super::handler::{CellHandler, NameHandler};
use super::types::CellField;
use crate::error::{Result, TransferError};
use crate::html::class_tokens;

/// Registry mapping class tokens to handlers.
///
/// Markers are kept in registration order, which is also their precedence:
/// a cell carrying several known tokens goes to the earliest registered
/// one. Cells without any class go to the fallback handler; cells whose
/// classes are all unknown are ignored.
pub struct MarkerRegistry {
    markers: Vec<(String, Box<dyn CellHandler>)>,
    fallback: Box<dyn CellHandler>,
}

impl MarkerRegistry {
    /// Create a registry with no markers and the name column as fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            fallback: Box::new(NameHandler),
        }
    }

    /// Register a handler for a class token.
    ///
    /// Re-registering a token replaces its handler but keeps its precedence.
    pub fn register(&mut self, token: impl Into<String>, handler: impl CellHandler + 'static) {
        let token = token.into();
        if let Some(entry) = self.markers.iter_mut().find(|(t, _)| *t == token) {
            entry.1 = Box::new(handler);
        } else {
            self.markers.push((token, Box::new(handler)));
        }
    }

    /// Replace the handler used for cells without a class.
    pub fn set_fallback(&mut self, handler: impl CellHandler + 'static) {
        self.fallback = Box::new(handler);
    }

    /// Get the handler for a cell.
    ///
    /// Returns `None` if the cell carries only unknown markers.
    pub fn handler_for(&self, cell: ElementRef<'_>) -> Option<&dyn CellHandler> {
        let tokens = class_tokens(cell);
        if tokens.is_empty() {
            return Some(self.fallback.as_ref());
        }

        self.markers
            .iter()
            .find(|(token, _)| tokens.contains(&token.as_str()))
            .map(|(_, handler)| handler.as_ref())
    }

    /// Check if a handler is registered for a token.
    #[must_use]
    pub fn has_marker(&self, token: &str) -> bool {
        self.markers.iter().any(|(t, _)| t == token)
    }

    /// Registered tokens in precedence order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(|(t, _)| t.as_str())
    }

    /// Check that every marked field has a handler.
    ///
    /// # Errors
    /// Returns `MissingMarker` for the first field nothing is registered for.
    pub fn validate(&self) -> Result<()> {
        for field in CellField::MARKED {
            if !self.markers.iter().any(|(_, h)| h.field() == field) {
                return Err(TransferError::MissingMarker(field));
            }
        }
        Ok(())
    }
}

impl Default for MarkerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::TextHandler;
    use scraper::{Html, Selector};

    fn cells(markup: &str) -> Html {
        Html::parse_document(&format!("<table><tr>{markup}</tr></table>"))
    }

    #[test]
    fn test_registry_precedence() {
        let mut registry = MarkerRegistry::new();
        registry.register("mw-transfer-cell", TextHandler(CellField::MarketValue));
        registry.register("rechts", TextHandler(CellField::Fee));

        let doc = cells(r#"<td class="rechts mw-transfer-cell">€40.00m</td><td class="rechts">€50.00m</td>"#);
        let selector = Selector::parse("td").unwrap();
        let found: Vec<_> = doc
            .select(&selector)
            .map(|cell| registry.handler_for(cell).map(|h| h.field()))
            .collect();

        assert_eq!(
            found,
            vec![Some(CellField::MarketValue), Some(CellField::Fee)]
        );
    }

    #[test]
    fn test_registry_fallback_and_unknown() {
        let mut registry = MarkerRegistry::new();
        registry.register("rechts", TextHandler(CellField::Fee));

        let doc = cells(r#"<td><a>Name</a></td><td class="no-border-rechts zentriert">x</td>"#);
        let selector = Selector::parse("td").unwrap();
        let found: Vec<_> = doc
            .select(&selector)
            .map(|cell| registry.handler_for(cell).map(|h| h.field()))
            .collect();

        assert_eq!(found, vec![Some(CellField::Name), None]);
    }

    #[test]
    fn test_set_fallback_replaces_name_handler() {
        let mut registry = MarkerRegistry::new();
        registry.set_fallback(TextHandler(CellField::Position));

        let doc = cells(r#"<td>Goalkeeper</td>"#);
        let selector = Selector::parse("td").unwrap();
        let cell = doc.select(&selector).next().unwrap();

        let handler = registry.handler_for(cell).unwrap();
        assert_eq!(handler.field(), CellField::Position);
    }

    #[test]
    fn test_registry_reregister_keeps_position() {
        let mut registry = MarkerRegistry::new();
        registry.register("a", TextHandler(CellField::Age));
        registry.register("b", TextHandler(CellField::Fee));
        registry.register("a", TextHandler(CellField::Position));

        let tokens: Vec<_> = registry.tokens().collect();
        assert_eq!(tokens, vec!["a", "b"]);
        assert!(registry.has_marker("b"));
        assert!(!registry.has_marker("c"));
    }

    #[test]
    fn test_validate_reports_missing_field() {
        let mut registry = MarkerRegistry::new();
        registry.register("alter-transfer-cell", TextHandler(CellField::Age));

        let err = registry.validate().unwrap_err();
        assert!(matches!(
            err,
            TransferError::MissingMarker(CellField::Nationality)
        ));
    }
}
