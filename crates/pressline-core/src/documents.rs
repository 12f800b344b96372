//! # Order Documents
//!
//! One entry point that takes a numbered batch of items to everything the
//! counter prints for it.
//!
//! ```text
//! items ──► validate ──► Totals ──┬──► receipt::compose_with_totals ──► receipt
//!                                 └──► TagComposer::compose ────────► tags
//! ```

use serde::Serialize;

use crate::error::CoreResult;
use crate::layout::Document;
use crate::pricing::Totals;
use crate::receipt;
use crate::tags::TagComposer;
use crate::types::{OrderItem, OrderNumber};
use crate::validation::validate_order_items;

/// Which printed document a text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Receipt,
    Tags,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Receipt, DocumentKind::Tags];

    pub const fn label(&self) -> &'static str {
        match self {
            DocumentKind::Receipt => "receipt",
            DocumentKind::Tags => "tags",
        }
    }
}

/// The computed output of one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDocuments {
    pub order_number: OrderNumber,
    pub totals: Totals,
    pub receipt: Document,
    pub tags: Document,
}

impl OrderDocuments {
    /// Validates the batch, prices it once and composes both documents.
    pub fn prepare(items: &[OrderItem], tag_composer: &TagComposer) -> CoreResult<Self> {
        validate_order_items(items)?;

        let totals = Totals::calculate(items);
        let order_number = items[0].order_number.clone();

        Ok(OrderDocuments {
            order_number,
            totals,
            receipt: receipt::compose_with_totals(items, &totals),
            tags: tag_composer.compose(items),
        })
    }

    pub fn get(&self, kind: DocumentKind) -> &Document {
        match kind {
            DocumentKind::Receipt => &self.receipt,
            DocumentKind::Tags => &self.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::CoreError;
    use crate::types::{number_lines, Category, Service};

    #[test]
    fn test_prepare_from_catalog_lines() {
        let catalog = Catalog::default();
        let lines = vec![
            catalog
                .order_line(Category::Ladies, "shirt", Service::Standard)
                .unwrap(),
            catalog
                .order_line(Category::Gentlemen, "coat", Service::Specialist)
                .unwrap(),
        ];
        let number = OrderNumber::new("011202501234");
        let items = number_lines(lines, &number);

        let docs = OrderDocuments::prepare(&items, &TagComposer::for_catalog(&catalog)).unwrap();

        assert_eq!(docs.order_number, number);
        assert_eq!(docs.totals.subtotal.amount_string(), "20.43");
        assert_eq!(docs.totals.savings.amount_string(), "2.04");
        assert_eq!(docs.receipt.line_count(), 13);
        assert_eq!(docs.tags.line_count(), 5);
        assert_eq!(docs.get(DocumentKind::Tags), &docs.tags);
    }

    #[test]
    fn test_prepare_rejects_empty_order() {
        let composer = TagComposer::for_catalog(&Catalog::default());
        assert!(matches!(
            OrderDocuments::prepare(&[], &composer),
            Err(CoreError::EmptyOrder)
        ));
    }
}
