//! # Tags
//!
//! Composes the sheet of garment tags for one order: one framed row per
//! item, cut apart along the bars.
//!
//! ## Layout
//! ```text
//! +-----------------+-------+-------+----------------+
//! |  Shirt          |  Lad  |  -st  |  011202501234  |
//! +-----------------+-------+-------+----------------+
//! |  2 Pc Eve Suit  |  Gen  |  -sp  |  011202501234  |
//! +-----------------+-------+-------+----------------+
//! ```
//!
//! Unlike the receipt, the name column is sized from the whole catalog, so
//! every tag the shop prints is the same width and they stack neatly on
//! the rail whatever each order contained.

use crate::catalog::Catalog;
use crate::layout::{cell_row, display_width, segmented_bar, Cell, Document};
use crate::types::{OrderItem, OrderNumber};

/// Width of the category and service code columns ("Gen", "-st").
const CODE_WIDTH: usize = 3;

/// Spaces either side of each column's content.
const MARGIN: usize = 2;

/// Builds tag sheets with a fixed column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagComposer {
    name_width: usize,
    order_width: usize,
}

impl TagComposer {
    /// Column widths for the given catalog: names as wide as its longest
    /// product name, order numbers as wide as a generated order number.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        TagComposer::new(catalog.longest_name())
    }

    pub fn new(name_width: usize) -> Self {
        TagComposer {
            name_width,
            order_width: OrderNumber::LEN,
        }
    }

    /// Composes one tag per item.
    ///
    /// An item name or order number wider than the configured column
    /// widens that column for the whole sheet rather than breaking the
    /// frame.
    pub fn compose(&self, items: &[OrderItem]) -> Document {
        let name_width = items
            .iter()
            .map(|item| display_width(&item.name))
            .fold(self.name_width, usize::max);
        let order_width = items
            .iter()
            .map(|item| display_width(item.order_number.as_str()))
            .fold(self.order_width, usize::max);

        let separator = segmented_bar(&[
            name_width + 2 * MARGIN,
            CODE_WIDTH + 2 * MARGIN,
            CODE_WIDTH + 2 * MARGIN,
            order_width + 2 * MARGIN,
        ]);

        let mut doc = Document::new(display_width(&separator));
        doc.push(separator.clone());

        for item in items {
            doc.push(cell_row(&[
                Cell::Gap(MARGIN),
                Cell::Left(&item.name, name_width),
                Cell::Gap(MARGIN),
                Cell::Divider,
                Cell::Gap(MARGIN),
                Cell::Left(item.category.abbreviation(), CODE_WIDTH),
                Cell::Gap(MARGIN),
                Cell::Divider,
                Cell::Gap(MARGIN),
                Cell::Left(item.service.abbreviation(), CODE_WIDTH),
                Cell::Gap(MARGIN),
                Cell::Divider,
                Cell::Gap(MARGIN),
                Cell::Left(item.order_number.as_str(), order_width),
                Cell::Gap(MARGIN),
            ]));
            doc.push(separator.clone());
        }

        doc
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Category, Service};
    use proptest::prelude::*;

    fn item(name: &str, category: Category, service: Service) -> OrderItem {
        OrderItem {
            name: name.to_string(),
            category,
            service,
            price: Money::from_pence(650),
            order_number: OrderNumber::new("011202501234"),
        }
    }

    #[test]
    fn test_tag_sheet() {
        let composer = TagComposer::for_catalog(&Catalog::default());
        let doc = composer.compose(&[
            item("Shirt", Category::Ladies, Service::Standard),
            item("2 Pc Eve Suit", Category::Gentlemen, Service::Specialist),
        ]);

        let bar = "+-----------------+-------+-------+----------------+";
        let expected = [
            bar,
            "|  Shirt          |  Lad  |  -st  |  011202501234  |",
            bar,
            "|  2 Pc Eve Suit  |  Gen  |  -sp  |  011202501234  |",
            bar,
        ];

        assert_eq!(doc.rows(), expected);
        assert_eq!(doc.width(), 52);
    }

    #[test]
    fn test_width_is_stable_across_orders() {
        let composer = TagComposer::for_catalog(&Catalog::default());
        let small = composer.compose(&[item("Tie", Category::Gentlemen, Service::Standard)]);
        let large = composer.compose(&[
            item("Coat", Category::Gentlemen, Service::Standard),
            item("Eve Dress", Category::Ladies, Service::Specialist),
        ]);
        assert_eq!(small.width(), large.width());
    }

    #[test]
    fn test_wider_name_than_catalog_widens_sheet() {
        let composer = TagComposer::new(5);
        let doc = composer.compose(&[
            item("Shirt", Category::Ladies, Service::Standard),
            item("Wedding Dress", Category::Ladies, Service::Specialist),
        ]);
        for row in doc.rows() {
            assert_eq!(display_width(row), doc.width());
        }
        assert_eq!(doc.width(), 52);
    }

    #[test]
    fn test_each_tag_is_framed() {
        let composer = TagComposer::new(13);
        let doc = composer.compose(&[
            item("Shirt", Category::Ladies, Service::Standard),
            item("Coat", Category::Gentlemen, Service::Standard),
            item("Dress", Category::Ladies, Service::Specialist),
        ]);

        assert_eq!(doc.line_count(), 7);
        for (index, row) in doc.rows().iter().enumerate() {
            if index % 2 == 0 {
                assert!(row.starts_with('+'));
            } else {
                assert!(row.starts_with("|  "));
            }
        }
    }

    proptest! {
        #[test]
        fn every_tag_row_has_the_document_width(
            names in prop::collection::vec("[A-Za-z][A-Za-z ]{0,30}", 1..10),
            catalog_width in 0usize..20,
        ) {
            let items: Vec<OrderItem> = names
                .iter()
                .map(|name| item(name, Category::Ladies, Service::Standard))
                .collect();
            let doc = TagComposer::new(catalog_width).compose(&items);

            prop_assert_eq!(doc.line_count(), items.len() * 2 + 1);
            for row in doc.rows() {
                prop_assert_eq!(display_width(row), doc.width());
            }
        }
    }
}
