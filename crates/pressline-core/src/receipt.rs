//! # Receipt
//!
//! Composes the customer receipt for one order.
//!
//! ## Layout
//! ```text
//! +--------------------------------+   bar
//! |            Receipt             |   title (centred)
//! +--------------------------------+   bar
//! |      Order: 011202501234       |   order number (centred)
//! |                                |   blank
//! |  Shirt   Lad   -st     £ 6.50  |   one row per item
//! |                                |   blank
//! |       Subtotal         £ 6.50  |   ┐
//! |       Savings          £ 0.00  |   │ totals block, labels aligned
//! |       Total            £ 6.50  |   │ in their own column
//! |       Total inc. VAT   £ 7.80  |   ┘
//! +--------------------------------+   bar
//! ```
//!
//! The receipt is sized to the order in hand: the name column is as wide as
//! the longest name on this order, and the money columns as wide as the
//! largest amount printed (never narrower than `00.00`).

use crate::layout::{
    bar, blank, cell_row, centered, display_width, money_width, Cell, Document,
};
use crate::pricing::Totals;
use crate::types::OrderItem;

/// Heading of the receipt.
pub const TITLE: &str = "Receipt";

/// Prefix of the centred order-number row.
pub const ORDER_PREFIX: &str = "Order: ";

/// Totals labels, in print order.
pub const TOTALS_LABELS: [&str; 4] = ["Subtotal", "Savings", "Total", "Total inc. VAT"];

/// Label column of the totals block, sized to "Total inc. VAT".
pub const LABEL_WIDTH: usize = 14;

/// Narrowest money column: room for `00.00`.
pub const MIN_MONEY_WIDTH: usize = 5;

/// Width of the category and service code columns ("Gen", "-st").
const CODE_WIDTH: usize = 3;

// Everything on an item row except the name and amount:
// "|" "  " name "   " cat "   " svc "     " "£" amount "  " "|"
const ITEM_ROW_OVERHEAD: usize = 1 + 2 + 3 + CODE_WIDTH + 3 + CODE_WIDTH + 5 + 1 + 2 + 1;

// Everything on a totals row except the indent and amount:
// "|" label "   " "£" amount "  " "|"
const TOTALS_ROW_OVERHEAD: usize = 1 + LABEL_WIDTH + 3 + 1 + 2 + 1;

/// Column sizes of one receipt, derived from its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptLayout {
    /// Width of every row.
    pub width: usize,
    pub name_width: usize,
    pub money_width: usize,
    /// Spaces before the totals labels.
    pub totals_indent: usize,
}

impl ReceiptLayout {
    /// Sizes a receipt so that its widest row fits and every other row can
    /// be padded to match.
    pub fn measure(items: &[OrderItem], totals: &Totals) -> Self {
        let money_width = money_width(
            items
                .iter()
                .map(|item| item.price)
                .chain(totals.amounts()),
            MIN_MONEY_WIDTH,
        );

        let longest_name = items
            .iter()
            .map(|item| display_width(&item.name))
            .max()
            .unwrap_or(0);

        let width = [
            longest_name + money_width + ITEM_ROW_OVERHEAD,
            money_width + TOTALS_ROW_OVERHEAD,
            display_width(TITLE) + 2,
            display_width(&order_heading(items)) + 2,
        ]
        .into_iter()
        .max()
        .unwrap_or_default();

        ReceiptLayout {
            width,
            // Rows are padded, never shortened: any slack goes to the name column
            name_width: width - money_width - ITEM_ROW_OVERHEAD,
            money_width,
            totals_indent: width - money_width - TOTALS_ROW_OVERHEAD,
        }
    }
}

/// Prices the items and composes their receipt.
pub fn compose(items: &[OrderItem]) -> Document {
    compose_with_totals(items, &Totals::calculate(items))
}

/// Composes a receipt from items and their precomputed totals.
pub fn compose_with_totals(items: &[OrderItem], totals: &Totals) -> Document {
    let layout = ReceiptLayout::measure(items, totals);
    let mut doc = Document::new(layout.width);

    doc.push(bar(layout.width));
    doc.push(centered(TITLE, layout.width));
    doc.push(bar(layout.width));
    doc.push(centered(&order_heading(items), layout.width));
    doc.push(blank(layout.width));

    for item in items {
        doc.push(item_row(item, &layout));
    }

    doc.push(blank(layout.width));

    for (label, amount) in TOTALS_LABELS.iter().zip(totals.amounts()) {
        doc.push(cell_row(&[
            Cell::Gap(layout.totals_indent),
            Cell::Left(label, LABEL_WIDTH),
            Cell::Gap(3),
            Cell::Money(amount, layout.money_width),
            Cell::Gap(2),
        ]));
    }

    doc.push(bar(layout.width));
    doc
}

fn item_row(item: &OrderItem, layout: &ReceiptLayout) -> String {
    cell_row(&[
        Cell::Gap(2),
        Cell::Left(&item.name, layout.name_width),
        Cell::Gap(3),
        Cell::Left(item.category.abbreviation(), CODE_WIDTH),
        Cell::Gap(3),
        Cell::Left(item.service.abbreviation(), CODE_WIDTH),
        Cell::Gap(5),
        Cell::Money(item.price, layout.money_width),
        Cell::Gap(2),
    ])
}

/// `"Order: <number>"`, taken from the first item.
fn order_heading(items: &[OrderItem]) -> String {
    let number = items
        .first()
        .map(|item| item.order_number.as_str())
        .unwrap_or_default();
    format!("{}{}", ORDER_PREFIX, number)
}

// =============================================================================
// Unit Tests
// =============================================================================
