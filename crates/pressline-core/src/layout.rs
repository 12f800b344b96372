//! # Layout Primitives
//!
//! Fixed-width row builders shared by the receipt and tag composers.
//!
//! ## Row Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  bar(12)              +----------+                                      │
//! │  centered("Hi", 12)   |    Hi    |                                      │
//! │  centered("Hi!", 12)  |   Hi!    |   odd padding: extra space right     │
//! │  blank(12)            |          |                                      │
//! │  cell_row(..)         |  Shirt   Lad   -st     £ 6.50  |                │
//! │  segmented_bar(..)    +-------+-----+-----+                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Width Rule
//! A document's width is that of its widest row. Every other row is padded
//! up to it; rows are never cut down. Widths count characters, not bytes, so
//! the `£` glyph occupies one column.

use std::fmt;

use crate::money::{Money, CURRENCY_SYMBOL};

/// Corner of a bar row, and joint between bar segments.
pub const CORNER: char = '+';
/// Horizontal rule character.
pub const RULE: char = '-';
/// Vertical border of content rows.
pub const BORDER: char = '|';

/// Display width of `text`, in characters.
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

// =============================================================================
// Rows
// =============================================================================

/// `+` followed by `width - 2` dashes and `+`.
pub fn bar(width: usize) -> String {
    segmented_bar(&[width.saturating_sub(2)])
}

/// A bar with a `+` joint between each run of dashes.
///
/// `segmented_bar(&[3, 2])` → `+---+--+`
pub fn segmented_bar(segments: &[usize]) -> String {
    let mut row = String::from(CORNER);
    for len in segments {
        row.extend(std::iter::repeat(RULE).take(*len));
        row.push(CORNER);
    }
    row
}

/// `text` centred between borders in a row of `width` characters.
///
/// `pad = width - len(text) - 2`; the left side gets `pad / 2` spaces and the
/// right side the rest, so an odd remainder always lands on the right.
/// Text wider than the row is emitted unpadded rather than truncated.
pub fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text) + 2);
    let left = pad / 2;
    let right = pad - left;
    format!(
        "{border}{:left$}{text}{:right$}{border}",
        "",
        "",
        text = text,
        border = BORDER,
        left = left,
        right = right,
    )
}

/// A bordered row of spaces.
pub fn blank(width: usize) -> String {
    centered("", width)
}

// =============================================================================
// Cells
// =============================================================================

/// One piece of a cell row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'a> {
    /// Literal run of spaces.
    Gap(usize),
    /// Inner `|` column separator.
    Divider,
    /// Text padded on the right to the width.
    Left(&'a str, usize),
    /// Text padded on the left to the width.
    Right(&'a str, usize),
    /// `£` followed by the amount right-aligned in the width.
    Money(Money, usize),
}

impl Cell<'_> {
    fn render_into(&self, row: &mut String) {
        match *self {
            Cell::Gap(n) => pad(row, n),
            Cell::Divider => row.push(BORDER),
            Cell::Left(text, width) => {
                row.push_str(text);
                pad(row, width.saturating_sub(display_width(text)));
            }
            Cell::Right(text, width) => {
                pad(row, width.saturating_sub(display_width(text)));
                row.push_str(text);
            }
            Cell::Money(amount, width) => {
                row.push(CURRENCY_SYMBOL);
                Cell::Right(&amount.amount_string(), width).render_into(row);
            }
        }
    }
}

fn pad(row: &mut String, spaces: usize) {
    row.extend(std::iter::repeat(' ').take(spaces));
}

/// Concatenates cells between an opening and closing `|`.
///
/// ```rust
/// use pressline_core::layout::{cell_row, Cell};
/// use pressline_core::money::Money;
///
/// let row = cell_row(&[
///     Cell::Gap(2),
///     Cell::Left("Shirt", 6),
///     Cell::Money(Money::from_pence(650), 5),
///     Cell::Gap(2),
/// ]);
/// assert_eq!(row, "|  Shirt £ 6.50  |");
/// ```
pub fn cell_row(cells: &[Cell<'_>]) -> String {
    let mut row = String::from(BORDER);
    for cell in cells {
        cell.render_into(&mut row);
    }
    row.push(BORDER);
    row
}

/// Width needed to print every amount, never less than `minimum`.
pub fn money_width<I>(amounts: I, minimum: usize) -> usize
where
    I: IntoIterator<Item = Money>,
{
    amounts
        .into_iter()
        .map(|amount| amount.amount_string().len())
        .fold(minimum, usize::max)
}

// =============================================================================
// Document
// =============================================================================

/// An ordered set of rows that all share one width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    width: usize,
    rows: Vec<String>,
}

impl Document {
    pub fn new(width: usize) -> Self {
        Document {
            width,
            rows: Vec::new(),
        }
    }

    /// Appends a row. Rows must already be exactly `width` characters.
    pub fn push(&mut self, row: String) {
        debug_assert_eq!(
            display_width(&row),
            self.width,
            "row does not match document width: {:?}",
            row
        );
        self.rows.push(row);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    /// The printable text: every row followed by a newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows.len() * (self.width + 2));
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bar() {
        assert_eq!(bar(6), "+----+");
        assert_eq!(bar(2), "++");
    }

    #[test]
    fn test_segmented_bar() {
        assert_eq!(segmented_bar(&[3, 2]), "+---+--+");
        assert_eq!(segmented_bar(&[]), "+");
    }

    #[test]
    fn test_centered_even_padding() {
        // pad = 11 - 7 - 2 = 2
        assert_eq!(centered("Receipt", 11), "| Receipt |");
    }

    #[test]
    fn test_centered_odd_padding_goes_right() {
        // pad = 12 - 7 - 2 = 3 → 1 left, 2 right
        assert_eq!(centered("Receipt", 12), "| Receipt  |");
        // pad = 34 - 7 - 2 = 25 → 12 left, 13 right
        let row = centered("Receipt", 34);
        assert_eq!(row.len(), 34);
        assert!(row.starts_with(&format!("|{}Receipt", " ".repeat(12))));
        assert!(row.ends_with(&format!("Receipt{}|", " ".repeat(13))));
    }

    #[test]
    fn test_centered_never_truncates() {
        assert_eq!(centered("Receipt", 4), "|Receipt|");
    }

    #[test]
    fn test_blank() {
        assert_eq!(blank(5), "|   |");
        assert_eq!(blank(6), "|    |");
    }

    #[test]
    fn test_cell_row() {
        let row = cell_row(&[
            Cell::Gap(2),
            Cell::Left("Gen", 3),
            Cell::Gap(2),
            Cell::Divider,
            Cell::Gap(2),
            Cell::Right("7", 3),
            Cell::Gap(1),
        ]);
        assert_eq!(row, "|  Gen  |    7 |");
    }

    #[test]
    fn test_money_cell_counts_glyph_as_one_column() {
        let row = cell_row(&[Cell::Money(Money::from_pence(650), 5)]);
        assert_eq!(row, "|£ 6.50|");
        assert_eq!(display_width(&row), 8);
    }

    #[test]
    fn test_cells_wider_than_their_column_are_kept_whole() {
        let row = cell_row(&[
            Cell::Left("Overcoat", 4),
            Cell::Divider,
            Cell::Right("1234", 2),
            Cell::Money(Money::from_pence(123_456), 5),
        ]);
        assert_eq!(row, "|Overcoat|1234£1234.56|");
    }

    #[test]
    fn test_money_width() {
        let small = [Money::from_pence(650), Money::from_pence(1680)];
        assert_eq!(money_width(small, 5), 5);
        let large = [Money::from_pence(650), Money::from_pence(12345)];
        assert_eq!(money_width(large, 5), 6);
    }

    #[test]
    fn test_document_render() {
        let mut doc = Document::new(4);
        doc.push(bar(4));
        doc.push(blank(4));
        assert_eq!(doc.render(), "+--+\n|  |\n");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.to_string(), doc.render());
    }

    proptest! {
        #[test]
        fn centered_rows_fill_the_width(text in "[A-Za-z0-9 :]{0,20}", extra in 0usize..40) {
            let width = text.chars().count() + 2 + extra;
            let row = centered(&text, width);
            prop_assert_eq!(display_width(&row), width);

            // Right side never has fewer spaces than the left
            let inner = &row[1..row.len() - 1];
            let left = inner.len() - inner.trim_start_matches(' ').len();
            let right = inner.len() - inner.trim_end_matches(' ').len();
            if !text.trim().is_empty() && text.trim() == text {
                prop_assert!(right == left || right == left + 1);
            }
        }

        #[test]
        fn bars_fill_the_width(width in 2usize..200) {
            prop_assert_eq!(display_width(&bar(width)), width);
        }
    }
}
