//! # Order Loop
//!
//! Runs the counter session: one order after another until the operator
//! shuts down.
//!
//! ## One Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Welcome ───────────────────────────────────────────────────────────►│
//! │                                                                         │
//! │  2. Intake ────────────────────────────────────────────────────────────►│
//! │     Vec<OrderLine> (at least one garment)                               │
//! │                                                                         │
//! │  3. Number ────────────────────────────────────────────────────────────►│
//! │     One clock read, same OrderNumber on every item                      │
//! │                                                                         │
//! │  4. Payment messages ──────────────────────────────────────────────────►│
//! │                                                                         │
//! │  5. Compose + Save ────────────────────────────────────────────────────►│
//! │     OrderDocuments::prepare, DocumentStore::save_all                    │
//! │     A failed save is reported; the other document is still written      │
//! │                                                                         │
//! │  6. Printing messages, "Complete." ────────────────────────────────────►│
//! │                                                                         │
//! │  7. ENTER for the next order, SHUTDOWN to stop ────────────────────────►│
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use pressline_core::{
    number_lines, Catalog, OrderDocuments, OrderLine, OrderNumber, TagComposer,
};
use pressline_store::{DocumentStore, SaveReport};
use tracing::{info, warn};

use crate::error::AppResult;
use crate::intake::{read_answer, Intake};

/// Word that ends the session at the continue prompt.
pub const SHUTDOWN_COMMAND: &str = "shutdown";

/// Printed once per document that could not be saved.
pub const SAVE_FAILED_MESSAGE: &str = "System Error - Failed to save for printing.";

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Orders whose documents were composed.
    pub orders: usize,
    /// Orders with at least one document that failed to save.
    pub failed_saves: usize,
}

/// The counter: catalog, tag layout and output store for a session.
pub struct Counter {
    catalog: Catalog,
    tag_composer: TagComposer,
    store: DocumentStore,
    stage_delay: Duration,
}

impl Counter {
    pub fn new(catalog: Catalog, store: DocumentStore) -> Self {
        let tag_composer = TagComposer::for_catalog(&catalog);
        Counter {
            catalog,
            tag_composer,
            store,
            stage_delay: Duration::ZERO,
        }
    }

    /// Pause between stage messages.
    pub fn stage_delay(mut self, delay: Duration) -> Self {
        self.stage_delay = delay;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs the session against the local clock.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> AppResult<SessionSummary> {
        self.run_with_clock(input, output, || Local::now().naive_local())
    }

    /// Runs the session, reading the time of each order from `clock`.
    pub fn run_with_clock<R, W, C>(
        &self,
        input: &mut R,
        output: &mut W,
        mut clock: C,
    ) -> AppResult<SessionSummary>
    where
        R: BufRead,
        W: Write,
        C: FnMut() -> NaiveDateTime,
    {
        let mut summary = SessionSummary::default();

        loop {
            writeln!(output, "Welcome, continue through the next steps to generate order.")?;

            let outcome = Intake::new(&self.catalog, input, output).collect_order()?;

            if !outcome.lines.is_empty() {
                let number = OrderNumber::from_timestamp(&clock());
                let report = self.process_order(outcome.lines, &number, output)?;

                summary.orders += 1;
                if !report.is_complete() {
                    summary.failed_saves += 1;
                }
            }

            if outcome.input_closed {
                info!("Input closed, ending session");
                break;
            }

            write!(output, "Press ENTER to continue, or SHUTDOWN to end program: ")?;
            output.flush()?;
            match read_answer(input)? {
                Some(answer) if answer.eq_ignore_ascii_case(SHUTDOWN_COMMAND) => break,
                Some(_) => {}
                None => break,
            }
        }

        writeln!(output, "Exiting")?;
        info!(
            orders = summary.orders,
            failed_saves = summary.failed_saves,
            "Session ended"
        );
        Ok(summary)
    }

    /// Numbers, prices, composes and saves one order.
    pub fn process_order<W: Write>(
        &self,
        lines: Vec<OrderLine>,
        number: &OrderNumber,
        output: &mut W,
    ) -> AppResult<SaveReport> {
        let items = number_lines(lines, number);

        self.stage(output, "\nPayment Processing")?;
        self.stage(output, "Payment Accepted")?;
        self.stage(output, "Generating Receipt & Tags")?;

        let documents = OrderDocuments::prepare(&items, &self.tag_composer)?;
        info!(
            order = %documents.order_number,
            items = items.len(),
            subtotal = %documents.totals.subtotal,
            total_incl_vat = %documents.totals.total_incl_vat,
            "Order priced"
        );

        let report = self.store.save_all(&documents);
        for (kind, err) in &report.failed {
            warn!(kind = kind.label(), error = %err, "Document not saved");
            writeln!(output, "{}", SAVE_FAILED_MESSAGE)?;
        }

        self.stage(output, "\nPrinting Receipt")?;
        self.stage(output, "Printing Tags")?;
        self.stage(output, "Complete.\n")?;

        Ok(report)
    }

    fn stage<W: Write>(&self, output: &mut W, message: &str) -> AppResult<()> {
        if !self.stage_delay.is_zero() {
            output.flush()?;
            std::thread::sleep(self.stage_delay);
        }
        writeln!(output, "{}", message)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pressline_core::{Category, Service};
    use pressline_store::StoreConfig;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn fixed_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 1)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    fn counter(dir: &std::path::Path) -> Counter {
        let store = DocumentStore::open(StoreConfig::new(dir)).unwrap();
        Counter::new(Catalog::default(), store)
    }

    fn run_session(counter: &Counter, script: &str) -> (SessionSummary, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let summary = counter
            .run_with_clock(&mut input, &mut output, fixed_clock)
            .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_single_order_session() {
        let tmp = TempDir::new().unwrap();
        let counter = counter(tmp.path());

        let (summary, transcript) =
            run_session(&counter, "ladies\nshirt\nstandard\nexit\nshutdown\n");

        assert_eq!(summary, SessionSummary { orders: 1, failed_saves: 0 });
        assert!(transcript.starts_with("Welcome, continue through the next steps to generate order.\n"));
        assert!(transcript.contains(
            "\nPayment Processing\nPayment Accepted\nGenerating Receipt & Tags\n"
        ));
        assert!(transcript.contains("\nPrinting Receipt\nPrinting Tags\nComplete.\n"));
        assert!(transcript.ends_with("Exiting\n"));

        let receipt = fs::read_to_string(tmp.path().join("receipt.txt")).unwrap();
        assert!(receipt.contains("|      Order: 011220250905       |"));
        assert!(receipt.contains("|       Total inc. VAT   £ 7.80  |"));

        let tags = fs::read_to_string(tmp.path().join("tags.txt")).unwrap();
        assert_eq!(
            tags.lines().nth(1),
            Some("|  Shirt          |  Lad  |  -st  |  011220250905  |")
        );
    }

    #[test]
    fn test_enter_continues_to_next_order() {
        let tmp = TempDir::new().unwrap();
        let counter = counter(tmp.path());

        let (summary, transcript) = run_session(
            &counter,
            "ladies\nshirt\nstandard\nexit\n\ngentlemen\ncoat\nspecialist\nexit\nSHUTDOWN\n",
        );

        assert_eq!(summary.orders, 2);
        assert_eq!(transcript.matches("Complete.").count(), 2);

        // Each order overwrites the previous documents
        let receipt = fs::read_to_string(tmp.path().join("receipt.txt")).unwrap();
        assert!(receipt.contains("Coat"));
        assert!(!receipt.contains("Shirt"));
    }

    #[test]
    fn test_end_of_input_finishes_pending_order() {
        let tmp = TempDir::new().unwrap();
        let counter = counter(tmp.path());

        let (summary, transcript) = run_session(&counter, "ladies\nblouse\nspecialist\n");

        assert_eq!(summary.orders, 1);
        assert!(transcript.ends_with("Exiting\n"));
        assert!(tmp.path().join("tags.txt").is_file());
    }

    #[test]
    fn test_empty_input_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let counter = counter(tmp.path());

        let (summary, _) = run_session(&counter, "");

        assert_eq!(summary.orders, 0);
        assert!(!tmp.path().join("receipt.txt").exists());
    }

    #[test]
    fn test_save_failure_is_reported_and_session_continues() {
        let tmp = TempDir::new().unwrap();
        let counter = counter(tmp.path());
        fs::create_dir(tmp.path().join("tags.txt")).unwrap();

        let (summary, transcript) =
            run_session(&counter, "gentlemen\njacket\nstandard\nexit\nshutdown\n");

        assert_eq!(summary, SessionSummary { orders: 1, failed_saves: 1 });
        assert_eq!(transcript.matches(SAVE_FAILED_MESSAGE).count(), 1);
        assert!(transcript.contains("Complete."));
        assert!(tmp.path().join("receipt.txt").is_file());
    }

    #[test]
    fn test_process_order_numbers_every_item() {
        let tmp = TempDir::new().unwrap();
        let counter = counter(tmp.path());
        let catalog = counter.catalog();
        let lines = vec![
            catalog
                .order_line(Category::Ladies, "Dress", Service::Standard)
                .unwrap(),
            catalog
                .order_line(Category::Ladies, "Jacket", Service::Standard)
                .unwrap(),
        ];

        let mut output = Vec::new();
        let report = counter
            .process_order(lines, &OrderNumber::new("070320260905"), &mut output)
            .unwrap();

        assert!(report.is_complete());
        let tags = fs::read_to_string(tmp.path().join("tags.txt")).unwrap();
        assert_eq!(tags.matches("070320260905").count(), 2);
    }
}
