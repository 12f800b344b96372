//! # Order Intake
//!
//! Prompts the operator for the garments of one order.
//!
//! ## Prompt Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         One garment                                     │
//! │                                                                         │
//! │  "Enter a type or EXIT: "                                              │
//! │     │  gentlemen / ladies ───────────────┐                              │
//! │     │  exit (order has items) ──► done   │                              │
//! │     │  exit (order empty) ──► re-prompt  │                              │
//! │     │  anything else ──► re-prompt       ▼                              │
//! │                                 product listing                         │
//! │  "Enter a product name: "  ◄────────────┘                              │
//! │     │  unknown ──► re-prompt                                            │
//! │     ▼                                                                   │
//! │  "Enter service type: "  (both prices shown)                           │
//! │     │  not standard/specialist ──► re-prompt                            │
//! │     │  not offered for this garment ──► re-prompt                       │
//! │     ▼                                                                   │
//! │  OrderLine                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All answers are case-insensitive. End of input at any prompt ends the
//! intake; the garments collected so far are returned.

use std::io::{BufRead, Write};

use pressline_core::{Catalog, CatalogEntry, Category, CoreError, OrderLine, Service};
use tracing::debug;

use crate::error::AppResult;

/// Word that finishes an order.
pub const EXIT_COMMAND: &str = "exit";

/// Result of prompting for a single garment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Line(OrderLine),
    /// The operator typed EXIT.
    Exit,
    /// Input ended.
    Closed,
}

/// Everything collected for one order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeOutcome {
    pub lines: Vec<OrderLine>,
    /// Input ended before the operator typed EXIT.
    pub input_closed: bool,
}

/// Interactive prompts over any line source and sink.
pub struct Intake<'a, R, W> {
    catalog: &'a Catalog,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Intake<'a, R, W> {
    pub fn new(catalog: &'a Catalog, input: &'a mut R, output: &'a mut W) -> Self {
        Intake {
            catalog,
            input,
            output,
        }
    }

    /// Collects garments until EXIT (with at least one garment) or end of
    /// input.
    pub fn collect_order(&mut self) -> AppResult<IntakeOutcome> {
        let mut outcome = IntakeOutcome::default();

        loop {
            match self.next_selection()? {
                Selection::Line(line) => {
                    debug!(
                        product = %line.name,
                        category = %line.category,
                        service = %line.service,
                        price = %line.price,
                        "Garment added"
                    );
                    outcome.lines.push(line);
                }
                Selection::Exit if outcome.lines.is_empty() => {
                    writeln!(self.output, "Add at least one item before finishing the order.")?;
                }
                Selection::Exit => return Ok(outcome),
                Selection::Closed => {
                    outcome.input_closed = true;
                    return Ok(outcome);
                }
            }
        }
    }

    /// Prompts for one garment: category, product, then service.
    pub fn next_selection(&mut self) -> AppResult<Selection> {
        let catalog = self.catalog;

        writeln!(self.output, "\nAdd product to order, or exit.\nOptions:")?;
        for category in Category::ALL {
            writeln!(self.output, "{}", category)?;
        }

        let category = loop {
            let Some(answer) = self.ask("Enter a type or EXIT: ")? else {
                return Ok(Selection::Closed);
            };
            if answer.eq_ignore_ascii_case(EXIT_COMMAND) {
                return Ok(Selection::Exit);
            }
            match answer.parse::<Category>() {
                Ok(category) => break category,
                Err(_) => writeln!(self.output, "Invalid type, try again.")?,
            }
        };

        writeln!(self.output, "\nOptions:")?;
        for entry in catalog.products(category) {
            writeln!(self.output, "{}", entry.name)?;
        }

        let entry = loop {
            let Some(answer) = self.ask("Enter a product name: ")? else {
                return Ok(Selection::Closed);
            };
            match catalog.lookup(category, &answer) {
                Ok(entry) => break entry,
                Err(_) => writeln!(self.output, "Not a valid product name, try again.")?,
            }
        };

        self.show_services(entry)?;

        loop {
            let Some(answer) = self.ask("Enter service type: ")? else {
                return Ok(Selection::Closed);
            };
            let Ok(service) = answer.parse::<Service>() else {
                writeln!(self.output, "Not a valid service, try again.")?;
                continue;
            };
            match catalog.order_line(category, &entry.name, service) {
                Ok(line) => return Ok(Selection::Line(line)),
                Err(CoreError::ServiceUnavailable { .. }) => {
                    writeln!(self.output, "This service is not available, try again.")?
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn show_services(&mut self, entry: &CatalogEntry) -> AppResult<()> {
        writeln!(self.output, "\nServices available:")?;
        for service in Service::ALL {
            match entry.prices.get(service) {
                Some(price) => writeln!(self.output, "{}: {}", service, price)?,
                None => writeln!(self.output, "{}: Not available", service)?,
            }
        }
        Ok(())
    }

    /// Writes the prompt and reads one trimmed answer. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        read_answer(self.input)
    }
}

/// Reads one line, trimmed. `None` at end of input.
pub fn read_answer<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_intake(script: &str) -> (IntakeOutcome, String) {
        let catalog = Catalog::default();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = Intake::new(&catalog, &mut input, &mut output)
            .collect_order()
            .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_single_garment_then_exit() {
        let (outcome, transcript) = run_intake("ladies\nshirt\nstandard\nexit\n");

        assert!(!outcome.input_closed);
        assert_eq!(outcome.lines.len(), 1);
        let line = &outcome.lines[0];
        assert_eq!(line.name, "Shirt");
        assert_eq!(line.category, Category::Ladies);
        assert_eq!(line.service, Service::Standard);
        assert_eq!(line.price.pence(), 650);

        assert!(transcript.contains("Options:\nGentlemen\nLadies\n"));
        assert!(transcript.contains("Services available:\nStandard: £6.50\nSpecialist: £9.10\n"));
    }

    #[test]
    fn test_answers_are_case_insensitive() {
        let (outcome, _) = run_intake("GENTLEMEN\n2 pc EVE suit\nSpecialist\nExit\n");
        assert_eq!(outcome.lines[0].name, "2 Pc Eve Suit");
        assert_eq!(outcome.lines[0].service, Service::Specialist);
    }

    #[test]
    fn test_invalid_answers_reprompt() {
        let (outcome, transcript) = run_intake(
            "kids\nladies\nshrit\nshirt\nexpress\nspecialist\nEXIT\n",
        );

        assert_eq!(outcome.lines.len(), 1);
        assert_eq!(outcome.lines[0].price.pence(), 910);
        assert!(transcript.contains("Invalid type, try again."));
        assert!(transcript.contains("Not a valid product name, try again."));
        assert!(transcript.contains("Not a valid service, try again."));
    }

    #[test]
    fn test_unavailable_service_reprompts() {
        let (outcome, transcript) = run_intake("ladies\neve dress\nstandard\nspecialist\nexit\n");

        assert!(transcript.contains("Standard: Not available"));
        assert!(transcript.contains("This service is not available, try again."));
        assert_eq!(outcome.lines[0].price.pence(), 2100);
    }

    #[test]
    fn test_exit_on_empty_order_reprompts() {
        let (outcome, transcript) = run_intake("exit\ngentlemen\ncoat\nstandard\nexit\n");

        assert!(transcript.contains("Add at least one item before finishing the order."));
        assert_eq!(outcome.lines.len(), 1);
        assert_eq!(outcome.lines[0].name, "Coat");
    }

    #[test]
    fn test_multiple_garments_keep_entry_order() {
        let (outcome, _) = run_intake(
            "ladies\ndress\nstandard\ngentlemen\ntrousers\nspecialist\nexit\n",
        );
        let names: Vec<&str> = outcome.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Dress", "Trousers"]);
    }

    #[test]
    fn test_end_of_input_closes_intake() {
        let (outcome, _) = run_intake("ladies\nshirt\nstandard\nladies\n");
        assert!(outcome.input_closed);
        assert_eq!(outcome.lines.len(), 1);

        let (outcome, _) = run_intake("");
        assert!(outcome.input_closed);
        assert!(outcome.lines.is_empty());
    }
}
