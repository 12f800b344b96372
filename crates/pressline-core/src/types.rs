//! # Domain Types
//!
//! Core domain types used throughout Pressline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │    Service      │   │  OrderNumber    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Gentlemen "Gen"│   │  Standard "-st" │   │  DDMMYYYYHHMM   │       │
//! │  │  Ladies    "Lad"│   │  Specialist"-sp"│   │  (12 chars)     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐        number()       ┌─────────────────┐         │
//! │  │   OrderLine     │ ────────────────────► │   OrderItem     │         │
//! │  │  name, category │                       │  + order_number │         │
//! │  │  service, price │                       │  (immutable)    │         │
//! │  └─────────────────┘                       └─────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20% (UK standard VAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Category
// =============================================================================

/// Which rail of the shop a garment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Gentlemen,
    Ladies,
}

impl Category {
    /// All categories, in the order they are offered at the counter.
    pub const ALL: [Category; 2] = [Category::Gentlemen, Category::Ladies];

    /// Three-letter code printed on receipts and tags.
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Category::Gentlemen => "Gen",
            Category::Ladies => "Lad",
        }
    }

    /// Full name shown in prompts.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Gentlemen => "Gentlemen",
            Category::Ladies => "Ladies",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive: `"ladies"`, `"LADIES"` and `"Ladies"` all parse.
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.label().to_string()).collect(),
            })
    }
}

// =============================================================================
// Service
// =============================================================================

/// Cleaning service level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    Standard,
    Specialist,
}

impl Service {
    pub const ALL: [Service; 2] = [Service::Standard, Service::Specialist];

    /// Three-character code printed on receipts and tags.
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Service::Standard => "-st",
            Service::Specialist => "-sp",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Service::Standard => "Standard",
            Service::Specialist => "Specialist",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Service {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Service::ALL
            .into_iter()
            .find(|svc| svc.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "service".to_string(),
                allowed: Service::ALL.iter().map(|s| s.label().to_lowercase()).collect(),
            })
    }
}

// =============================================================================
// Order Number
// =============================================================================

/// Human-readable order reference printed on the receipt and every tag.
///
/// ## Format
/// `DDMMYYYYHHMM`, zero padded, so it is always 12 characters:
/// 7 March 2026 at 09:05 → `070320260905`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Width of an order number produced by [`OrderNumber::from_timestamp`].
    pub const LEN: usize = 12;

    /// Derives the order number from the time the order was taken.
    ///
    /// The caller reads the clock; this stays a pure function.
    pub fn from_timestamp<T: Datelike + Timelike>(at: &T) -> Self {
        OrderNumber(format!(
            "{:02}{:02}{:04}{:02}{:02}",
            at.day(),
            at.month(),
            at.year(),
            at.hour(),
            at.minute()
        ))
    }

    /// Wraps an existing reference (e.g. when re-printing an order).
    pub fn new(value: impl Into<String>) -> Self {
        OrderNumber(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Order Line / Order Item
// =============================================================================

/// A garment chosen at the counter, priced but not yet numbered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub category: Category,
    pub service: Service,
    pub price: Money,
}

impl OrderLine {
    /// Stamps the line with the order number, producing the immutable item
    /// consumed by pricing and the document composers.
    pub fn number(self, order_number: &OrderNumber) -> OrderItem {
        OrderItem {
            name: self.name,
            category: self.category,
            service: self.service,
            price: self.price,
            order_number: order_number.clone(),
        }
    }
}

/// One priced garment of an order.
///
/// ## Invariants
/// - `price` is positive: unavailable services never become items
/// - every item of a batch carries the same `order_number`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub category: Category,
    pub service: Service,
    pub price: Money,
    pub order_number: OrderNumber,
}

/// Numbers a whole batch of lines with one order number.
pub fn number_lines(lines: Vec<OrderLine>, order_number: &OrderNumber) -> Vec<OrderItem> {
    lines
        .into_iter()
        .map(|line| line.number(order_number))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
