//! # pressline-core: Pure Business Logic for Pressline
//!
//! This crate is the **heart** of Pressline, the order counter of a
//! garment-cleaning shop. It prices an order and lays out the two documents
//! the counter prints for it: the customer receipt and the garment tags.
//! Everything here is a pure function with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pressline Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/counter (stdin/stdout)                  │   │
//! │  │    Category ──► Product ──► Service ──► ... ──► EXIT            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Vec<OrderItem>                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pressline-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  pricing  │  │  receipt  │  │   tags    │  │   │
//! │  │   │  prices   │  │  tiers    │  │  Document │  │  Document │  │   │
//! │  │   │  lookups  │  │  VAT      │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └─────┬─────┘  └─────┬─────┘  │   │
//! │  │                                       └──── layout ───┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO FILES • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ two Strings                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                pressline-store (receipt.txt, tags.txt)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Category, Service, OrderNumber, OrderItem
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The typed price list
//! - [`pricing`] - Subtotal, discount tiers, VAT
//! - [`layout`] - Fixed-width row primitives and `Document`
//! - [`receipt`] / [`tags`] - The two printed documents
//! - [`documents`] - Validate + price + compose in one step
//! - [`error`] / [`validation`] - Typed errors and input checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same items in, byte-identical documents out
//! 2. **No I/O**: the clock, stdin and files belong to the app
//! 3. **Integer Money**: all monetary values are pence (i64)
//! 4. **Uniform Rows**: every row of a document has the same width
//!
//! ## Example Usage
//!
//! ```rust
//! use pressline_core::{receipt, Category, Catalog, OrderNumber, Service};
//!
//! let catalog = Catalog::default();
//! let line = catalog
//!     .order_line(Category::Ladies, "shirt", Service::Standard)
//!     .unwrap();
//! let items = vec![line.number(&OrderNumber::new("011202501234"))];
//!
//! let doc = receipt::compose(&items);
//! assert!(doc.render().contains("Total inc. VAT   £ 7.80"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod documents;
pub mod error;
pub mod layout;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod tags;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogEntry, ServicePrices};
pub use documents::{DocumentKind, OrderDocuments};
pub use error::{CoreError, CoreResult, ValidationError};
pub use layout::Document;
pub use money::Money;
pub use pricing::Totals;
pub use tags::TagComposer;
pub use types::*;
