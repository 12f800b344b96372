//! # pressline-store: Document Persistence for Pressline
//!
//! This crate writes the documents composed by `pressline-core` to the
//! output directory, where the shop's print spooler collects them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pressline Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    pressline-core (pure)                        │   │
//! │  │          OrderDocuments { receipt, tags, totals, ... }          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pressline-store (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   StoreConfig ──► DocumentStore::open ──► save / save_all       │   │
//! │  │                                                 │               │   │
//! │  └─────────────────────────────────────────────────┼───────────────┘   │
//! │                                                    ▼                    │
//! │                               <output_dir>/receipt.txt, tags.txt        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - `StoreConfig`, `DocumentStore`, `SaveReport`
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{DocumentStore, SaveReport, StoreConfig, DEFAULT_RECEIPT_FILE, DEFAULT_TAGS_FILE};
