//! # Error Types
//!
//! Domain-specific error types for pressline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pressline-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog lookups, order rules                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pressline-store errors (separate crate)                               │
//! │  └── StoreError       - Document write failures                        │
//! │                                                                         │
//! │  counter errors (app)                                                  │
//! │  └── AppError         - Config, intake I/O, wraps the above            │
//! │                                                                         │
//! │  Pricing and layout have no error paths: they are total functions      │
//! │  over validated input.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::{Category, Service};

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this name in the category.
    ///
    /// ## When This Occurs
    /// - Typo at the counter ("Shrit")
    /// - Product exists, but under the other category ("Dress" for Gentlemen)
    #[error("Product not found: {category} {name}")]
    ProductNotFound { category: Category, name: String },

    /// The product exists but the requested service is not offered.
    ///
    /// ## User Workflow
    /// ```text
    /// Ladies ► Eve Dress ► standard
    ///      │
    ///      ▼
    /// ServiceUnavailable { product: "Eve Dress", service: Standard }
    ///      │
    ///      ▼
    /// Counter shows: "This service is not available, try again."
    /// ```
    #[error("{service} service is not available for {product}")]
    ServiceUnavailable { product: String, service: Service },

    /// An order reached pricing or printing without any items.
    #[error("Order has no items")]
    EmptyOrder,

    /// A catalog file could not be parsed.
    #[error("Catalog could not be parsed: {0}")]
    CatalogParse(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::CatalogParse(err.to_string())
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::CatalogParse(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value exceeds its upper bound.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: String },

    /// Invalid format (e.g. a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g. the same product listed twice in a category).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
