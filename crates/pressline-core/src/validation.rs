//! # Validation Module
//!
//! Input validation for catalog data and order batches.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Counter intake                                               │
//! │  ├── Category / product / service re-prompts                           │
//! │  └── Unavailable services refused at the prompt                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Catalog entries checked once, when the catalog is loaded          │
//! │  └── Order batch checked once, before pricing and printing             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Pricing + layout assume valid input and never fail                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::OrderItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name a catalog may carry. Tags are sized to the longest
/// name, so this bounds the width of a printed tag.
pub const MAX_PRODUCT_NAME_LEN: usize = 40;

/// Dearest price a single service may carry: £10,000.00.
///
/// Keeps every sum, savings and VAT figure well inside `i64` pence for any
/// order a counter can take.
pub const MAX_PRICE: Money = Money::from_pence(1_000_000);

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_PRODUCT_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use pressline_core::validation::validate_product_name;
///
/// assert!(validate_product_name("2 Pc Eve Suit").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a service price.
///
/// ## Rules
/// - Must be positive. A service that is not offered has no price at all.
/// - At most [`MAX_PRICE`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max: MAX_PRICE.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Batch Validators
// =============================================================================

/// Validates an order batch before it is priced and printed.
///
/// ## Rules
/// - At least one item
/// - Every price positive
/// - Every item carries the same order number
///
/// ## Example
/// ```rust
/// use pressline_core::validation::validate_order_items;
///
/// assert!(validate_order_items(&[]).is_err());
/// ```
pub fn validate_order_items(items: &[OrderItem]) -> CoreResult<()> {
    let first = items.first().ok_or(CoreError::EmptyOrder)?;

    for item in items {
        validate_price(item.price)?;

        if item.order_number != first.order_number {
            return Err(ValidationError::InvalidFormat {
                field: "order number".to_string(),
                reason: format!(
                    "items of one order must share a number ({} vs {})",
                    first.order_number, item.order_number
                ),
            }
            .into());
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
