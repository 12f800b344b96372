//! # Pricing
//!
//! Turns a batch of order items into the four figures printed at the foot
//! of the receipt.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  subtotal = Σ item.price                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tier (first match, highest threshold first)                            │
//! │       subtotal > £30.00 ──► 15% savings                                │
//! │       subtotal > £15.00 ──► 10% savings                                │
//! │       otherwise         ──►  no savings                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total = subtotal - savings                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total inc. VAT = total + 20% VAT   (VAT after discount)                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Thresholds are strict: a subtotal of exactly £30.00 earns 10%, not 15%.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{OrderItem, TaxRate};

// =============================================================================
// Constants
// =============================================================================

/// A savings band: subtotals strictly above `threshold` save `discount_bps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountTier {
    pub threshold: Money,
    pub discount_bps: u32,
}

/// Savings bands, highest threshold first.
pub static DISCOUNT_TIERS: [DiscountTier; 2] = [
    DiscountTier {
        threshold: Money::from_pence(3000),
        discount_bps: 1500,
    },
    DiscountTier {
        threshold: Money::from_pence(1500),
        discount_bps: 1000,
    },
];

/// Flat UK VAT, applied to the discounted total.
pub const VAT_RATE: TaxRate = TaxRate::from_bps(2000);

// =============================================================================
// Totals
// =============================================================================

/// Figures derived from an order batch. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Money,
    pub savings: Money,
    /// Subtotal after savings, before VAT.
    pub total: Money,
    pub total_incl_vat: Money,
}

impl Totals {
    /// Prices a batch of items.
    ///
    /// ## Example
    /// ```rust
    /// use pressline_core::money::Money;
    /// use pressline_core::pricing::Totals;
    ///
    /// let totals = Totals::from_subtotal(Money::from_pence(4000));
    /// assert_eq!(totals.savings.pence(), 600);
    /// assert_eq!(totals.total.pence(), 3400);
    /// assert_eq!(totals.total_incl_vat.pence(), 4080);
    /// ```
    pub fn calculate(items: &[OrderItem]) -> Self {
        Totals::from_subtotal(subtotal(items))
    }

    /// Applies the savings tiers and VAT to an already summed subtotal.
    pub fn from_subtotal(subtotal: Money) -> Self {
        let savings = savings(subtotal);
        let total = subtotal - savings;
        let total_incl_vat = total + total.calculate_tax(VAT_RATE);

        Totals {
            subtotal,
            savings,
            total,
            total_incl_vat,
        }
    }

    /// The four amounts in receipt order.
    pub fn amounts(&self) -> [Money; 4] {
        [self.subtotal, self.savings, self.total, self.total_incl_vat]
    }
}

// =============================================================================
// Steps
// =============================================================================

/// Sum of every item price.
pub fn subtotal(items: &[OrderItem]) -> Money {
    items.iter().map(|item| item.price).sum()
}

/// The tier a subtotal falls into, if any.
pub fn discount_tier(subtotal: Money) -> Option<&'static DiscountTier> {
    DISCOUNT_TIERS
        .iter()
        .find(|tier| subtotal > tier.threshold)
}

/// Amount saved on a subtotal. Zero below the lowest tier.
pub fn savings(subtotal: Money) -> Money {
    discount_tier(subtotal)
        .map(|tier| subtotal.percentage(tier.discount_bps))
        .unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================
