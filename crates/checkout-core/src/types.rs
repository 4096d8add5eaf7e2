//! # Checkout Types
//!
//! Wire types shared by the calculator, the API and the browser client.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Checkout Types                                  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    LineItem     │   │ CheckoutRequest │   │   CheckoutResult    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  name           │◄──│  items[]        │──►│  totalBeforeTax     │   │
//! │  │  price          │   │  taxRate        │   │  taxAmount          │   │
//! │  │  quantity       │   │  discount       │   │  total              │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │                                                      ▲                  │
//! │                                          ┌───────────┴─────────┐        │
//! │                                          │  CheckoutBreakdown  │        │
//! │                                          │  subtotal, applied  │        │
//! │                                          │  discount, ...      │        │
//! │                                          └─────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types are request-scoped values: built per call, never persisted.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::validation::validate_checkout_payload;

// =============================================================================
// Line Item
// =============================================================================

/// One line of a checkout: a named product at a unit price times a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Display name, never empty.
    pub name: String,

    /// Unit price, finite and >= 0.
    pub price: f64,

    /// Number of units, > 0.
    #[ts(type = "number")]
    pub quantity: u64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: f64, quantity: u64) -> Self {
        LineItem {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Unrounded `price * quantity`.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

// =============================================================================
// Checkout Request
// =============================================================================

/// A validated checkout request.
///
/// Untrusted input reaches this type only through
/// [`crate::validation::validate_checkout_payload`], the cart, or `Deserialize`,
/// which runs the same validation.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Ordered, non-empty list of line items.
    pub items: Vec<LineItem>,

    /// Tax rate as a fraction (0.2 = 20%).
    pub tax_rate: f64,

    /// Flat discount amount. 0 when the payload omits it.
    pub discount: f64,
}

impl<'de> Deserialize<'de> for CheckoutRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = Value::deserialize(deserializer)?;
        validate_checkout_payload(&payload).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Checkout Result
// =============================================================================

/// The response body of a successful checkout. Every field is rounded to two
/// decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResult {
    /// Amount after discount, before tax.
    pub total_before_tax: f64,

    /// Tax on the discounted amount.
    pub tax_amount: f64,

    /// Amount to pay.
    pub total: f64,
}

impl CheckoutResult {
    /// False when any field overflowed to infinity or NaN.
    ///
    /// JSON has no representation for these, so the API treats a non-finite
    /// result as an internal error.
    pub fn is_finite(&self) -> bool {
        self.total_before_tax.is_finite() && self.tax_amount.is_finite() && self.total.is_finite()
    }
}

// =============================================================================
// Checkout Breakdown
// =============================================================================

/// Every intermediate value of a calculation.
///
/// `subtotal` and `applied_discount` keep full precision; the remaining
/// fields are rounded exactly as in [`CheckoutResult`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutBreakdown {
    pub subtotal: f64,
    pub applied_discount: f64,
    pub after_discount: f64,
    pub tax_amount: f64,
    pub total: f64,
}

impl From<CheckoutBreakdown> for CheckoutResult {
    fn from(breakdown: CheckoutBreakdown) -> Self {
        CheckoutResult {
            total_before_tax: breakdown.after_discount,
            tax_amount: breakdown.tax_amount,
            total: breakdown.total,
        }
    }
}
