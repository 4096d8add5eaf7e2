//! # checkout-core: Pure Checkout Logic
//!
//! This crate holds the part of the checkout service that actually computes
//! something: payload validation and the checkout calculation. Everything is a
//! pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser form (public/)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ POST /api/checkout (JSON)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    checkout-api (axum)                          │   │
//! │  │    parse body ──► validate ──► calculate ──► JSON / ApiError    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │validation │  │calculator │  │   cart    │  │   │
//! │  │   │ LineItem  │  │  payload  │  │ subtotal  │  │ builder   │  │   │
//! │  │   │ Request   │  │  fields   │  │ discount  │  │ discount  │  │   │
//! │  │   │ Result    │  │           │  │ tax/total │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO HTTP • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire types (LineItem, CheckoutRequest, CheckoutResult)
//! - [`validation`] - Fail-fast validation of raw JSON payloads
//! - [`calculator`] - Subtotal, capped discount, tax, total
//! - [`money`] - `round2` and amount helpers
//! - [`discount`] - Fixed and percentage discounts
//! - [`cart`] - In-memory cart builder
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{calculate_checkout, validate_checkout_payload};
//! use serde_json::json;
//!
//! let payload = json!({
//!     "items": [{ "name": "A", "price": 100, "quantity": 1 }],
//!     "taxRate": 0.2,
//!     "discount": 10
//! });
//!
//! let request = validate_checkout_payload(&payload).unwrap();
//! let result = calculate_checkout(&request);
//!
//! assert_eq!(result.total_before_tax, 90.0);
//! assert_eq!(result.tax_amount, 18.0);
//! assert_eq!(result.total, 108.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{calculate_breakdown, calculate_checkout};
pub use cart::Cart;
pub use discount::{Discount, DiscountKind};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::round2;
pub use types::*;
pub use validation::validate_checkout_payload;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Discount applied when a payload omits `discount`.
pub const DEFAULT_DISCOUNT: f64 = 0.0;
