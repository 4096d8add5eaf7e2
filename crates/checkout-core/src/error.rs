//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── ValidationError  - Payload / field validation failures            │
//! │  └── CoreError        - Cart operations + wrapped ValidationError      │
//! │                                                                         │
//! │  checkout-api errors (app)                                             │
//! │  └── ApiError         - What the browser sees: { "error": "..." }      │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError::Validation → HTTP 400               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these types know about HTTP. The status mapping lives in the API
//! crate.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The `Display` output is the human-readable reason sent back to the client,
/// so every message names the field and the constraint it broke.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The payload root is not a JSON object (or is missing entirely).
    #[error("Payload must be an object")]
    NotAnObject,

    /// `items` is missing, not an array, or empty.
    #[error("items must be a non-empty array")]
    EmptyItems,

    /// An element of `items` is not an object.
    #[error("items[{index}] must be an object")]
    ItemNotAnObject { index: usize },

    /// Item name is missing, not a string, or empty.
    #[error("items[{index}].name must be a non-empty string")]
    InvalidItemName { index: usize },

    /// Item price is missing, non-numeric, or negative.
    #[error("items[{index}].price must be a finite number >= 0")]
    InvalidItemPrice { index: usize },

    /// Item quantity is missing, fractional, zero, or negative.
    #[error("items[{index}].quantity must be a positive integer")]
    InvalidItemQuantity { index: usize },

    /// `taxRate` is missing, non-numeric, or negative.
    #[error("taxRate must be a finite number >= 0")]
    InvalidTaxRate,

    /// `discount` is present but non-numeric or negative.
    #[error("discount must be a finite number >= 0")]
    InvalidDiscount,

    /// Percentage discount outside 0..=100.
    #[error("discount percentage must be between 0 and 100")]
    InvalidDiscountPercentage,

    /// Discount threshold is non-numeric or negative.
    #[error("discount minimum amount must be a finite number >= 0")]
    InvalidDiscountMinAmount,

    /// Discount code is empty.
    #[error("discount code must be a non-empty string")]
    InvalidDiscountCode,
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by stateful helpers such as [`crate::cart::Cart`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Named item is not in the cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
