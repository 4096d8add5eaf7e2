//! # Validation Module
//!
//! Turns an untrusted JSON payload into a [`CheckoutRequest`], or reports the
//! first rule it breaks.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fail-Fast Validation                               │
//! │                                                                         │
//! │  payload is an object?                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  items is a non-empty array?                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for each item, in order:                                               │
//! │       object? ──► name ──► price ──► quantity                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  taxRate ──► discount (absent → 0)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(CheckoutRequest)                                                    │
//! │                                                                         │
//! │  The first failing check is the error returned. Unknown fields are     │
//! │  ignored.                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::validate_checkout_payload;
//! use checkout_core::ValidationError;
//! use serde_json::json;
//!
//! let err = validate_checkout_payload(&json!({ "items": [] })).unwrap_err();
//! assert_eq!(err, ValidationError::EmptyItems);
//! ```

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::money::is_valid_amount;
use crate::types::{CheckoutRequest, LineItem};
use crate::DEFAULT_DISCOUNT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// First integer past `u64::MAX` (2^64), as an f64.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

// =============================================================================
// Payload Validation
// =============================================================================

/// Validates a raw checkout payload.
///
/// ## Rules
/// - Payload must be an object
/// - `items` must be an array with at least one element
/// - Each item: non-empty `name`, finite `price >= 0`, integer `quantity > 0`
/// - `taxRate` must be a finite number >= 0
/// - `discount`, when present, must be a finite number >= 0 (absent → 0)
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_checkout_payload;
/// use serde_json::json;
///
/// let request = validate_checkout_payload(&json!({
///     "items": [{ "name": "A", "price": 10, "quantity": 2 }],
///     "taxRate": 0.1
/// }))
/// .unwrap();
///
/// assert_eq!(request.items[0].quantity, 2);
/// assert_eq!(request.discount, 0.0);
/// ```
pub fn validate_checkout_payload(payload: &Value) -> ValidationResult<CheckoutRequest> {
    let payload = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    let raw_items = match payload.get("items") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(ValidationError::EmptyItems),
    };

    let items = raw_items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_item(index, item))
        .collect::<ValidationResult<Vec<_>>>()?;

    let tax_rate = payload
        .get("taxRate")
        .and_then(Value::as_f64)
        .ok_or(ValidationError::InvalidTaxRate)?;
    validate_tax_rate(tax_rate)?;

    let discount = match payload.get("discount") {
        None => DEFAULT_DISCOUNT,
        Some(value) => value.as_f64().ok_or(ValidationError::InvalidDiscount)?,
    };
    validate_discount(discount)?;

    Ok(CheckoutRequest {
        items,
        tax_rate,
        discount,
    })
}

/// Parses a single element of `items`, checking name, price, then quantity.
fn parse_item(index: usize, item: &Value) -> ValidationResult<LineItem> {
    let item: &Map<String, Value> = item
        .as_object()
        .ok_or(ValidationError::ItemNotAnObject { index })?;

    let name = item
        .get("name")
        .and_then(Value::as_str)
        .ok_or(ValidationError::InvalidItemName { index })?;
    validate_item_name(index, name)?;

    let price = item
        .get("price")
        .and_then(Value::as_f64)
        .ok_or(ValidationError::InvalidItemPrice { index })?;
    validate_price(index, price)?;

    let quantity = item
        .get("quantity")
        .and_then(integer_value)
        .ok_or(ValidationError::InvalidItemQuantity { index })?;
    validate_quantity(index, quantity)?;

    Ok(LineItem::new(name, price, quantity))
}

/// Reads a JSON number as an unsigned integer.
///
/// The spelling does not matter: `2`, `2.0` and `2e0` are the same integer,
/// as are `10000000000000000` and `1e16`. `1.5`, `-1` and anything past
/// `u64::MAX` are not integers.
fn integer_value(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }

    let n = value.as_f64()?;
    if n >= 0.0 && n.fract() == 0.0 && n < U64_LIMIT {
        Some(n as u64)
    } else {
        None
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty (whitespace counts as content)
pub fn validate_item_name(index: usize, name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::InvalidItemName { index });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (free items are allowed)
pub fn validate_price(index: usize, price: f64) -> ValidationResult<()> {
    if !is_valid_amount(price) {
        return Err(ValidationError::InvalidItemPrice { index });
    }

    Ok(())
}

/// Validates a quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(index: usize, quantity: u64) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::InvalidItemQuantity { index });
    }

    Ok(())
}

/// Validates a tax rate given as a fraction.
///
/// No upper bound: rates above 1.0 are unusual but well-defined.
pub fn validate_tax_rate(tax_rate: f64) -> ValidationResult<()> {
    if !is_valid_amount(tax_rate) {
        return Err(ValidationError::InvalidTaxRate);
    }

    Ok(())
}

/// Validates a flat discount amount.
pub fn validate_discount(discount: f64) -> ValidationResult<()> {
    if !is_valid_amount(discount) {
        return Err(ValidationError::InvalidDiscount);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
