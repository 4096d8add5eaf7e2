//! # Money Module
//!
//! Rounding and amount helpers for checkout values.
//!
//! ## Floating Point, Rounded Late
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ROUNDING POLICY                                                        │
//! │                                                                         │
//! │  Prices, discounts and tax rates arrive as JSON numbers (f64).          │
//! │                                                                         │
//! │  subtotal, applied discount ─► full f64 precision, never rounded        │
//! │  totalBeforeTax, taxAmount, total ─► round2 (half-up, 2 decimals)       │
//! │                                                                         │
//! │  Rounding happens exactly once per output field.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::{round2, format_amount};
//!
//! assert_eq!(round2(0.125), 0.13);
//! assert_eq!(format_amount(108.0), "108.00");
//! ```

/// Number of decimal places kept in rounded output fields.
pub const DECIMAL_PLACES: i32 = 2;

/// Rounds a value half-up to two decimal places.
///
/// A one-ulp nudge (`f64::EPSILON`) is added first so that decimal halves
/// stored just below the midpoint (`1.005` is `1.00499999...` in binary)
/// still round up, the way the browser client rounds.
///
/// ## Example
/// ```rust
/// use checkout_core::money::round2;
///
/// assert_eq!(round2(12.0), 12.0);
/// assert_eq!(round2(1.234), 1.23);
/// assert_eq!(round2(1.235), 1.24);
/// ```
pub fn round2(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMAL_PLACES);
    ((value + f64::EPSILON) * scale + 0.5).floor() / scale
}

/// Returns true for amounts the calculator accepts: finite and non-negative.
#[inline]
pub fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Renders an amount with exactly two decimals, for log fields.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_keeps_whole_values() {
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(12.0), 12.0);
        assert_eq!(round2(108.0), 108.0);
    }

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(1.005), 1.01);
    }

    #[test]
    fn test_round2_truncates_below_half() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(9.994), 9.99);
    }

    #[test]
    fn test_round2_float_noise() {
        // 0.1 + 0.2 = 0.30000000000000004
        assert_eq!(round2(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_is_valid_amount() {
        assert!(is_valid_amount(0.0));
        assert!(is_valid_amount(10.99));
        assert!(!is_valid_amount(-0.01));
        assert!(!is_valid_amount(f64::NAN));
        assert!(!is_valid_amount(f64::INFINITY));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.0), "12.00");
        assert_eq!(format_amount(0.5), "0.50");
    }
}
