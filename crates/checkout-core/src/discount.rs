//! # Discounts
//!
//! Fixed-amount and percentage discounts, resolved to a flat amount before
//! the calculator runs.
//!
//! ## Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal < min_amount?  ──yes──► 0                                     │
//! │          │ no                                                           │
//! │          ▼                                                              │
//! │  Fixed(v)       ──► min(v, subtotal)                                    │
//! │  Percentage(p)  ──► subtotal × p / 100                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The HTTP endpoint only accepts a flat `discount`; [`Discount`] exists for
//! library callers building a checkout through [`crate::cart::Cart`].

use serde::Serialize;

use crate::error::ValidationError;
use crate::money::is_valid_amount;
use crate::validation::{validate_discount, ValidationResult};

/// Upper bound for a percentage discount.
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;

/// How a discount value is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DiscountKind {
    /// Flat amount off, capped at the subtotal.
    Fixed(f64),
    /// Percent of the subtotal (10.0 = 10%).
    Percentage(f64),
}

/// A discount applied to a cart subtotal.
///
/// Built only through [`Discount::fixed`] and [`Discount::percentage`], so
/// every value and threshold has been validated.
///
/// ## Example
/// ```rust
/// use checkout_core::Discount;
///
/// let discount = Discount::percentage(10.0)
///     .and_then(|d| d.with_min_amount(50.0))
///     .and_then(|d| d.with_code("SPRING10"))
///     .unwrap();
///
/// assert_eq!(discount.amount_for(40.0), 0.0);
/// assert_eq!(discount.amount_for(200.0), 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    kind: DiscountKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    min_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl Discount {
    /// Creates a fixed discount.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::Discount;
    ///
    /// assert!(Discount::fixed(5.0).is_ok());
    /// assert!(Discount::fixed(-5.0).is_err());
    /// ```
    pub fn fixed(amount: f64) -> ValidationResult<Self> {
        validate_discount(amount)?;
        Ok(Self::from_kind(DiscountKind::Fixed(amount)))
    }

    /// Creates a percentage discount.
    ///
    /// ## Rules
    /// - Must be finite
    /// - Must be between 0 and 100 inclusive
    pub fn percentage(percent: f64) -> ValidationResult<Self> {
        if !is_valid_amount(percent) || percent > MAX_DISCOUNT_PERCENT {
            return Err(ValidationError::InvalidDiscountPercentage);
        }
        Ok(Self::from_kind(DiscountKind::Percentage(percent)))
    }

    /// Only applies the discount to subtotals of at least `min_amount`.
    ///
    /// ## Rules
    /// - Must be finite
    /// - Must be non-negative
    pub fn with_min_amount(mut self, min_amount: f64) -> ValidationResult<Self> {
        if !is_valid_amount(min_amount) {
            return Err(ValidationError::InvalidDiscountMinAmount);
        }
        self.min_amount = Some(min_amount);
        Ok(self)
    }

    /// Attaches the code a customer entered to claim the discount.
    pub fn with_code(mut self, code: impl Into<String>) -> ValidationResult<Self> {
        let code = code.into();
        if code.is_empty() {
            return Err(ValidationError::InvalidDiscountCode);
        }
        self.code = Some(code);
        Ok(self)
    }

    pub fn kind(&self) -> DiscountKind {
        self.kind
    }

    pub fn min_amount(&self) -> Option<f64> {
        self.min_amount
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the amount this discount takes off `subtotal`.
    ///
    /// Zero below the minimum amount. Otherwise never more than `subtotal`,
    /// never negative.
    pub fn amount_for(&self, subtotal: f64) -> f64 {
        let subtotal = subtotal.max(0.0);
        if self.min_amount.is_some_and(|min| subtotal < min) {
            return 0.0;
        }

        match self.kind {
            DiscountKind::Fixed(amount) => amount.max(0.0).min(subtotal),
            DiscountKind::Percentage(percent) => {
                let percent = percent.clamp(0.0, MAX_DISCOUNT_PERCENT);
                subtotal * (percent / 100.0)
            }
        }
    }

    fn from_kind(kind: DiscountKind) -> Self {
        Discount {
            kind,
            min_amount: None,
            code: None,
        }
    }
}

impl Default for Discount {
    fn default() -> Self {
        Self::from_kind(DiscountKind::Fixed(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fixed_discount_capped_at_subtotal() {
        let discount = Discount::fixed(15.0).unwrap();
        assert_eq!(discount.amount_for(100.0), 15.0);
        assert_eq!(discount.amount_for(10.0), 10.0);
    }

    #[test]
    fn test_percentage_discount() {
        let discount = Discount::percentage(10.0).unwrap();
        assert_eq!(discount.amount_for(200.0), 20.0);
        let full = Discount::percentage(100.0).unwrap();
        assert_eq!(full.amount_for(42.0), 42.0);
    }

    #[test]
    fn test_constructors_reject_invalid_values() {
        assert_eq!(Discount::fixed(-1.0), Err(ValidationError::InvalidDiscount));
        assert_eq!(
            Discount::percentage(120.0),
            Err(ValidationError::InvalidDiscountPercentage)
        );
        assert_eq!(
            Discount::percentage(-5.0),
            Err(ValidationError::InvalidDiscountPercentage)
        );
        assert!(Discount::percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_min_amount_threshold() {
        let discount = Discount::fixed(5.0)
            .unwrap()
            .with_min_amount(50.0)
            .unwrap();

        assert_eq!(discount.amount_for(49.99), 0.0);
        assert_eq!(discount.amount_for(50.0), 5.0);
        assert_eq!(discount.amount_for(80.0), 5.0);
    }

    #[test]
    fn test_min_amount_applies_to_percentage() {
        let discount = Discount::percentage(10.0)
            .unwrap()
            .with_min_amount(100.0)
            .unwrap();

        assert_eq!(discount.amount_for(90.0), 0.0);
        assert_eq!(discount.amount_for(100.0), 10.0);
    }

    #[test]
    fn test_invalid_min_amount_rejected() {
        let base = Discount::fixed(5.0).unwrap();
        assert_eq!(
            base.clone().with_min_amount(-1.0),
            Err(ValidationError::InvalidDiscountMinAmount)
        );
        assert_eq!(
            base.with_min_amount(f64::INFINITY),
            Err(ValidationError::InvalidDiscountMinAmount)
        );
    }

    #[test]
    fn test_code() {
        let discount = Discount::fixed(5.0).unwrap().with_code("WELCOME5").unwrap();
        assert_eq!(discount.code(), Some("WELCOME5"));

        assert_eq!(
            Discount::fixed(5.0).unwrap().with_code(""),
            Err(ValidationError::InvalidDiscountCode)
        );
    }

    #[test]
    fn test_default_is_no_discount() {
        let discount = Discount::default();
        assert_eq!(discount.amount_for(50.0), 0.0);
        assert_eq!(discount.min_amount(), None);
        assert_eq!(discount.code(), None);
    }

    #[test]
    fn test_serde_shape() {
        let discount = Discount::percentage(10.0)
            .unwrap()
            .with_min_amount(50.0)
            .unwrap();
        assert_eq!(
            serde_json::to_value(&discount).unwrap(),
            json!({ "kind": { "type": "percentage", "value": 10.0 }, "minAmount": 50.0 })
        );
        assert_eq!(discount.kind(), DiscountKind::Percentage(10.0));
    }
}
