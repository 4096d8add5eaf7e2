//! # Checkout Calculator
//!
//! The arithmetic at the center of the service.
//!
//! ## Calculation Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items: [{A, 10, 2}, {B, 20, 3}, {C, 5, 1}]   discount: 5   tax: 10%   │
//! │                                                                         │
//! │  1. subtotal        = Σ price × quantity          = 20 + 60 + 5 = 85    │
//! │  2. appliedDiscount = clamp(discount, 0, subtotal)             = 5     │
//! │  3. afterDiscount   = subtotal − appliedDiscount               = 80    │
//! │  4. taxAmount       = round2(afterDiscount × taxRate)          = 8     │
//! │  5. total           = round2(afterDiscount + taxAmount)        = 88    │
//! │                                                                         │
//! │  Steps 1-3 keep full f64 precision; rounding happens on output only.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input is assumed to be validated; nothing here can fail.

use crate::money::round2;
use crate::types::{CheckoutBreakdown, CheckoutRequest, CheckoutResult};

/// Computes the checkout result for a validated request.
///
/// ## Example
/// ```rust
/// use checkout_core::{calculate_checkout, CheckoutRequest, LineItem};
///
/// let request = CheckoutRequest {
///     items: vec![LineItem::new("A", 10.0, 1)],
///     tax_rate: 0.2,
///     discount: 0.0,
/// };
///
/// assert_eq!(calculate_checkout(&request).total, 12.0);
/// ```
pub fn calculate_checkout(request: &CheckoutRequest) -> CheckoutResult {
    calculate_breakdown(request).into()
}

/// Computes every intermediate value of a checkout.
pub fn calculate_breakdown(request: &CheckoutRequest) -> CheckoutBreakdown {
    let subtotal: f64 = request.items.iter().map(|item| item.line_total()).sum();
    let applied_discount = clamp_discount(request.discount, subtotal);
    let after_discount = subtotal - applied_discount;

    let tax_amount = round2(after_discount * request.tax_rate);
    let total = round2(after_discount + tax_amount);

    CheckoutBreakdown {
        subtotal,
        applied_discount,
        after_discount: round2(after_discount),
        tax_amount,
        total,
    }
}

/// Caps a discount to `[0, subtotal]` so the discounted amount never goes
/// negative.
#[inline]
fn clamp_discount(discount: f64, subtotal: f64) -> f64 {
    discount.max(0.0).min(subtotal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineItem;

    fn request(items: Vec<LineItem>, tax_rate: f64, discount: f64) -> CheckoutRequest {
        CheckoutRequest {
            items,
            tax_rate,
            discount,
        }
    }

    #[test]
    fn test_single_item_with_tax() {
        let result = calculate_checkout(&request(vec![LineItem::new("A", 10.0, 1)], 0.2, 0.0));
        assert_eq!(result.total_before_tax, 10.0);
        assert_eq!(result.tax_amount, 2.0);
        assert_eq!(result.total, 12.0);
    }

    #[test]
    fn test_discount_before_tax() {
        let result = calculate_checkout(&request(vec![LineItem::new("A", 100.0, 1)], 0.2, 10.0));
        assert_eq!(result.total_before_tax, 90.0);
        assert_eq!(result.tax_amount, 18.0);
        assert_eq!(result.total, 108.0);
    }

    #[test]
    fn test_multiple_items() {
        let items = vec![
            LineItem::new("A", 10.0, 2),
            LineItem::new("B", 20.0, 3),
            LineItem::new("C", 5.0, 1),
        ];
        let result = calculate_checkout(&request(items, 0.1, 5.0));
        assert_eq!(result.total_before_tax, 80.0);
        assert_eq!(result.tax_amount, 8.0);
        assert_eq!(result.total, 88.0);
    }

    #[test]
    fn test_discount_larger_than_subtotal_is_capped() {
        let breakdown =
            calculate_breakdown(&request(vec![LineItem::new("A", 10.0, 1)], 0.2, 50.0));
        assert_eq!(breakdown.applied_discount, 10.0);

        let result: CheckoutResult = breakdown.into();
        assert_eq!(result.total_before_tax, 0.0);
        assert_eq!(result.tax_amount, 0.0);
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_zero_tax() {
        let result = calculate_checkout(&request(vec![LineItem::new("A", 19.99, 3)], 0.0, 2.5));
        assert_eq!(result.tax_amount, 0.0);
        assert_eq!(result.total, result.total_before_tax);
        assert_eq!(result.total, 57.47);
    }

    #[test]
    fn test_rounding_only_on_outputs() {
        // 3 × 0.333 = 0.999, taxed at 0.5 → 0.4995 → 0.50
        let breakdown = calculate_breakdown(&request(vec![LineItem::new("A", 0.333, 3)], 0.5, 0.0));
        assert!((breakdown.subtotal - 0.999).abs() < 1e-12);
        assert_eq!(breakdown.after_discount, 1.0);
        assert_eq!(breakdown.tax_amount, 0.5);
        assert_eq!(breakdown.total, 1.5);
    }

    #[test]
    fn test_free_items() {
        let result = calculate_checkout(&request(vec![LineItem::new("Sample", 0.0, 5)], 0.2, 0.0));
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_same_input_same_output() {
        let req = request(
            vec![LineItem::new("A", 12.34, 7), LineItem::new("B", 0.99, 11)],
            0.0825,
            3.21,
        );
        let first = calculate_checkout(&req);
        for _ in 0..10 {
            assert_eq!(calculate_checkout(&req), first);
        }
    }

    #[test]
    fn test_total_matches_formula_and_is_non_negative() {
        let cases = [
            (vec![LineItem::new("A", 4.99, 3)], 0.07, 1.0),
            (vec![LineItem::new("A", 0.01, 1)], 0.2, 0.0),
            (vec![LineItem::new("A", 250.0, 2), LineItem::new("B", 1.1, 9)], 0.15, 600.0),
            (vec![LineItem::new("A", 3.0, 1)], 0.0, 3.0),
        ];

        for (items, tax_rate, discount) in cases {
            let req = request(items, tax_rate, discount);
            let breakdown = calculate_breakdown(&req);
            let after = breakdown.subtotal - breakdown.applied_discount;
            let expected_tax = round2(after * tax_rate);

            let result = calculate_checkout(&req);
            assert_eq!(result.tax_amount, expected_tax);
            assert_eq!(result.total, round2(after + expected_tax));
            assert!(result.total >= 0.0);
        }
    }

    #[test]
    fn test_overflow_yields_non_finite_result() {
        let result = calculate_checkout(&request(vec![LineItem::new("A", f64::MAX, 2)], 0.0, 0.0));
        assert!(!result.is_finite());
    }
}
