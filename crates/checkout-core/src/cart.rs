//! # Cart
//!
//! A request-scoped cart builder for callers that assemble a checkout item by
//! item instead of posting a whole payload.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add_item("Tea", 3.5, 2) ──────► new line, or quantity += 2             │
//! │                                                                         │
//! │  update_quantity("Tea", 5) ────► quantity = 5 (0 removes the line)      │
//! │                                                                         │
//! │  remove_item("Tea") ───────────► line removed                           │
//! │                                                                         │
//! │  checkout(0.2, Some(discount)) ► CheckoutRequest ─► calculator          │
//! │                                                                         │
//! │  NOTE: Cart is a plain value. There is no shared or global cart.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::calculator::calculate_breakdown;
use crate::discount::Discount;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{CheckoutBreakdown, CheckoutRequest, LineItem};
use crate::validation::{validate_item_name, validate_price, validate_quantity, validate_tax_rate};

/// An ordered collection of line items, unique by name.
///
/// ## Invariants
/// - Item names are unique (adding an existing name increases its quantity)
/// - The unit price is frozen when a name is first added
/// - Every quantity is > 0
///
/// A cart can be serialized for display but not deserialized: the only way to
/// fill one is through [`Cart::add_item`], which enforces the invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds an item or increases the quantity of an existing one.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::Cart;
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item("Tea", 3.5, 2).unwrap();
    /// cart.add_item("Tea", 3.5, 1).unwrap();
    ///
    /// assert_eq!(cart.item_count(), 1);
    /// assert_eq!(cart.total_quantity(), 3);
    /// ```
    pub fn add_item(&mut self, name: &str, price: f64, quantity: u64) -> CoreResult<()> {
        let index = self.position(name).unwrap_or(self.items.len());
        validate_item_name(index, name)?;
        validate_price(index, price)?;
        validate_quantity(index, quantity)?;

        if let Some(item) = self.items.get_mut(index) {
            item.quantity = item
                .quantity
                .checked_add(quantity)
                .ok_or(ValidationError::InvalidItemQuantity { index })?;
            return Ok(());
        }

        self.items.push(LineItem::new(name, price, quantity));
        Ok(())
    }

    /// Sets the quantity of an item. A quantity of 0 removes it.
    pub fn update_quantity(&mut self, name: &str, quantity: u64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(name);
        }

        let index = self
            .position(name)
            .ok_or_else(|| CoreError::ItemNotInCart(name.to_string()))?;
        self.items[index].quantity = quantity;
        Ok(())
    }

    /// Removes an item by name.
    pub fn remove_item(&mut self, name: &str) -> CoreResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| CoreError::ItemNotInCart(name.to_string()))?;
        self.items.remove(index);
        Ok(())
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of distinct items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Unrounded sum of line totals.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Builds a validated checkout request, resolving `discount` against the
    /// current subtotal.
    pub fn to_request(
        &self,
        tax_rate: f64,
        discount: Option<Discount>,
    ) -> CoreResult<CheckoutRequest> {
        if self.is_empty() {
            return Err(ValidationError::EmptyItems.into());
        }
        validate_tax_rate(tax_rate)?;

        let discount = discount.unwrap_or_default().amount_for(self.subtotal());

        Ok(CheckoutRequest {
            items: self.items.clone(),
            tax_rate,
            discount,
        })
    }

    /// Runs the calculator over the cart contents.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{Cart, Discount};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item("A", 100.0, 1).unwrap();
    ///
    /// let discount = Discount::percentage(10.0).unwrap();
    /// let breakdown = cart.checkout(0.2, Some(discount)).unwrap();
    /// assert_eq!(breakdown.applied_discount, 10.0);
    /// assert_eq!(breakdown.total, 108.0);
    /// ```
    pub fn checkout(
        &self,
        tax_rate: f64,
        discount: Option<Discount>,
    ) -> CoreResult<CheckoutBreakdown> {
        let request = self.to_request(tax_rate, discount)?;
        Ok(calculate_breakdown(&request))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add_item("Coffee", 9.99, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert!((cart.subtotal() - 19.98).abs() < 1e-9);
    }

    #[test]
    fn test_cart_add_same_name_increases_quantity_and_keeps_price() {
        let mut cart = Cart::new();
        cart.add_item("Coffee", 9.99, 2).unwrap();
        cart.add_item("Coffee", 12.0, 3).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0], LineItem::new("Coffee", 9.99, 5));
    }

    #[test]
    fn test_cart_add_rejects_invalid_fields() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_item("", 1.0, 1),
            Err(CoreError::Validation(ValidationError::InvalidItemName { index: 0 }))
        );
        assert_eq!(
            cart.add_item("A", -1.0, 1),
            Err(CoreError::Validation(ValidationError::InvalidItemPrice { index: 0 }))
        );
        assert_eq!(
            cart.add_item("A", 1.0, 0),
            Err(CoreError::Validation(ValidationError::InvalidItemQuantity { index: 0 }))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item("Tea", 3.0, 1).unwrap();

        cart.update_quantity("Tea", 4).unwrap();
        assert_eq!(cart.total_quantity(), 4);

        cart.update_quantity("Tea", 0).unwrap();
        assert!(cart.is_empty());

        assert_eq!(
            cart.update_quantity("Tea", 1),
            Err(CoreError::ItemNotInCart("Tea".to_string()))
        );
    }

    #[test]
    fn test_cart_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add_item("A", 1.0, 1).unwrap();
        cart.add_item("B", 2.0, 1).unwrap();

        cart.remove_item("A").unwrap();
        assert_eq!(cart.items()[0].name, "B");
        assert!(cart.remove_item("A").is_err());

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_checkout_matches_payload_path() {
        let mut cart = Cart::new();
        cart.add_item("A", 10.0, 2).unwrap();
        cart.add_item("B", 20.0, 3).unwrap();
        cart.add_item("C", 5.0, 1).unwrap();

        let discount = Discount::fixed(5.0).unwrap();
        let breakdown = cart.checkout(0.1, Some(discount)).unwrap();
        assert_eq!(breakdown.subtotal, 85.0);
        assert_eq!(breakdown.after_discount, 80.0);
        assert_eq!(breakdown.tax_amount, 8.0);
        assert_eq!(breakdown.total, 88.0);
    }

    #[test]
    fn test_cart_checkout_without_discount() {
        let mut cart = Cart::new();
        cart.add_item("A", 10.0, 1).unwrap();

        let breakdown = cart.checkout(0.2, None).unwrap();
        assert_eq!(breakdown.applied_discount, 0.0);
        assert_eq!(breakdown.total, 12.0);
    }

    #[test]
    fn test_cart_checkout_below_discount_minimum() {
        let mut cart = Cart::new();
        cart.add_item("A", 20.0, 2).unwrap();

        let discount = Discount::fixed(10.0)
            .unwrap()
            .with_min_amount(50.0)
            .unwrap();
        let breakdown = cart.checkout(0.2, Some(discount.clone())).unwrap();
        assert_eq!(breakdown.applied_discount, 0.0);
        assert_eq!(breakdown.total, 48.0);

        cart.add_item("A", 20.0, 1).unwrap();
        let breakdown = cart.checkout(0.2, Some(discount)).unwrap();
        assert_eq!(breakdown.applied_discount, 10.0);
        assert_eq!(breakdown.total, 60.0);
    }

    #[test]
    fn test_empty_cart_checkout_fails() {
        let cart = Cart::new();
        assert_eq!(
            cart.checkout(0.2, None),
            Err(CoreError::Validation(ValidationError::EmptyItems))
        );
    }

    #[test]
    fn test_cart_checkout_rejects_negative_tax_rate() {
        let mut cart = Cart::new();
        cart.add_item("A", 10.0, 1).unwrap();
        assert_eq!(
            cart.checkout(-0.2, None),
            Err(CoreError::Validation(ValidationError::InvalidTaxRate))
        );
    }
}
