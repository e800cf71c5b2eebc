//! Cart reducer.
//!
//! A [`Cart`] is an ordered list of line items with at most one entry per
//! product. Quantities never drop below one; an item leaves the cart only
//! through [`Cart::remove`]. Totals are derived from the items on every call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{ProductId, round_money};

/// A product together with how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    quantity: u32,
}

impl CartItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.times(self.quantity)
    }
}

/// Ordered collection of cart line items, keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// Bumps the existing line if the product is already in the cart,
    /// otherwise appends a new line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.id() == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem::new(product.clone())),
        }
    }

    /// Remove the line for `product_id`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != product_id);
        self.items.len() != before
    }

    /// Shift the quantity of `product_id` by `delta`, clamped to at least 1.
    ///
    /// Returns the new quantity, or `None` if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> Option<u32> {
        let item = self.items.iter_mut().find(|item| item.id() == product_id)?;
        let next = i64::from(item.quantity).saturating_add(delta);
        item.quantity = u32::try_from(next.max(1)).unwrap_or(u32::MAX);
        Some(item.quantity)
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of price times quantity, rounded to cents.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        round_money(self.items.iter().map(CartItem::line_total).sum())
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == product_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: i32) -> Product {
        Catalog::builtin().get(ProductId::new(id)).unwrap().clone()
    }

    fn quantities(cart: &Cart) -> Vec<(i32, u32)> {
        cart.items()
            .iter()
            .map(|item| (item.id().as_i32(), item.quantity()))
            .collect()
    }

    #[test]
    fn test_repeated_add_keeps_one_line() {
        let headphones = product(1);
        for calls in 1..=5u32 {
            let mut cart = Cart::new();
            for _ in 0..calls {
                cart.add(&headphones);
            }
            assert_eq!(cart.len(), 1);
            assert_eq!(cart.get(headphones.id).unwrap().quantity(), calls);
        }
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut cart = Cart::new();
        cart.add(&product(3));
        cart.add(&product(1));
        cart.add(&product(3));
        cart.add(&product(2));

        assert_eq!(quantities(&cart), vec![(3, 2), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_add_bump_leaves_product_fields() {
        let watch = product(2);
        let mut cart = Cart::new();
        cart.add(&watch);
        cart.add(&watch);

        assert_eq!(cart.get(watch.id).unwrap().product, watch);
    }

    #[test]
    fn test_remove_keeps_other_lines() {
        let mut cart = Cart::new();
        cart.add(&product(1));
        cart.add(&product(2));
        cart.add(&product(2));

        assert!(cart.remove(ProductId::new(1)));
        assert_eq!(quantities(&cart), vec![(2, 2)]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(4));
        cart.add(&product(5));
        cart.add(&product(4));
        let before = cart.clone();

        assert!(!cart.remove(ProductId::new(9)));
        assert_eq!(cart, before);

        let mut empty = Cart::new();
        assert!(!empty.remove(ProductId::new(1)));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        let mouse = product(5);
        for _ in 0..3 {
            cart.add(&mouse);
        }

        assert_eq!(cart.update_quantity(mouse.id, -100), Some(1));
        assert_eq!(cart.update_quantity(mouse.id, -1), Some(1));
        assert_eq!(cart.get(mouse.id).unwrap().quantity(), 1);
    }

    #[test]
    fn test_update_quantity_any_delta() {
        let mut cart = Cart::new();
        let hub = product(6);
        cart.add(&hub);

        assert_eq!(cart.update_quantity(hub.id, 1), Some(2));
        assert_eq!(cart.update_quantity(hub.id, 10), Some(12));
        assert_eq!(cart.update_quantity(hub.id, -5), Some(7));
        assert_eq!(cart.update_quantity(hub.id, 0), Some(7));
    }

    #[test]
    fn test_update_quantity_extremes() {
        let mut cart = Cart::new();
        let charger = product(7);
        cart.add(&charger);

        assert_eq!(cart.update_quantity(charger.id, i64::MIN), Some(1));
        assert_eq!(
            cart.update_quantity(charger.id, i64::from(i32::MAX)),
            Some(1 + i32::MAX.unsigned_abs())
        );
        assert_eq!(cart.update_quantity(charger.id, i64::MAX), Some(u32::MAX));
    }

    #[test]
    fn test_update_quantity_beyond_i32_clamps_to_one() {
        let mut cart = Cart::new();
        let headphones = product(1);
        for _ in 0..3 {
            cart.add(&headphones);
        }

        assert_eq!(cart.update_quantity(headphones.id, -10_000_000_000), Some(1));
        assert_eq!(cart.get(headphones.id).unwrap().quantity(), 1);
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(8));
        let before = cart.clone();

        assert_eq!(cart.update_quantity(ProductId::new(1), 1), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_total_items() {
        let mut cart = Cart::new();
        assert_eq!(cart.total_items(), 0);

        let headphones = product(1);
        for _ in 0..3 {
            cart.add(&headphones);
        }
        assert_eq!(cart.total_items(), 3);

        cart.add(&product(9));
        assert_eq!(cart.total_items(), 4);
    }

    #[test]
    fn test_total_price() {
        let mut cart = Cart::new();
        assert_eq!(cart.total_price(), Decimal::ZERO);

        let stand = product(3);
        cart.add(&product(1));
        cart.add(&stand);
        cart.add(&stand);

        assert_eq!(cart.total_price(), Decimal::new(199_97, 2));
    }

    #[test]
    fn test_totals_follow_every_mutation() {
        let mut cart = Cart::new();
        let keyboard = product(4);
        cart.add(&keyboard);
        cart.update_quantity(keyboard.id, 2);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Decimal::new(449_97, 2));

        cart.remove(keyboard.id);
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_cart_round_trips_through_session_json() {
        let mut cart = Cart::new();
        cart.add(&product(2));
        cart.add(&product(2));

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
