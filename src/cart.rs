//! Cart
//!
//! An ordered list of [`CartItem`]s. Items are stored under generated
//! [`CartItemKey`]s so a key stays valid while other items are removed; the
//! public operations are also available by position, matching the order the
//! items are displayed in.

use slotmap::{SlotMap, new_key_type};
use tracing::{debug, trace};

use crate::items::CartItem;

new_key_type! {
    /// Cart Item Key
    pub struct CartItemKey;
}

/// Cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: SlotMap<CartItemKey, CartItem>,
    order: Vec<CartItemKey>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item after every existing item.
    pub fn push(&mut self, item: CartItem) -> CartItemKey {
        debug!(name = item.name(), unit_price = item.unit_price(), "adding item to cart");

        let key = self.items.insert(item);
        self.order.push(key);

        key
    }

    /// Add one unit to the item at `index`.
    ///
    /// Returns `false` if there is no such item or it cannot hold another unit.
    pub fn increment(&mut self, index: usize) -> bool {
        self.key_at(index)
            .is_some_and(|key| self.increment_key(key))
    }

    /// Remove one unit from the item at `index`.
    ///
    /// Returns `false`, leaving the cart untouched, if there is no such item or
    /// it is down to a single unit.
    pub fn decrement(&mut self, index: usize) -> bool {
        self.key_at(index)
            .is_some_and(|key| self.decrement_key(key))
    }

    /// Delete the item at `index`; later items move up one position.
    pub fn remove(&mut self, index: usize) -> Option<CartItem> {
        self.key_at(index).and_then(|key| self.remove_key(key))
    }

    /// Add one unit to the item stored under `key`.
    ///
    /// Returns `false` if there is no such item or its quantity is already [`u32::MAX`].
    pub fn increment_key(&mut self, key: CartItemKey) -> bool {
        let Some(item) = self.items.get_mut(key) else {
            trace!(?key, "increment ignored, no such item");
            return false;
        };

        if !item.increment() {
            trace!(?key, "increment ignored, item is at the largest quantity");
            return false;
        }

        debug!(?key, quantity = item.quantity().get(), "incremented item");

        true
    }

    /// Remove one unit from the item stored under `key`, never going below one.
    pub fn decrement_key(&mut self, key: CartItemKey) -> bool {
        let Some(item) = self.items.get_mut(key) else {
            trace!(?key, "decrement ignored, no such item");
            return false;
        };

        if !item.decrement() {
            trace!(?key, "decrement ignored, item is at a single unit");
            return false;
        }

        debug!(?key, quantity = item.quantity().get(), "decremented item");

        true
    }

    /// Delete the item stored under `key`.
    pub fn remove_key(&mut self, key: CartItemKey) -> Option<CartItem> {
        let item = self.items.remove(key)?;
        self.order.retain(|&existing| existing != key);

        debug!(?key, name = item.name(), "removed item from cart");

        Some(item)
    }

    /// Key of the item at `index`.
    pub fn key_at(&self, index: usize) -> Option<CartItemKey> {
        self.order.get(index).copied()
    }

    /// Position of the item stored under `key`.
    pub fn position(&self, key: CartItemKey) -> Option<usize> {
        self.order.iter().position(|&existing| existing == key)
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.key_at(index).and_then(|key| self.items.get(key))
    }

    /// Item stored under `key`.
    pub fn get_key(&self, key: CartItemKey) -> Option<&CartItem> {
        self.items.get(key)
    }

    /// Iterate over items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.entries().map(|(_, item)| item)
    }

    /// Iterate over keys and items in display order.
    pub fn entries(&self) -> impl Iterator<Item = (CartItemKey, &CartItem)> {
        self.order
            .iter()
            .filter_map(|&key| self.items.get(key).map(|item| (key, item)))
    }

    /// Sum of unit price times quantity over every item, saturating at [`u64::MAX`].
    pub fn total(&self) -> u64 {
        self.iter()
            .fold(0_u64, |total, item| total.saturating_add(item.line_total()))
    }

    /// Number of units across every item.
    pub fn unit_count(&self) -> u64 {
        self.iter()
            .fold(0_u64, |count, item| {
                count.saturating_add(u64::from(item.quantity().get()))
            })
    }

    /// Get the number of items in the cart.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        let mut cart = Cart::new();

        for item in iter {
            cart.push(item);
        }

        cart
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::items::Quantity;

    use super::*;

    fn test_cart() -> Cart {
        [
            CartItem::new("Apple", "", 10),
            CartItem::new("Bread", "Sourdough", 5),
            CartItem::new("Apple", "", 10),
        ]
        .into_iter()
        .collect()
    }

    fn quantity(cart: &Cart, index: usize) -> Option<u32> {
        cart.get(index).map(|item| item.quantity().get())
    }

    #[test]
    fn push_preserves_insertion_order_and_duplicates() {
        let cart = test_cart();

        let names: Vec<&str> = cart.iter().map(CartItem::name).collect();

        assert_eq!(names, ["Apple", "Bread", "Apple"]);
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn increment_has_no_small_upper_bound() {
        let mut cart = test_cart();

        for _ in 0..100 {
            assert!(cart.increment(1));
        }

        assert_eq!(quantity(&cart, 1), Some(101));
        assert_eq!(quantity(&cart, 0), Some(1));
    }

    #[test]
    fn increment_at_max_quantity_is_unchanged() {
        let max = Quantity::new(u32::MAX).unwrap_or_default();
        let mut cart: Cart = [CartItem::new("Rice", "", 1).with_quantity(max)]
            .into_iter()
            .collect();

        assert!(!cart.increment(0));
        assert_eq!(quantity(&cart, 0), Some(u32::MAX));
    }

    #[test]
    fn decrement_stops_at_one() {
        let mut cart = test_cart();

        assert!(cart.increment(0));
        assert!(cart.decrement(0));
        assert!(!cart.decrement(0));

        assert_eq!(quantity(&cart, 0), Some(1));
    }

    #[test]
    fn remove_shifts_later_items_left() -> TestResult {
        let mut cart = test_cart();

        let removed = cart.remove(0).ok_or("expected an item")?;

        assert_eq!(removed.name(), "Apple");
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(0).map(CartItem::name), Some("Bread"));
        assert_eq!(cart.get(1).map(CartItem::name), Some("Apple"));

        Ok(())
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut cart = test_cart();

        assert!(!cart.increment(3));
        assert!(!cart.decrement(3));
        assert!(cart.remove(3).is_none());
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn keys_are_stable_across_removal() -> TestResult {
        let mut cart = test_cart();

        let bread = cart.key_at(1).ok_or("expected a key")?;

        cart.remove(0);

        assert_eq!(cart.position(bread), Some(0));
        assert_eq!(cart.get_key(bread).map(CartItem::name), Some("Bread"));
        assert!(cart.increment_key(bread));
        assert_eq!(quantity(&cart, 0), Some(2));

        Ok(())
    }

    #[test]
    fn removed_key_is_dead() -> TestResult {
        let mut cart = test_cart();

        let key = cart.key_at(2).ok_or("expected a key")?;

        assert!(cart.remove_key(key).is_some());
        assert!(cart.remove_key(key).is_none());
        assert!(!cart.increment_key(key));
        assert!(!cart.decrement_key(key));
        assert_eq!(cart.position(key), None);

        Ok(())
    }

    #[test]
    fn total_is_sum_of_line_totals() {
        let cart: Cart = [
            CartItem::new("A", "", 10).with_quantity(Quantity::new(2).unwrap_or_default()),
            CartItem::new("B", "", 5).with_quantity(Quantity::new(3).unwrap_or_default()),
        ]
        .into_iter()
        .collect();

        assert_eq!(cart.total(), 35);
        assert_eq!(cart.unit_count(), 5);
    }

    #[test]
    fn total_of_empty_cart_is_zero() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn total_saturates() {
        let cart: Cart = [
            CartItem::new("A", "", u64::MAX),
            CartItem::new("B", "", 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(cart.total(), u64::MAX);
    }
}
