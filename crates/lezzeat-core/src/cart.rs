//! Cart store
//!
//! Holds one line per menu item, in the order items were first added.
//! A line's quantity is always at least 1: setting it to 0 or decrementing a
//! single-quantity line removes the line.

use crate::error::CartError;
use crate::pricing::{CartTotals, TaxRate};
use crate::types::{ItemId, MenuItem, Money};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One item-and-quantity entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the menu item when it was added
    pub item: MenuItem,
    /// Quantity, never zero while the line exists
    pub quantity: u32,
}

impl CartLine {
    /// Item ID
    #[inline]
    #[must_use]
    pub fn item_id(&self) -> ItemId {
        self.item.id
    }

    /// Unit price
    #[inline]
    #[must_use]
    pub fn unit_price(&self) -> Money {
        self.item.price
    }

    /// `unit_price * quantity`
    #[inline]
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.item.price * self.quantity
    }
}

/// Shopping cart
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: IndexMap<ItemId, CartLine>,
}

impl CartStore {
    /// Create empty cart
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `item`; returns the line's new quantity
    pub fn add_item(&mut self, item: &MenuItem) -> u32 {
        let line = self.lines.entry(item.id).or_insert_with(|| CartLine {
            item: item.clone(),
            quantity: 0,
        });
        line.quantity = line.quantity.saturating_add(1);
        tracing::debug!(item = %item.id, quantity = line.quantity, "added to cart");
        line.quantity
    }

    /// Set a line's quantity, removing it at zero
    ///
    /// # Errors
    /// Returns error if the item has no line
    pub fn set_quantity(&mut self, id: ItemId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove_item(id);
        }
        let line = self.lines.get_mut(&id).ok_or(CartError::NotInCart(id))?;
        line.quantity = quantity;
        tracing::debug!(item = %id, quantity, "cart quantity set");
        Ok(())
    }

    /// `+` button
    ///
    /// # Errors
    /// Returns error if the item has no line
    pub fn increment(&mut self, id: ItemId) -> Result<u32, CartError> {
        let current = self.quantity_of(id);
        if current == 0 {
            return Err(CartError::NotInCart(id));
        }
        let next = current.saturating_add(1);
        self.set_quantity(id, next)?;
        Ok(next)
    }

    /// `-` button; a line at quantity 1 is removed
    ///
    /// # Errors
    /// Returns error if the item has no line
    pub fn decrement(&mut self, id: ItemId) -> Result<u32, CartError> {
        let current = self.quantity_of(id);
        if current == 0 {
            return Err(CartError::NotInCart(id));
        }
        self.set_quantity(id, current - 1)?;
        Ok(current - 1)
    }

    /// Delete a line
    ///
    /// # Errors
    /// Returns error if the item has no line
    pub fn remove_item(&mut self, id: ItemId) -> Result<(), CartError> {
        self.lines
            .shift_remove(&id)
            .ok_or(CartError::NotInCart(id))?;
        tracing::debug!(item = %id, "removed from cart");
        Ok(())
    }

    /// Lines in insertion order
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Line for `id`
    #[must_use]
    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.get(&id)
    }

    /// Quantity of `id`, 0 when absent
    #[must_use]
    pub fn quantity_of(&self, id: ItemId) -> u32 {
        self.lines.get(&id).map_or(0, |line| line.quantity)
    }

    /// Number of lines
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across lines
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    /// Sum of line totals
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lines.values().map(CartLine::line_total).sum()
    }

    /// Subtotal, tax and total at `rate`
    #[must_use]
    pub fn totals(&self, rate: TaxRate) -> CartTotals {
        CartTotals::from_subtotal(self.subtotal(), rate)
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn chai() -> MenuItem {
        MenuItem::new(5, "Masala Chai", 10, Category::Beverages)
    }

    fn dosa() -> MenuItem {
        MenuItem::new(6, "Dosa", 45, Category::Meals)
    }

    #[test]
    fn add_increments_existing_line() {
        let mut cart = CartStore::new();
        assert_eq!(cart.add_item(&chai()), 1);
        assert_eq!(cart.add_item(&chai()), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ItemId(5)), 2);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = CartStore::new();
        cart.add_item(&dosa());
        cart.add_item(&chai());
        cart.add_item(&dosa());
        let ids: Vec<_> = cart.lines().map(CartLine::item_id).collect();
        assert_eq!(ids, [ItemId(6), ItemId(5)]);
    }

    #[test]
    fn zero_quantity_removes_line() {
        let mut cart = CartStore::new();
        cart.add_item(&chai());
        cart.set_quantity(ItemId(5), 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn decrement_from_one_removes_line() {
        let mut cart = CartStore::new();
        cart.add_item(&chai());
        cart.add_item(&dosa());
        assert_eq!(cart.decrement(ItemId(5)), Ok(0));
        assert!(cart.line(ItemId(5)).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn unknown_lines_are_rejected() {
        let mut cart = CartStore::new();
        assert_eq!(cart.remove_item(ItemId(1)), Err(CartError::NotInCart(ItemId(1))));
        assert_eq!(cart.set_quantity(ItemId(1), 3), Err(CartError::NotInCart(ItemId(1))));
        assert_eq!(cart.increment(ItemId(1)), Err(CartError::NotInCart(ItemId(1))));
        assert_eq!(cart.decrement(ItemId(1)), Err(CartError::NotInCart(ItemId(1))));
    }

    #[test]
    fn subtotal_tracks_mutations() {
        let mut cart = CartStore::new();
        cart.add_item(&chai());
        cart.add_item(&dosa());
        assert_eq!(cart.subtotal(), Money::from_major(55));
        cart.set_quantity(ItemId(6), 3).unwrap();
        assert_eq!(cart.subtotal(), Money::from_major(145));
        assert_eq!(cart.item_count(), 4);
        cart.clear();
        assert_eq!(cart.subtotal(), Money::ZERO);
    }
}
