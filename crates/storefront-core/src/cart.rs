//! Cart Store
//!
//! Owns the ordered list of cart lines. Insertion order is display order.
//! Lines are addressed by their current position; positions shift down by
//! one when an earlier line is removed, so callers re-resolve indices from
//! a fresh render after every mutation. Each line also carries a stable
//! [`LineId`] that [`CartStore::position`] maps back to the current index.
//!
//! The total is never cached: [`CartStore::total`] recomputes
//! Σ(unit price × quantity) over the current lines on every call.

use serde::{Deserialize, Serialize};
use storefront_types::{LineId, MenuItem, Price, PriceError};
use tracing::debug;

use crate::error::CartError;

/// One cart entry with its own quantity.
///
/// Two lines may share a title; each is adjusted independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: LineId,
    pub title: String,
    pub unit_price: Price,
    pub image_ref: String,
    /// Always at least 1
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// In-memory shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new line with quantity 1.
    ///
    /// Adding an item that is already in the cart creates a second line.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        unit_price: Price,
        image_ref: impl Into<String>,
    ) -> LineId {
        let line = CartLine {
            id: LineId::generate(),
            title: title.into(),
            unit_price,
            image_ref: image_ref.into(),
            quantity: 1,
        };
        let id = line.id;

        debug!(
            line = %id,
            title = %line.title,
            unit_price = line.unit_price.units(),
            index = self.lines.len(),
            "Added cart line"
        );

        self.lines.push(line);
        id
    }

    /// Add a menu entry, parsing its display price with `glyph`.
    pub fn add_item(&mut self, item: &MenuItem, glyph: &str) -> Result<LineId, PriceError> {
        let unit_price = item.price(glyph)?;
        Ok(self.add(item.title.clone(), unit_price, item.image_ref.clone()))
    }

    /// Raise a line's quantity by one. Returns the new quantity.
    pub fn increment(&mut self, index: usize) -> Result<u32, CartError> {
        let line = self.line_mut(index)?;
        line.quantity = line.quantity.saturating_add(1);
        debug!(index, quantity = line.quantity, "Incremented cart line");
        Ok(line.quantity)
    }

    /// Lower a line's quantity by one, stopping at 1. Returns the new
    /// quantity. A line is never removed by decrementing.
    pub fn decrement(&mut self, index: usize) -> Result<u32, CartError> {
        let line = self.line_mut(index)?;
        if line.quantity > 1 {
            line.quantity -= 1;
            debug!(index, quantity = line.quantity, "Decremented cart line");
        }
        Ok(line.quantity)
    }

    /// Delete a line. Every later line moves down one position.
    pub fn remove(&mut self, index: usize) -> Result<CartLine, CartError> {
        self.check_index(index)?;
        let line = self.lines.remove(index);
        debug!(index, line = %line.id, remaining = self.lines.len(), "Removed cart line");
        Ok(line)
    }

    pub fn clear(&mut self) {
        debug!(lines = self.lines.len(), "Cleared cart");
        self.lines.clear();
    }

    /// Σ(unit price × quantity) over the current lines.
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Current index of the line with this id.
    pub fn position(&self, id: LineId) -> Option<usize> {
        self.lines.iter().position(|line| line.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&CartLine> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines (not units).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    fn check_index(&self, index: usize) -> Result<(), CartError> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(CartError::LineOutOfRange {
                index,
                len: self.lines.len(),
            })
        }
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut CartLine, CartError> {
        let len = self.lines.len();
        self.lines
            .get_mut(index)
            .ok_or(CartError::LineOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_types::NAIRA;

    fn jollof(cart: &mut CartStore) -> LineId {
        cart.add("Jollof Rice", Price::new(3500), "images/jollof-rice.jpg")
    }

    #[test]
    fn test_add_starts_at_one() {
        let mut cart = CartStore::new();
        jollof(&mut cart);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(0).unwrap().quantity, 1);
        assert_eq!(cart.total(), Price::new(3500));
    }

    #[test]
    fn test_duplicate_adds_are_separate_lines() {
        let mut cart = CartStore::new();
        let a = jollof(&mut cart);
        let b = jollof(&mut cart);
        assert_ne!(a, b);
        assert_eq!(cart.len(), 2);

        cart.increment(1).unwrap();
        assert_eq!(cart.get(0).unwrap().quantity, 1);
        assert_eq!(cart.get(1).unwrap().quantity, 2);
        assert_eq!(cart.total(), Price::new(3500 * 3));
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = CartStore::new();
        jollof(&mut cart);
        assert_eq!(cart.decrement(0).unwrap(), 1);
        assert_eq!(cart.decrement(0).unwrap(), 1);
        assert_eq!(cart.len(), 1);

        cart.increment(0).unwrap();
        cart.increment(0).unwrap();
        assert_eq!(cart.decrement(0).unwrap(), 2);
    }

    #[test]
    fn test_remove_shifts_indices() {
        let mut cart = CartStore::new();
        cart.add("Zobo", Price::new(800), "zobo.jpg");
        let pie = cart.add("Meat Pie", Price::new(1000), "pie.jpg");
        let chapman = cart.add("Chapman", Price::new(1500), "chapman.jpg");

        assert_eq!(cart.position(chapman), Some(2));
        let removed = cart.remove(0).unwrap();
        assert_eq!(removed.title, "Zobo");
        assert_eq!(cart.position(pie), Some(0));
        assert_eq!(cart.position(chapman), Some(1));
        assert_eq!(cart.total(), Price::new(2500));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut cart = CartStore::new();
        jollof(&mut cart);
        assert_eq!(
            cart.increment(3),
            Err(CartError::LineOutOfRange { index: 3, len: 1 })
        );
        assert!(cart.decrement(1).is_err());
        assert!(cart.remove(1).is_err());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Price::new(3500));
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        jollof(&mut cart);
        jollof(&mut cart);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_add_item_parses_price() {
        let mut cart = CartStore::new();
        let item = MenuItem::new("Small Chops Platter", "₦7,500", "chops.jpg", "snacks");
        cart.add_item(&item, NAIRA).unwrap();
        assert_eq!(cart.total(), Price::new(7500));

        let bad = MenuItem::new("Mystery", "ask", "m.jpg", "snacks");
        assert!(cart.add_item(&bad, NAIRA).is_err());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_unit_count() {
        let mut cart = CartStore::new();
        jollof(&mut cart);
        jollof(&mut cart);
        cart.increment(0).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.unit_count(), 3);
    }
}
