//! Cart
//!
//! The shopper's cart: an insertion-ordered set of line items, at most one per
//! product or variation id. Totals are derived on read.

use crate::{prices::Price, products::ProductId};

mod line_item;

pub use line_item::{LineItem, Quantity, ZeroQuantity};

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Add a line to the cart.
    ///
    /// A line whose id is already in the cart is merged into the existing row:
    /// quantities are summed and the row keeps its position.
    pub fn add_to_cart(&mut self, item: LineItem) {
        match self.items.iter_mut().find(|line| line.id() == item.id()) {
            Some(existing) => existing.merge(item),
            None => self.items.push(item),
        }
    }

    /// Remove the line with the given id. Absent ids are ignored.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.items.retain(|line| line.id() != id);
    }

    /// Set the quantity of a line.
    ///
    /// Quantities below one are rejected and leave the cart untouched; use
    /// [`Cart::remove_from_cart`] to drop a line. Returns whether anything changed.
    pub fn update_quantity(&mut self, id: &ProductId, new_quantity: u32) -> bool {
        let Some(quantity) = Quantity::new(new_quantity) else {
            return false;
        };

        match self.items.iter_mut().find(|line| line.id() == id) {
            Some(line) if line.quantity() != quantity => {
                line.set_quantity(quantity);
                true
            }
            Some(_) | None => false,
        }
    }

    /// Bump a line's quantity by one.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        self.get(id)
            .map(|line| line.quantity().get().saturating_add(1))
            .is_some_and(|next| self.update_quantity(id, next))
    }

    /// Lower a line's quantity by one. A line at quantity one stays put.
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        self.get(id)
            .map(|line| line.quantity().get().saturating_sub(1))
            .is_some_and(|next| self.update_quantity(id, next))
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        self.items.clear();
    }

    /// Look up a line by id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|line| line.id() == id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Unit price times quantity for a line.
    pub fn subtotal(item: &LineItem) -> Price {
        item.subtotal()
    }

    /// Sum of every line subtotal.
    pub fn grand_total(&self) -> Price {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Sum of quantities, as shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|line| u64::from(line.quantity().get()))
            .sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: u64, quantity: u32) -> LineItem {
        LineItem::new(
            ProductId::from(id),
            format!("Produto {id}"),
            format!("P-{id}"),
            Price::from_minor(price),
            Quantity::new(quantity).unwrap_or(Quantity::ONE),
        )
    }

    fn expected_total(cart: &Cart) -> u64 {
        cart.items()
            .iter()
            .map(|line| *line.unit_price() * u64::from(line.quantity().get()))
            .sum()
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.grand_total(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn add_to_cart_keeps_insertion_order() {
        let mut cart = Cart::new();

        cart.add_to_cart(line("b", 100, 1));
        cart.add_to_cart(line("a", 200, 1));

        let ids: Vec<&str> = cart.items().iter().map(|l| l.id().as_str()).collect();

        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn add_to_cart_merges_repeated_ids() {
        let mut cart = Cart::new();

        cart.add_to_cart(line("a", 1990, 2));
        cart.add_to_cart(line("b", 500, 1));
        cart.add_to_cart(line("a", 1990, 3));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(&ProductId::from("a")).map(|l| l.quantity().get()), Some(5));
        assert_eq!(cart.items().first().map(|l| l.id().as_str()), Some("a"));
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn remove_from_cart_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_to_cart(line("a", 100, 1));
        let before = cart.clone();

        cart.remove_from_cart(&ProductId::from("missing"));

        assert_eq!(cart, before);
    }

    #[test]
    fn remove_from_cart_drops_line() {
        let mut cart = Cart::new();
        cart.add_to_cart(line("a", 100, 1));
        cart.add_to_cart(line("b", 100, 1));

        cart.remove_from_cart(&ProductId::from("a"));

        assert_eq!(cart.len(), 1);
        assert!(cart.get(&ProductId::from("a")).is_none());
    }

    #[test]
    fn update_quantity_below_one_is_rejected() {
        let mut cart = Cart::new();
        cart.add_to_cart(line("a", 100, 2));
        let before = cart.clone();

        assert!(!cart.update_quantity(&ProductId::from("a"), 0));
        assert_eq!(cart, before);
    }

    #[test]
    fn update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add_to_cart(line("a", 100, 2));

        assert!(cart.update_quantity(&ProductId::from("a"), 7));
        assert!(!cart.update_quantity(&ProductId::from("missing"), 7));
        assert_eq!(cart.item_count(), 7);
    }

    #[test]
    fn increment_and_decrement() {
        let id = ProductId::from("a");
        let mut cart = Cart::new();
        cart.add_to_cart(line("a", 100, 1));

        assert!(!cart.decrement(&id));
        assert!(cart.increment(&id));
        assert_eq!(cart.item_count(), 2);
        assert!(cart.decrement(&id));
        assert_eq!(cart.item_count(), 1);
        assert!(!cart.increment(&ProductId::from("missing")));
    }

    #[test]
    fn clear_cart_zeroes_totals() {
        let mut cart = Cart::new();
        cart.add_to_cart(line("a", 100, 2));
        cart.add_to_cart(line("b", 250, 1));

        cart.clear_cart();

        assert_eq!(cart.grand_total(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn grand_total_tracks_every_mutation() {
        let mut cart = Cart::new();
        let a = ProductId::from("a");
        let b = ProductId::from("b");

        cart.add_to_cart(line("a", 1990, 2));
        assert_eq!(*cart.grand_total(), expected_total(&cart));

        cart.add_to_cart(line("b", 350, 3));
        assert_eq!(*cart.grand_total(), expected_total(&cart));

        cart.update_quantity(&a, 5);
        assert_eq!(*cart.grand_total(), expected_total(&cart));

        cart.update_quantity(&b, 0);
        assert_eq!(*cart.grand_total(), expected_total(&cart));

        cart.add_to_cart(line("a", 1990, 1));
        assert_eq!(*cart.grand_total(), expected_total(&cart));

        cart.remove_from_cart(&b);
        assert_eq!(*cart.grand_total(), expected_total(&cart));
        assert_eq!(cart.grand_total(), Price::from_minor(1990 * 6));
    }

    #[test]
    fn subtotal_is_price_times_quantity() {
        let item = line("a", 1990, 2);

        assert_eq!(Cart::subtotal(&item), Price::from_minor(3980));
    }
}
