//! Session cart for the shop page.
//!
//! Lives only as long as the browsing session; nothing here talks to the
//! server. Totals are computed on read from the current lines.

use serde::Serialize;

use crate::db::models::ShopItem;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: ShopItem,
    pub quantity: u32,
}

impl CartLine {
    /// Saturates at `i64::MAX` rather than wrapping.
    pub fn subtotal(&self) -> i64 {
        self.item.price.saturating_mul(i64::from(self.quantity))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CheckoutConfirmation {
    pub title: &'static str,
    pub description: &'static str,
    pub total_items: u64,
    pub total_amount: i64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Your cart is empty")]
    Empty,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn quantity_of(&self, item_id: i32) -> u32 {
        self.lines
            .iter()
            .find(|l| l.item.id == item_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Adds one unit. A second add of the same item bumps its quantity rather
    /// than adding a line. Adding always opens the cart.
    pub fn add(&mut self, item: ShopItem) {
        match self.lines.iter_mut().find(|l| l.item.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine { item, quantity: 1 }),
        }
        self.open = true;
    }

    pub fn remove(&mut self, item_id: i32) {
        self.lines.retain(|l| l.item.id != item_id);
    }

    /// Sets the quantity for a line; zero or less drops it. Unknown ids are
    /// ignored.
    pub fn update_quantity(&mut self, item_id: i32, quantity: i64) {
        if quantity <= 0 {
            self.remove(item_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn total_amount(&self) -> i64 {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .fold(0i64, i64::saturating_add)
    }

    /// Stub checkout: no payment, just a confirmation. Empties and closes the
    /// cart.
    pub fn checkout(&mut self) -> Result<CheckoutConfirmation, CartError> {
        if self.is_empty() {
            return Err(CartError::Empty);
        }
        let confirmation = CheckoutConfirmation {
            title: "Checkout Initiated",
            description: "This would normally proceed to payment processing.",
            total_items: self.total_items(),
            total_amount: self.total_amount(),
        };
        self.clear();
        self.open = false;
        tracing::info!(
            "Checkout stub: {} items, amount {}",
            confirmation.total_items,
            confirmation.total_amount
        );
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, price: i64) -> ShopItem {
        ShopItem {
            id,
            name: format!("Item {}", id),
            price,
            description: String::new(),
            image: String::new(),
            rating: 5,
            category: "toy".to_string(),
        }
    }

    #[test]
    fn adding_twice_bumps_quantity() {
        let mut cart = Cart::new();
        cart.add(item(1, 399));
        cart.add(item(1, 399));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(1), 2);
        assert_eq!(cart.total_amount(), 798);
        assert_eq!(cart.total_items(), 2);
        assert!(cart.is_open());
    }

    #[test]
    fn zero_quantity_removes_line() {
        let mut cart = Cart::new();
        cart.add(item(1, 399));
        cart.add(item(2, 1499));
        cart.update_quantity(2, 3);
        assert_eq!(cart.total_amount(), 399 + 3 * 1499);

        cart.update_quantity(2, 0);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_amount(), 399);

        cart.update_quantity(1, -4);
        assert!(cart.is_empty());
        assert_eq!(cart.total_amount(), 0);
    }

    #[test]
    fn update_ignores_unknown_items() {
        let mut cart = Cart::new();
        cart.add(item(1, 100));
        cart.update_quantity(7, 5);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(7), 0);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(item(3, 10));
        cart.add(item(1, 10));
        cart.add(item(3, 10));
        let ids: Vec<_> = cart.lines().iter().map(|l| l.item.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn checkout_clears_and_closes() {
        let mut cart = Cart::new();
        assert_eq!(cart.checkout(), Err(CartError::Empty));

        cart.add(item(1, 349));
        cart.add(item(2, 599));
        let done = cart.checkout().unwrap();
        assert_eq!(done.total_items, 2);
        assert_eq!(done.total_amount, 948);
        assert_eq!(done.title, "Checkout Initiated");
        assert!(cart.is_empty());
        assert!(!cart.is_open());
    }

    #[test]
    fn huge_quantities_saturate() {
        let mut cart = Cart::new();
        cart.add(item(1, 399));
        cart.update_quantity(1, 5_000_000_000);
        assert_eq!(cart.quantity_of(1), u32::MAX);
        cart.add(item(1, 399));
        assert_eq!(cart.quantity_of(1), u32::MAX);

        cart.add(item(2, 10));
        cart.update_quantity(2, 3_000_000_000);
        assert_eq!(cart.total_items(), u64::from(u32::MAX) + 3_000_000_000);
    }

    #[test]
    fn totals_cap_at_max_amount() {
        let mut cart = Cart::new();
        cart.add(item(1, i64::MAX / 2));
        cart.add(item(2, i64::MAX / 2));
        cart.update_quantity(1, 3);
        cart.update_quantity(2, 3);
        assert_eq!(cart.lines()[0].subtotal(), i64::MAX);
        assert_eq!(cart.total_amount(), i64::MAX);
    }

    #[test]
    fn toggle_flips_open_state() {
        let mut cart = Cart::new();
        assert!(!cart.is_open());
        cart.toggle();
        assert!(cart.is_open());
        cart.toggle();
        assert!(!cart.is_open());
    }
}
