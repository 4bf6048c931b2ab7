use super::{Customer, Product};
use crate::error::CartError;

/// One line of a cart: which product, and how many units were asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub product: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    /// Accepting new entries.
    Open,
    /// Bought once; further `add` and `buy` calls are rejected.
    Purchased,
}

/// A customer's pending selection.
///
/// Entries refer to products by name. The product store keeps the only
/// authoritative record, so a cart never holds a stale copy of the stock.
#[derive(Debug, Clone)]
pub struct Cart {
    owner: Customer,
    entries: Vec<CartEntry>,
    state: CartState,
}

impl Cart {
    pub fn new(owner: Customer) -> Self {
        Self {
            owner,
            entries: Vec::new(),
            state: CartState::Open,
        }
    }

    /// Records the intent to buy `quantity` units of `product`.
    ///
    /// # Errors
    /// - `InvalidQuantity` if `quantity` is zero
    /// - `AlreadyPurchased` if the cart has been bought
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if self.state == CartState::Purchased {
            return Err(CartError::AlreadyPurchased);
        }
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        self.entries.push(CartEntry {
            product: product.name.clone(),
            quantity,
        });
        Ok(())
    }

    pub fn owner(&self) -> &Customer {
        &self.owner
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn state(&self) -> CartState {
        self.state
    }

    pub fn is_purchased(&self) -> bool {
        self.state == CartState::Purchased
    }

    pub(crate) fn mark_purchased(&mut self) {
        self.state = CartState::Purchased;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart() -> Cart {
        Cart::new(Customer::new(1, "customer"))
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut cart = cart();
        cart.add(&Product::new("apple"), 2).unwrap();
        cart.add(&Product::new("banana"), 1).unwrap();

        let names: Vec<&str> = cart.entries().iter().map(|e| e.product.as_str()).collect();
        assert_eq!(names, vec!["apple", "banana"]);
        assert_eq!(cart.entries()[0].quantity, 2);
    }

    #[test]
    fn add_does_not_touch_product() {
        let mut cart = cart();
        let product = Product::with_count("apple", 3);
        cart.add(&product, 2).unwrap();
        assert_eq!(product.count, 3);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut cart = cart();
        assert_eq!(
            cart.add(&Product::new("apple"), 0),
            Err(CartError::InvalidQuantity(0))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn purchased_cart_rejects_new_entries() {
        let mut cart = cart();
        cart.mark_purchased();
        assert_eq!(
            cart.add(&Product::new("apple"), 1),
            Err(CartError::AlreadyPurchased)
        );
        assert_eq!(cart.state(), CartState::Purchased);
    }
}
