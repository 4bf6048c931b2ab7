use tracing::{debug, error, info, instrument, warn};

use super::CheckoutConfig;
use crate::domain::{Cart, Customer, Product};
use crate::error::{BuyError, CartError, ProductError};
use crate::store::ProductStore;

/// Hands out carts, serves the catalog and turns carts into inventory changes.
///
/// The store is injected; the service keeps no other state.
pub struct CheckoutService<S> {
    store: S,
    config: CheckoutConfig,
}

impl<S: ProductStore> CheckoutService<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, CheckoutConfig::default())
    }

    pub fn with_config(store: S, config: CheckoutConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> CheckoutConfig {
        self.config
    }

    /// Returns a new, empty cart owned by `customer`.
    pub fn get_cart(&self, customer: &Customer) -> Cart {
        debug!(customer_id = customer.id, "Creating cart");
        Cart::new(customer.clone())
    }

    pub fn get_all_products(&self) -> Result<Vec<Product>, ProductError> {
        self.store.find_all()
    }

    pub fn get_product_by_name(&self, name: &str) -> Result<Product, ProductError> {
        self.store.find_by_name(name)
    }

    /// Adds `quantity` units to the named product, creating it if unknown.
    #[instrument(skip(self))]
    pub fn restock(&mut self, name: &str, quantity: u32) -> Result<Product, ProductError> {
        if quantity == 0 {
            return Err(ProductError::InvalidQuantity(quantity));
        }

        let mut product = match self.store.find_by_name(name) {
            Ok(product) => product,
            Err(ProductError::NotFound(_)) => {
                info!("Registering new product");
                Product::new(name)
            }
            Err(e) => return Err(e),
        };
        product.add_count(quantity)?;
        self.store.save(product.clone())?;

        info!(count = product.count, "Product restocked");
        Ok(product)
    }

    /// Buys everything in `cart`.
    ///
    /// Returns `Ok(false)` for an empty cart. Otherwise every entry is checked
    /// in insertion order against the stock that would remain after the earlier
    /// entries; the first entry that does not fit aborts the purchase and
    /// nothing is saved. On success each touched product is saved once and the
    /// cart becomes purchased.
    ///
    /// # Errors
    /// - `InsufficientStock` naming the first product that cannot be supplied
    /// - `Cart(AlreadyPurchased)` if the cart was bought before
    /// - `Product(..)` if the store fails to load or save a product
    #[instrument(
        fields(customer_id = cart.owner().id, entries = cart.entries().len()),
        skip(self, cart)
    )]
    pub fn buy(&mut self, cart: &mut Cart) -> Result<bool, BuyError> {
        if cart.is_purchased() {
            warn!("Cart has already been purchased");
            return Err(CartError::AlreadyPurchased.into());
        }
        if cart.is_empty() {
            debug!("Nothing to buy");
            return Ok(false);
        }

        let staged = self.stage(cart)?;

        for product in staged {
            let name = product.name.clone();
            if let Err(e) = self.store.save(product) {
                error!(product = %name, error = %e, "Failed to save product");
                return Err(e.into());
            }
        }

        cart.mark_purchased();
        info!("Purchase completed");
        Ok(true)
    }

    /// Validates the cart and returns the updated products, in order of first
    /// appearance, without writing anything.
    fn stage(&self, cart: &Cart) -> Result<Vec<Product>, BuyError> {
        let mut staged: Vec<Product> = Vec::new();

        for entry in cart.entries() {
            let index = match staged.iter().position(|p| p.name == entry.product) {
                Some(index) => index,
                None => {
                    staged.push(self.store.find_by_name(&entry.product)?);
                    staged.len() - 1
                }
            };
            let product = &mut staged[index];

            if !self.config.stock_policy.permits(entry.quantity, product.count) {
                warn!(
                    product = %product.name,
                    requested = entry.quantity,
                    available = product.count,
                    "Insufficient stock"
                );
                return Err(BuyError::InsufficientStock(product.name.clone()));
            }
            product.remove_count(entry.quantity)?;
        }

        Ok(staged)
    }
}
