//! Product persistence.
//!
//! [`ProductStore`] is the only way the checkout service reads or writes
//! inventory. The in-memory implementation backs the running system and tests.

mod memory;

pub use memory::InMemoryProductStore;

use crate::domain::Product;
use crate::error::ProductError;

/// Key-value store of products, keyed by product name.
pub trait ProductStore {
    /// Looks up a product. Absent names fail with [`ProductError::NotFound`].
    fn find_by_name(&self, name: &str) -> Result<Product, ProductError>;

    fn find_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Inserts or replaces the record stored under `product.name`.
    fn save(&mut self, product: Product) -> Result<(), ProductError>;
}
