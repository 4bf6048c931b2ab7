use std::collections::HashMap;
use tracing::debug;

use super::ProductStore;
use crate::domain::Product;
use crate::error::ProductError;

#[derive(Debug, Default, Clone)]
pub struct InMemoryProductStore {
    products: HashMap<String, Product>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store seeded with `products`. Later duplicates replace earlier ones.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.name.clone(), product))
            .collect();
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductStore for InMemoryProductStore {
    fn find_by_name(&self, name: &str) -> Result<Product, ProductError> {
        self.products
            .get(name)
            .cloned()
            .ok_or_else(|| ProductError::NotFound(name.to_string()))
    }

    /// Sorted by name so callers see a stable order.
    fn find_all(&self) -> Result<Vec<Product>, ProductError> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    fn save(&mut self, product: Product) -> Result<(), ProductError> {
        debug!(product = %product.name, count = product.count, "Saving product");
        self.products.insert(product.name.clone(), product);
        Ok(())
    }
}
