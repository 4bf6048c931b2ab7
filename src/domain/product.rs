use crate::error::ProductError;

/// Represents a product in the inventory. `name` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub count: u32,
}

impl Product {
    /// Creates a product with nothing in stock.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
        }
    }

    pub fn with_count(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Restocks the product.
    ///
    /// # Errors
    /// Fails if the new count would not fit in a `u32`.
    pub fn add_count(&mut self, amount: u32) -> Result<(), ProductError> {
        self.count = self
            .count
            .checked_add(amount)
            .ok_or(ProductError::InvalidQuantity(amount))?;
        Ok(())
    }

    /// Takes `amount` units out of stock. The count never goes below zero.
    pub fn remove_count(&mut self, amount: u32) -> Result<(), ProductError> {
        match self.count.checked_sub(amount) {
            Some(remaining) => {
                self.count = remaining;
                Ok(())
            }
            None => Err(ProductError::InsufficientStock {
                requested: amount,
                available: self.count,
            }),
        }
    }
}
