//! # Shopping cart
//!
//! A small in-memory checkout service. Customers collect products in a
//! [`Cart`](domain::Cart) and buy them through a
//! [`CheckoutService`](checkout::CheckoutService), which checks the requested
//! quantities against a [`ProductStore`](store::ProductStore) and applies the
//! purchase all-or-nothing.
//!
//! For use from many tasks, [`ShoppingSystem`](app_system::ShoppingSystem)
//! runs the checkout service as a single task behind a cloneable
//! [`ShoppingClient`](clients::ShoppingClient), so purchases are serialized.
//!
//! ```rust,ignore
//! let system = ShoppingSystem::new(SystemConfig::default(), [Product::with_count("apple", 5)]);
//!
//! let apple = system.client.get_product_by_name("apple".to_string()).await?;
//! let mut cart = system.client.get_cart(Customer::new(1, "Alice")).await?;
//! cart.add(&apple, 2)?;
//! let bought = system.client.buy(cart).await?;
//!
//! system.shutdown().await?;
//! ```

pub mod actors;
pub mod app_system;
pub mod checkout;
pub mod clients;
pub mod domain;
pub mod error;
pub mod messages;
pub mod store;

#[cfg(test)]
mod mock_framework;
