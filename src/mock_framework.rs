//! # Mock Framework
//!
//! Test doubles for the two seams of the crate.
//!
//! - [`RecordingStore`] wraps the in-memory store and remembers every `save`,
//!   so checkout tests can assert how often a product was written.
//! - [`create_mock_client`] returns a [`ShoppingClient`] wired to a receiver the
//!   test controls. Helpers like [`expect_buy`] pull the next request off that
//!   receiver so the test can assert on it and answer it.

use tokio::sync::mpsc;

use crate::clients::ShoppingClient;
use crate::domain::{Cart, Product};
use crate::error::{BuyError, ProductError};
use crate::messages::{ServiceResponse, ShoppingRequest};
use crate::store::{InMemoryProductStore, ProductStore};

#[derive(Debug, Default, Clone)]
pub struct RecordingStore {
    inner: InMemoryProductStore,
    saved: Vec<String>,
    fail_saves: bool,
}

impl RecordingStore {
    pub fn with_products(products: &[(&str, u32)]) -> Self {
        let products = products
            .iter()
            .map(|(name, count)| Product::with_count(*name, *count));
        Self {
            inner: InMemoryProductStore::with_products(products),
            ..Self::default()
        }
    }

    /// Makes every following `save` fail with a database error.
    pub fn fail_saves(&mut self) {
        self.fail_saves = true;
    }

    pub fn total_saves(&self) -> usize {
        self.saved.len()
    }

    pub fn saves_of(&self, name: &str) -> usize {
        self.saved.iter().filter(|saved| *saved == name).count()
    }
}

impl ProductStore for RecordingStore {
    fn find_by_name(&self, name: &str) -> Result<Product, ProductError> {
        self.inner.find_by_name(name)
    }

    fn find_all(&self) -> Result<Vec<Product>, ProductError> {
        self.inner.find_all()
    }

    fn save(&mut self, product: Product) -> Result<(), ProductError> {
        if self.fail_saves {
            return Err(ProductError::DatabaseError("store offline".to_string()));
        }
        self.saved.push(product.name.clone());
        self.inner.save(product)
    }
}

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (ShoppingClient, mpsc::Receiver<ShoppingRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ShoppingClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Buy request
pub async fn expect_buy(
    receiver: &mut mpsc::Receiver<ShoppingRequest>,
) -> Option<(Cart, ServiceResponse<bool, BuyError>)> {
    match receiver.recv().await {
        Some(ShoppingRequest::Buy { cart, respond_to }) => Some((cart, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetProductByName request
pub async fn expect_get_product_by_name(
    receiver: &mut mpsc::Receiver<ShoppingRequest>,
) -> Option<(String, ServiceResponse<Product, ProductError>)> {
    match receiver.recv().await {
        Some(ShoppingRequest::GetProductByName { name, respond_to }) => Some((name, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Customer;

    #[tokio::test]
    async fn test_mock_client_buy() {
        let (client, mut receiver) = create_mock_client(10);

        let buy_task = tokio::spawn(async move {
            let mut cart = Cart::new(Customer::new(7, "mock"));
            cart.add(&Product::new("apple"), 2).unwrap();
            client.buy(cart).await
        });

        let (cart, responder) = expect_buy(&mut receiver).await.expect("Expected Buy request");
        assert_eq!(cart.owner().id, 7);
        assert_eq!(cart.entries()[0].quantity, 2);
        responder.send(Ok(true)).unwrap();

        let result = buy_task.await.unwrap();
        assert_eq!(result, Ok(true));
    }

    #[tokio::test]
    async fn test_mock_client_propagates_service_error() {
        let (client, mut receiver) = create_mock_client(10);

        let lookup = tokio::spawn(async move { client.get_product_by_name("kiwi".to_string()).await });

        let (name, responder) = expect_get_product_by_name(&mut receiver)
            .await
            .expect("Expected GetProductByName request");
        assert_eq!(name, "kiwi");
        responder.send(Err(ProductError::NotFound(name))).unwrap();

        let result = lookup.await.unwrap();
        assert_eq!(result, Err(ProductError::NotFound("kiwi".to_string())));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let buy_task = tokio::spawn(async move {
            client.buy(Cart::new(Customer::new(1, "mock"))).await
        });

        let (_cart, responder) = expect_buy(&mut receiver).await.expect("Expected Buy request");
        drop(responder);

        let result = buy_task.await.unwrap();
        assert!(matches!(result, Err(BuyError::ActorCommunicationError(_))));
    }

    #[tokio::test]
    async fn test_closed_channel_is_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        let result = client.get_all_products().await;
        assert!(matches!(result, Err(ProductError::ActorCommunicationError(_))));
    }
}
