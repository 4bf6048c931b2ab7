use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{Cart, Customer, Product};
use crate::error::{BuyError, ProductError};
use crate::messages::ShoppingRequest;

/// Client for the shopping service. Cheap to clone; every clone talks to the
/// same service task.
#[derive(Clone)]
pub struct ShoppingClient {
    sender: mpsc::Sender<ShoppingRequest>,
}

impl ShoppingClient {
    pub fn new(sender: mpsc::Sender<ShoppingRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), String> {
        debug!("Sending shutdown request");
        self.sender
            .send(ShoppingRequest::Shutdown)
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}

client_method!(ShoppingClient => fn get_cart(customer: Customer) -> Cart as ShoppingRequest::GetCart, Error = BuyError);
client_method!(ShoppingClient => fn get_all_products() -> Vec<Product> as ShoppingRequest::GetAllProducts, Error = ProductError);
client_method!(ShoppingClient => fn get_product_by_name(name: String) -> Product as ShoppingRequest::GetProductByName, Error = ProductError);
client_method!(ShoppingClient => fn restock(name: String, quantity: u32) -> Product as ShoppingRequest::Restock, Error = ProductError);
client_method!(ShoppingClient => fn buy(cart: Cart) -> bool as ShoppingRequest::Buy, Error = BuyError);
