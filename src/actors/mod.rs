//! The shopping service task.
//!
//! One task owns the [`CheckoutService`] and its store and works through
//! requests one at a time. Purchases from any number of clients are therefore
//! serialized: the stock check and the decrement of one `buy` can never
//! interleave with another.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::checkout::CheckoutService;
use crate::clients::ShoppingClient;
use crate::domain::{Cart, Customer, Product};
use crate::error::{BuyError, ProductError};
use crate::messages::{ServiceResponse, ShoppingRequest};
use crate::store::ProductStore;

pub struct ShoppingService<S> {
    receiver: mpsc::Receiver<ShoppingRequest>,
    checkout: CheckoutService<S>,
}

impl<S: ProductStore + Send + 'static> ShoppingService<S> {
    pub fn new(buffer_size: usize, checkout: CheckoutService<S>) -> (Self, ShoppingClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, checkout };
        let client = ShoppingClient::new(sender);
        (service, client)
    }

    /// Runs until a `Shutdown` request arrives or every client is dropped.
    #[instrument(name = "shopping_service", skip(self))]
    pub async fn run(mut self) {
        info!("ShoppingService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ShoppingRequest::GetCart {
                    customer,
                    respond_to,
                } => {
                    self.handle_get_cart(customer, respond_to);
                }
                ShoppingRequest::GetAllProducts { respond_to } => {
                    self.handle_get_all_products(respond_to);
                }
                ShoppingRequest::GetProductByName { name, respond_to } => {
                    self.handle_get_product_by_name(name, respond_to);
                }
                ShoppingRequest::Restock {
                    name,
                    quantity,
                    respond_to,
                } => {
                    self.handle_restock(name, quantity, respond_to);
                }
                ShoppingRequest::Buy { cart, respond_to } => {
                    self.handle_buy(cart, respond_to);
                }
                ShoppingRequest::Shutdown => {
                    info!("ShoppingService shutting down");
                    break;
                }
            }
        }

        info!("ShoppingService stopped");
    }

    #[instrument(fields(customer_id = customer.id), skip(self, customer, respond_to))]
    fn handle_get_cart(&self, customer: Customer, respond_to: ServiceResponse<Cart, BuyError>) {
        debug!("Processing get_cart request");
        let _ = respond_to.send(Ok(self.checkout.get_cart(&customer)));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_all_products(&self, respond_to: ServiceResponse<Vec<Product>, ProductError>) {
        debug!("Processing get_all_products request");

        let result = self.checkout.get_all_products();
        if let Ok(products) = &result {
            info!(product_count = products.len(), "Listed products");
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product = %name), skip(self, name, respond_to))]
    fn handle_get_product_by_name(
        &self,
        name: String,
        respond_to: ServiceResponse<Product, ProductError>,
    ) {
        debug!("Processing get_product_by_name request");

        let result = self.checkout.get_product_by_name(&name);
        match &result {
            Ok(product) => info!(count = product.count, "Product found"),
            Err(e) => debug!(error = %e, "Product lookup failed"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product = %name), skip(self, name, respond_to))]
    fn handle_restock(
        &mut self,
        name: String,
        quantity: u32,
        respond_to: ServiceResponse<Product, ProductError>,
    ) {
        debug!("Processing restock request");
        let _ = respond_to.send(self.checkout.restock(&name, quantity));
    }

    #[instrument(fields(customer_id = cart.owner().id), skip(self, cart, respond_to))]
    fn handle_buy(&mut self, mut cart: Cart, respond_to: ServiceResponse<bool, BuyError>) {
        debug!("Processing buy request");

        let result = self.checkout.buy(&mut cart);
        if let Err(e) = &result {
            warn!(error = %e, "Purchase rejected");
        }

        let _ = respond_to.send(result);
    }
}
