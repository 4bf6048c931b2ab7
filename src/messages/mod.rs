use tokio::sync::oneshot;

use crate::domain::{Cart, Customer, Product};
use crate::error::{BuyError, ProductError};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests understood by the shopping service. Each variant carries its
/// arguments and a oneshot channel for the answer.
#[derive(Debug)]
pub enum ShoppingRequest {
    GetCart {
        customer: Customer,
        respond_to: ServiceResponse<Cart, BuyError>,
    },
    GetAllProducts {
        respond_to: ServiceResponse<Vec<Product>, ProductError>,
    },
    GetProductByName {
        name: String,
        respond_to: ServiceResponse<Product, ProductError>,
    },
    Restock {
        name: String,
        quantity: u32,
        respond_to: ServiceResponse<Product, ProductError>,
    },
    Buy {
        cart: Cart,
        respond_to: ServiceResponse<bool, BuyError>,
    },
    Shutdown,
}
