use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Product database error: {0}")]
    DatabaseError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Cart has already been purchased")]
    AlreadyPurchased,
}

/// Failure of a purchase. Nothing is saved when `buy` returns any of these.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuyError {
    #[error("В наличии нет необходимого количества товара {0}")]
    InsufficientStock(String),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
