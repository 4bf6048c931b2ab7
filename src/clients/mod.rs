//! Handles for talking to the shopping service.

#[macro_use]
mod macros;
mod shopping_client;

pub use shopping_client::*;
