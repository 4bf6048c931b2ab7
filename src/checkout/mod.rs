//! Cart checkout: stock validation and inventory updates.

mod config;
mod service;

pub use config::*;
pub use service::*;
