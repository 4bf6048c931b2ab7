use crate::checkout::CheckoutConfig;

/// Settings for a [`ShoppingSystem`](super::ShoppingSystem).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    /// Capacity of the request channel in front of the shopping service.
    pub buffer_size: usize,
    pub checkout: CheckoutConfig,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 100,
            checkout: CheckoutConfig::default(),
        }
    }
}
