/// How a requested quantity is compared with the available stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockPolicy {
    /// `requested < available`. Asking for exactly the remaining stock fails.
    #[default]
    StrictlyLess,
    /// `requested <= available`.
    AllowExact,
}

impl StockPolicy {
    pub fn permits(self, requested: u32, available: u32) -> bool {
        match self {
            StockPolicy::StrictlyLess => requested < available,
            StockPolicy::AllowExact => requested <= available,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutConfig {
    pub stock_policy: StockPolicy,
}

impl CheckoutConfig {
    pub fn with_stock_policy(stock_policy: StockPolicy) -> Self {
        Self { stock_policy }
    }
}
