/// SOL/USD conversion used for the `total_value_usd` metadata field. Kept
/// behind a trait so the flat placeholder rate can be swapped for a real
/// price feed without touching the handlers.
pub trait PriceOracle: Send + Sync {
    fn sol_price_usd(&self) -> f64;
}

pub const DEFAULT_SOL_PRICE_USD: f64 = 150.0;

pub struct FixedPriceOracle {
    price: f64,
}

impl FixedPriceOracle {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

impl Default for FixedPriceOracle {
    fn default() -> Self {
        Self::new(DEFAULT_SOL_PRICE_USD)
    }
}

impl PriceOracle for FixedPriceOracle {
    fn sol_price_usd(&self) -> f64 {
        self.price
    }
}
