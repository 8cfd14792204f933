//! Synthetic candle windows — deterministic random-walk OHLCV for demos,
//! benches, and tests. The generator is fully seeded: the same config
//! always yields the same window.

use crate::domain::Candle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters for the random-walk candle generator.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticSeries {
    pub len: usize,
    pub start_price: f64,
    /// Per-candle relative drift.
    pub drift: f64,
    /// Per-candle relative noise amplitude.
    pub volatility: f64,
    pub interval_ms: i64,
    pub seed: u64,
}

impl Default for SyntheticSeries {
    fn default() -> Self {
        Self {
            len: 100,
            start_price: 100.0,
            drift: 0.0002,
            volatility: 0.004,
            interval_ms: 60_000,
            seed: 42,
        }
    }
}

impl SyntheticSeries {
    /// Generate the window. Prices are floored at 0.01 so a long losing
    /// walk cannot produce zero or negative levels.
    pub fn generate(&self) -> Vec<Candle> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut close = self.start_price;
        let mut out = Vec::with_capacity(self.len);

        for i in 0..self.len {
            let open = close;
            let step = self.drift + self.volatility * rng.gen_range(-1.0..1.0);
            close = (open * (1.0 + step)).max(0.01);

            let wick = self.volatility * 0.5 * open;
            let high = open.max(close) + wick * rng.gen_range(0.0..1.0);
            let low = (open.min(close) - wick * rng.gen_range(0.0..1.0)).max(0.01);
            let volume = 1_000.0 * (1.0 + rng.gen_range(-0.5..0.5));

            out.push(Candle {
                timestamp: i as i64 * self.interval_ms,
                open,
                high,
                low,
                close,
                volume,
            });
        }

        out
    }
}
