//! Candle — the fundamental market data unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV candle for a single closed interval.
///
/// Timestamps are epoch milliseconds (the kline convention of the market-data
/// collaborator). The `low <= open, close <= high` relationship is NOT
/// enforced here — the analysis core degrades silently on malformed data
/// rather than failing, so callers that care should run `is_sane()` at the
/// ingestion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Open time as a UTC datetime. `None` for out-of-range timestamps.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Returns true if any price field is NaN.
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// Basic OHLC sanity check: high bounds everything from above, low from below.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.close > 0.0
    }
}
