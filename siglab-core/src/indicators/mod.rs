//! Indicator engine — RSI, MACD, Bollinger Bands, ATR over close series.
//!
//! Indicators are pure functions: series in, series out, recomputed from
//! scratch over the full window on every invocation. All of them map
//! insufficient input to a documented degraded series (neutral RSI, zero
//! MACD, flat bands) instead of failing, so a caller never sees an error
//! from this module.
//!
//! `IndicatorSet` bundles the default-parameter series that the strategy
//! evaluator consumes, aligned index-for-index with the candle window.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;

pub use atr::{average_true_range, true_range};
pub use bollinger::{bollinger, BollingerBands};
pub use ema::ema;
pub use macd::{macd, Macd};
pub use rsi::{rsi, RSI_NEUTRAL};

use crate::domain::Candle;

/// Default RSI lookback.
pub const RSI_PERIOD: usize = 14;
/// Default MACD fast EMA period.
pub const MACD_FAST: usize = 12;
/// Default MACD slow EMA period.
pub const MACD_SLOW: usize = 26;
/// Default MACD signal-line EMA period.
pub const MACD_SIGNAL: usize = 9;
/// Default Bollinger window.
pub const BOLLINGER_PERIOD: usize = 20;
/// Default Bollinger stddev multiplier.
pub const BOLLINGER_MULT: f64 = 2.0;
/// Default ATR interval count.
pub const ATR_PERIOD: usize = 14;

/// All default-parameter indicator series for one candle window.
///
/// Produced fresh per invocation, never mutated afterwards. Every series
/// has the same length as the input window.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    pub rsi: Vec<f64>,
    pub macd: Vec<f64>,
    pub macd_signal: Vec<f64>,
    pub macd_histogram: Vec<f64>,
    pub bb_upper: Vec<f64>,
    pub bb_middle: Vec<f64>,
    pub bb_lower: Vec<f64>,
}

impl IndicatorSet {
    /// Compute the full set from a candle window.
    pub fn compute(candles: &[Candle]) -> Self {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        Self::from_closes(&closes)
    }

    /// Compute the full set from a bare close series.
    pub fn from_closes(closes: &[f64]) -> Self {
        let rsi_series = rsi(closes, RSI_PERIOD);
        let macd_set = macd(closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);
        let bands = bollinger(closes, BOLLINGER_PERIOD, BOLLINGER_MULT);

        Self {
            rsi: rsi_series,
            macd: macd_set.macd,
            macd_signal: macd_set.signal,
            macd_histogram: macd_set.histogram,
            bb_upper: bands.upper,
            bb_middle: bands.middle,
            bb_lower: bands.lower,
        }
    }

    /// Window length all series are aligned to.
    pub fn len(&self) -> usize {
        self.rsi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rsi.is_empty()
    }
}

/// Create synthetic candles from close prices for testing.
///
/// Generates plausible OHLV: open = prev close (or close for the first
/// candle), high = max(open, close) + 1.0, low = min(open, close) - 1.0,
/// volume = 1000, one-minute spacing.
#[cfg(test)]
pub fn make_candles(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Candle {
                timestamp: i as i64 * 60_000,
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

/// Create candles from explicit (open, high, low, close) rows.
#[cfg(test)]
pub fn make_ohlc_candles(rows: &[(f64, f64, f64, f64)]) -> Vec<Candle> {
    rows.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| Candle {
            timestamp: i as i64 * 60_000,
            open,
            high,
            low,
            close,
            volume: 1000.0,
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_set_series_lengths_match() {
        let candles = make_candles(&(0..30).map(|i| 100.0 + i as f64 * 0.5).collect::<Vec<_>>());
        let set = IndicatorSet::compute(&candles);
        assert_eq!(set.len(), 30);
        assert_eq!(set.macd.len(), 30);
        assert_eq!(set.macd_signal.len(), 30);
        assert_eq!(set.macd_histogram.len(), 30);
        assert_eq!(set.bb_upper.len(), 30);
        assert_eq!(set.bb_middle.len(), 30);
        assert_eq!(set.bb_lower.len(), 30);
    }

    #[test]
    fn indicator_set_empty_window() {
        let set = IndicatorSet::compute(&[]);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn indicator_set_matches_free_functions() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.4).cos() * 3.0).collect();
        let candles = make_candles(&closes);
        let set = IndicatorSet::compute(&candles);
        assert_eq!(set.rsi, rsi(&closes, RSI_PERIOD));
        assert_eq!(set.bb_middle, bollinger(&closes, BOLLINGER_PERIOD, BOLLINGER_MULT).middle);
        assert_eq!(set.macd, macd(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL).macd);
    }
}
