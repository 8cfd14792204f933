//! Moving Average Convergence Divergence (MACD).
//!
//! macd = EMA(close, fast) - EMA(close, slow)
//! signal = EMA(macd, signal_period)
//! histogram = macd - signal
//!
//! Degraded mode: fewer than `max(fast, slow)` closes → all three series
//! are zero, same length as the input.

use super::ema::ema;

/// The three MACD series, aligned index-for-index with the input closes.
#[derive(Debug, Clone, PartialEq)]
pub struct Macd {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

impl Macd {
    fn zeros(len: usize) -> Self {
        Self {
            macd: vec![0.0; len],
            signal: vec![0.0; len],
            histogram: vec![0.0; len],
        }
    }
}

/// Compute MACD with explicit periods.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal_period: usize) -> Macd {
    assert!(
        fast >= 1 && slow >= 1 && signal_period >= 1,
        "MACD periods must be >= 1"
    );

    let n = closes.len();
    if n < fast.max(slow) {
        return Macd::zeros(n);
    }

    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);
    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = ema(&macd_line, signal_period);
    let histogram: Vec<f64> = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| m - s)
        .collect();

    Macd {
        macd: macd_line,
        signal: signal_line,
        histogram,
    }
}
