//! Risk levels — stop-loss from recent extremes, take-profit from ATR.
//!
//! Both functions keep the always-produces-a-value contract: too little
//! history or a Hold signal yields 0.0 rather than an error.

use crate::domain::{Candle, Signal};
use crate::indicators::{average_true_range, ATR_PERIOD};

/// Minimum candles before any risk level is computed.
pub const MIN_RISK_CANDLES: usize = 5;
/// Trailing candles scanned for the stop-loss extreme.
pub const STOP_LOOKBACK: usize = 10;
/// Relative buffer past the extreme: 0.5% below recent lows / above recent highs.
pub const STOP_BUFFER: f64 = 0.005;
/// ATR multiple for the take-profit distance.
pub const TAKE_PROFIT_ATR_MULT: f64 = 3.0;

/// Stop-loss level for a signal.
///
/// Buy → just below the minimum low of the last 10 candles;
/// Sell → just above the maximum high. Hold or `< 5` candles → 0.0.
pub fn stop_loss(candles: &[Candle], signal: Signal) -> f64 {
    if candles.len() < MIN_RISK_CANDLES || !signal.is_actionable() {
        return 0.0;
    }

    let start = candles.len().saturating_sub(STOP_LOOKBACK);
    let tail = &candles[start..];
    match signal {
        Signal::Buy => {
            let lowest = tail.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
            lowest * (1.0 - STOP_BUFFER)
        }
        Signal::Sell => {
            let highest = tail.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
            highest * (1.0 + STOP_BUFFER)
        }
        Signal::Hold => 0.0,
    }
}

/// Take-profit level anchored at `price`, sized by the unsmoothed ATR over
/// up to the last 14 intervals.
///
/// Buy → `price + 3*ATR`; Sell → `price - 3*ATR`; Hold or `< 5` candles → 0.0.
pub fn take_profit(candles: &[Candle], signal: Signal, price: f64) -> f64 {
    if candles.len() < MIN_RISK_CANDLES || !signal.is_actionable() {
        return 0.0;
    }

    let atr = average_true_range(candles, ATR_PERIOD);
    match signal {
        Signal::Buy => price + atr * TAKE_PROFIT_ATR_MULT,
        Signal::Sell => price - atr * TAKE_PROFIT_ATR_MULT,
        Signal::Hold => 0.0,
    }
}
