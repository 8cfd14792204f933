//! Bollinger breakout strategy.
//!
//! A fresh breakout (previous close inside the band, current close outside)
//! reads as trend continuation at 0.6 confidence. A "return" pattern — two
//! closes outside a band, then a close back inside toward the middle band,
//! confirmed by an RSI extreme — reads as mean reversion at 0.8. The return
//! check needs three trailing closes.

use crate::domain::{Candle, Signal};
use crate::indicators::{IndicatorSet, RSI_NEUTRAL};

use super::RsiState;

const BREAKOUT_CONFIDENCE: f64 = 0.6;
const RETURN_CONFIDENCE: f64 = 0.8;

pub(crate) fn evaluate(candles: &[Candle], indicators: &IndicatorSet) -> (Signal, f64) {
    let n = candles.len();
    if n < 3 || indicators.len() < 3 {
        return (Signal::Hold, 0.0);
    }

    let last = candles[n - 1].close;
    let prev = candles[n - 2].close;
    let prev2 = candles[n - 3].close;

    let upper = &indicators.bb_upper;
    let middle = &indicators.bb_middle;
    let lower = &indicators.bb_lower;

    let upper_breakout = prev <= upper[n - 2] && last > upper[n - 1];
    let lower_breakout = prev >= lower[n - 2] && last < lower[n - 1];

    let upper_return =
        prev2 > upper[n - 3] && prev > upper[n - 2] && last < upper[n - 1] && last > middle[n - 1];
    let lower_return =
        prev2 < lower[n - 3] && prev < lower[n - 2] && last > lower[n - 1] && last < middle[n - 1];

    let rsi_state =
        RsiState::from_value(indicators.rsi.last().copied().unwrap_or(RSI_NEUTRAL));

    if upper_breakout {
        (Signal::Buy, BREAKOUT_CONFIDENCE)
    } else if lower_breakout {
        (Signal::Sell, BREAKOUT_CONFIDENCE)
    } else if upper_return && rsi_state == RsiState::Overbought {
        (Signal::Sell, RETURN_CONFIDENCE)
    } else if lower_return && rsi_state == RsiState::Oversold {
        (Signal::Buy, RETURN_CONFIDENCE)
    } else {
        (Signal::Hold, 0.0)
    }
}
