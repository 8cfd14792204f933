//! RSI + MACD strategy.
//!
//! Detects MACD/signal-line crossovers between the last two indices and
//! combines them with RSI extremes. The priority ladder is checked in
//! order and the first match wins:
//!
//! 1. oversold + bullish crossover  → Buy 0.9
//! 2. overbought + bearish crossunder → Sell 0.9
//! 3. bullish crossover alone       → Buy 0.7
//! 4. bearish crossunder alone      → Sell 0.7
//! 5. oversold + rising histogram   → Buy 0.6
//! 6. overbought + falling histogram → Sell 0.6

use crate::domain::Signal;
use crate::indicators::{IndicatorSet, RSI_NEUTRAL};

use super::RsiState;

pub(crate) fn evaluate(indicators: &IndicatorSet) -> (Signal, f64) {
    let n = indicators.len();
    if n < 2 {
        return (Signal::Hold, 0.0);
    }

    let rsi_state =
        RsiState::from_value(indicators.rsi.last().copied().unwrap_or(RSI_NEUTRAL));
    let oversold = rsi_state == RsiState::Oversold;
    let overbought = rsi_state == RsiState::Overbought;

    let (macd_prev, macd_last) = (indicators.macd[n - 2], indicators.macd[n - 1]);
    let (sig_prev, sig_last) = (indicators.macd_signal[n - 2], indicators.macd_signal[n - 1]);
    let (hist_prev, hist_last) = (
        indicators.macd_histogram[n - 2],
        indicators.macd_histogram[n - 1],
    );

    let crossover = macd_prev < sig_prev && macd_last > sig_last;
    let crossunder = macd_prev > sig_prev && macd_last < sig_last;

    if oversold && crossover {
        (Signal::Buy, 0.9)
    } else if overbought && crossunder {
        (Signal::Sell, 0.9)
    } else if crossover {
        (Signal::Buy, 0.7)
    } else if crossunder {
        (Signal::Sell, 0.7)
    } else if oversold && hist_last > hist_prev {
        (Signal::Buy, 0.6)
    } else if overbought && hist_last < hist_prev {
        (Signal::Sell, 0.6)
    } else {
        (Signal::Hold, 0.0)
    }
}
