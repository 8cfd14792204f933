//! FVG + liquidity strategy.
//!
//! Looks for a fair value gap whose bounds bracket the last close while the
//! close also sits near a recent liquidity level. A gap-down zone being
//! refilled reads as Buy, a gap-up zone as Sell, at 0.85 confidence —
//! boosted to 0.95 when RSI or the MACD histogram confirms the direction.
//! Without a zone match, a pure RSI+MACD confirmation pair still fires at
//! 0.75. Otherwise Hold.

use crate::domain::{Candle, Signal};
use crate::indicators::{IndicatorSet, RSI_NEUTRAL};
use crate::patterns::{
    detect_fvg, liquidity_levels, near_liquidity_zone, GapDirection, LIQUIDITY_LOOKBACK,
    LIQUIDITY_THRESHOLD,
};

use super::{MacdState, RsiState};

const ZONE_CONFIDENCE: f64 = 0.85;
const ZONE_CONFIRMED_CONFIDENCE: f64 = 0.95;
const FALLBACK_CONFIDENCE: f64 = 0.75;

pub(crate) fn evaluate(candles: &[Candle], indicators: &IndicatorSet) -> (Signal, f64) {
    let last_close = match candles.last() {
        Some(c) => c.close,
        None => return (Signal::Hold, 0.0),
    };

    let rsi_state = RsiState::from_value(indicators.rsi.last().copied().unwrap_or(RSI_NEUTRAL));
    let macd_state = MacdState::from_histogram(&indicators.macd_histogram);

    let levels = liquidity_levels(candles, LIQUIDITY_LOOKBACK);
    for zone in detect_fvg(candles) {
        if !zone.contains(last_close) {
            continue;
        }
        if !near_liquidity_zone(last_close, &levels, LIQUIDITY_THRESHOLD) {
            continue;
        }
        // First bracketing zone wins.
        return match zone.direction {
            GapDirection::GapDown => {
                let confirmed =
                    rsi_state == RsiState::Oversold || macd_state == MacdState::Bullish;
                (Signal::Buy, zone_confidence(confirmed))
            }
            GapDirection::GapUp => {
                let confirmed =
                    rsi_state == RsiState::Overbought || macd_state == MacdState::Bearish;
                (Signal::Sell, zone_confidence(confirmed))
            }
        };
    }

    match (rsi_state, macd_state) {
        (RsiState::Oversold, MacdState::Bullish) => (Signal::Buy, FALLBACK_CONFIDENCE),
        (RsiState::Overbought, MacdState::Bearish) => (Signal::Sell, FALLBACK_CONFIDENCE),
        _ => (Signal::Hold, 0.0),
    }
}

fn zone_confidence(confirmed: bool) -> f64 {
    if confirmed {
        ZONE_CONFIRMED_CONFIDENCE
    } else {
        ZONE_CONFIDENCE
    }
}
