//! Strategy evaluation — turns a candle window into a trading decision.
//!
//! Three interchangeable policies combine indicator and pattern outputs into
//! a directional signal with a confidence score. Strategy names are resolved
//! once at the boundary into a closed enum; the hot path never compares
//! strings. Every policy requires at least [`MIN_CANDLES`] candles and
//! returns the neutral decision below that.

pub mod bollinger_breakout;
pub mod fvg_liquidity;
pub mod rsi_macd;

use crate::domain::{Candle, Decision, Signal};
use crate::indicators::IndicatorSet;
use crate::risk;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum window length for any strategy evaluation.
pub const MIN_CANDLES: usize = 20;

/// RSI threshold below which the market reads oversold.
pub const RSI_OVERSOLD: f64 = 30.0;
/// RSI threshold above which the market reads overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// The closed set of strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    FvgLiquidity,
    RsiMacd,
    BollingerBreakout,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::FvgLiquidity,
        StrategyKind::RsiMacd,
        StrategyKind::BollingerBreakout,
    ];

    /// Resolve a strategy name from the boundary.
    ///
    /// Unrecognized names fall back to `FvgLiquidity`, matching the
    /// selector contract of the transport layer.
    pub fn from_name(name: &str) -> Self {
        match name {
            "rsi_macd" => Self::RsiMacd,
            "bollinger_breakout" => Self::BollingerBreakout,
            _ => Self::FvgLiquidity,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FvgLiquidity => "fvg_liquidity",
            Self::RsiMacd => "rsi_macd",
            Self::BollingerBreakout => "bollinger_breakout",
        }
    }
}

impl Default for StrategyKind {
    fn default() -> Self {
        Self::FvgLiquidity
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// RSI read on the last index: thresholds 30/70.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RsiState {
    Oversold,
    Overbought,
    Neutral,
}

impl RsiState {
    pub(crate) fn from_value(rsi: f64) -> Self {
        if rsi < RSI_OVERSOLD {
            Self::Oversold
        } else if rsi > RSI_OVERBOUGHT {
            Self::Overbought
        } else {
            Self::Neutral
        }
    }
}

/// MACD histogram read: sign of the last value plus its short-term slope.
///
/// Bullish needs a positive histogram that is still rising; bearish a
/// negative one still falling. Anything else is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MacdState {
    Bullish,
    Bearish,
    Neutral,
}

impl MacdState {
    pub(crate) fn from_histogram(histogram: &[f64]) -> Self {
        let n = histogram.len();
        if n < 2 {
            return Self::Neutral;
        }
        let (prev, last) = (histogram[n - 2], histogram[n - 1]);
        if last > 0.0 && prev < last {
            Self::Bullish
        } else if last < 0.0 && prev > last {
            Self::Bearish
        } else {
            Self::Neutral
        }
    }
}

/// Evaluate a strategy over the candle window, anchoring risk levels at the
/// last close.
pub fn analyze(candles: &[Candle], kind: StrategyKind) -> Decision {
    if candles.is_empty() {
        return Decision::hold();
    }
    analyze_with_price(candles, kind, candles[candles.len() - 1].close)
}

/// Evaluate a strategy with an explicit current price (e.g. a live ticker
/// quote fresher than the last closed candle). The price only anchors the
/// take-profit level; signal logic always works off the candle window.
pub fn analyze_with_price(candles: &[Candle], kind: StrategyKind, price: f64) -> Decision {
    if candles.len() < MIN_CANDLES {
        return Decision::hold();
    }

    let indicators = IndicatorSet::compute(candles);
    let (signal, confidence) = match kind {
        StrategyKind::FvgLiquidity => fvg_liquidity::evaluate(candles, &indicators),
        StrategyKind::RsiMacd => rsi_macd::evaluate(&indicators),
        StrategyKind::BollingerBreakout => bollinger_breakout::evaluate(candles, &indicators),
    };

    Decision {
        signal,
        confidence,
        stop_loss: risk::stop_loss(candles, signal),
        take_profit: risk::take_profit(candles, signal, price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_candles;

    #[test]
    fn unknown_name_falls_back_to_fvg_liquidity() {
        assert_eq!(StrategyKind::from_name("fvg_liquidity"), StrategyKind::FvgLiquidity);
        assert_eq!(StrategyKind::from_name("rsi_macd"), StrategyKind::RsiMacd);
        assert_eq!(
            StrategyKind::from_name("bollinger_breakout"),
            StrategyKind::BollingerBreakout
        );
        assert_eq!(StrategyKind::from_name("does_not_exist"), StrategyKind::FvgLiquidity);
        assert_eq!(StrategyKind::from_name(""), StrategyKind::FvgLiquidity);
    }

    #[test]
    fn name_roundtrip() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&StrategyKind::BollingerBreakout).unwrap();
        assert_eq!(json, "\"bollinger_breakout\"");
    }

    #[test]
    fn short_window_holds_unconditionally() {
        let candles = make_candles(&[100.0; 19]);
        for kind in StrategyKind::ALL {
            assert_eq!(analyze(&candles, kind), Decision::hold());
        }
        for kind in StrategyKind::ALL {
            assert_eq!(analyze(&[], kind), Decision::hold());
        }
    }

    #[test]
    fn rsi_state_thresholds() {
        assert_eq!(RsiState::from_value(29.9), RsiState::Oversold);
        assert_eq!(RsiState::from_value(30.0), RsiState::Neutral);
        assert_eq!(RsiState::from_value(70.0), RsiState::Neutral);
        assert_eq!(RsiState::from_value(70.1), RsiState::Overbought);
    }

    #[test]
    fn macd_state_needs_sign_and_slope() {
        assert_eq!(MacdState::from_histogram(&[0.1, 0.2]), MacdState::Bullish);
        assert_eq!(MacdState::from_histogram(&[0.3, 0.2]), MacdState::Neutral); // positive but falling
        assert_eq!(MacdState::from_histogram(&[-0.1, -0.2]), MacdState::Bearish);
        assert_eq!(MacdState::from_histogram(&[-0.3, -0.2]), MacdState::Neutral); // negative but rising
        assert_eq!(MacdState::from_histogram(&[0.0, 0.0]), MacdState::Neutral);
        assert_eq!(MacdState::from_histogram(&[0.5]), MacdState::Neutral);
    }
}
