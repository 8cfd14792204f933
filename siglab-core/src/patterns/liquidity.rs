//! Liquidity zone proximity.
//!
//! Recent highs and lows are treated as likely reaction points. A price is
//! "near" a zone when its relative distance to any reference level falls
//! under the threshold.

use crate::domain::Candle;

/// Default relative-distance threshold (0.15%).
pub const LIQUIDITY_THRESHOLD: f64 = 0.0015;
/// Default number of trailing candles whose highs/lows form the zone set.
pub const LIQUIDITY_LOOKBACK: usize = 10;

/// Highs then lows of the most recent `lookback` candles.
pub fn liquidity_levels(candles: &[Candle], lookback: usize) -> Vec<f64> {
    let start = candles.len().saturating_sub(lookback);
    let tail = &candles[start..];
    tail.iter()
        .map(|c| c.high)
        .chain(tail.iter().map(|c| c.low))
        .collect()
}

/// True if `price` is within `threshold` relative distance of any level.
///
/// A zero or non-finite reference level cannot anchor a relative distance;
/// it counts as "not near" instead of dividing through it.
pub fn near_liquidity_zone(price: f64, levels: &[f64], threshold: f64) -> bool {
    levels
        .iter()
        .any(|&z| z != 0.0 && z.is_finite() && ((price - z) / z).abs() < threshold)
}
