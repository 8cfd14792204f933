//! Average True Range (ATR), unsmoothed.
//!
//! True Range: max(high-low, |high-prev_close|, |low-prev_close|).
//! The risk calculator uses a simple mean of true ranges over the trailing
//! intervals — no Wilder smoothing — so it stays a pure lookback statistic.

use crate::domain::Candle;

/// True range of a candle against the previous close.
pub fn true_range(candle: &Candle, prev_close: f64) -> f64 {
    (candle.high - candle.low)
        .max((candle.high - prev_close).abs())
        .max((candle.low - prev_close).abs())
}

/// Simple mean of the true ranges over up to the last `period` intervals.
///
/// An interval needs a previous close, so `n` candles give at most `n - 1`
/// intervals. Fewer than two candles → 0.0 (defined degraded output).
pub fn average_true_range(candles: &[Candle], period: usize) -> f64 {
    let n = candles.len();
    if n < 2 || period == 0 {
        return 0.0;
    }

    let intervals = period.min(n - 1);
    let mut sum = 0.0;
    for i in (n - intervals)..n {
        sum += true_range(&candles[i], candles[i - 1].close);
    }
    sum / intervals as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_ohlc_candles, DEFAULT_EPSILON};

    #[test]
    fn true_range_plain_range() {
        let candles = make_ohlc_candles(&[(100.0, 105.0, 95.0, 102.0), (102.0, 108.0, 100.0, 106.0)]);
        // max(8, |108-102|, |100-102|) = 8
        assert_approx(true_range(&candles[1], candles[0].close), 8.0, DEFAULT_EPSILON);
    }

    #[test]
    fn true_range_gap_up() {
        // Prev close 100, current bar 108..115 → TR spans the gap
        let candles = make_ohlc_candles(&[(98.0, 102.0, 97.0, 100.0), (110.0, 115.0, 108.0, 112.0)]);
        assert_approx(true_range(&candles[1], 100.0), 15.0, DEFAULT_EPSILON);
    }

    #[test]
    fn atr_too_few_candles_is_zero() {
        let candles = make_ohlc_candles(&[(100.0, 105.0, 95.0, 102.0)]);
        assert_eq!(average_true_range(&candles, 14), 0.0);
        assert_eq!(average_true_range(&[], 14), 0.0);
    }

    #[test]
    fn atr_simple_mean() {
        let candles = make_ohlc_candles(&[
            (100.0, 105.0, 95.0, 102.0),
            (102.0, 108.0, 100.0, 106.0), // TR = 8
            (106.0, 107.0, 98.0, 99.0),   // TR = 9
            (99.0, 103.0, 97.0, 101.0),   // TR = 6
        ]);
        // 3 intervals, simple mean = (8 + 9 + 6) / 3
        assert_approx(average_true_range(&candles, 14), 23.0 / 3.0, DEFAULT_EPSILON);
    }

    #[test]
    fn atr_caps_at_period_intervals() {
        // 20 identical candles with TR = 10 each; only the last 5 count
        let rows: Vec<(f64, f64, f64, f64)> = (0..20).map(|_| (100.0, 105.0, 95.0, 100.0)).collect();
        let candles = make_ohlc_candles(&rows);
        assert_approx(average_true_range(&candles, 5), 10.0, DEFAULT_EPSILON);
    }

    #[test]
    fn atr_flat_candles_is_zero() {
        let rows: Vec<(f64, f64, f64, f64)> = (0..10).map(|_| (100.0, 100.0, 100.0, 100.0)).collect();
        let candles = make_ohlc_candles(&rows);
        assert_approx(average_true_range(&candles, 14), 0.0, DEFAULT_EPSILON);
    }
}
