//! Relative Strength Index (RSI).
//!
//! Wilder smoothing of average gains and average losses:
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss).
//!
//! Degraded mode: with fewer than `period + 1` closes the whole series is
//! the neutral 50.0 — a defined output, not an error. The first `period`
//! indices repeat the seed RSI (flat warm-up region); downstream consumers
//! rely on that exact shape.

/// Neutral RSI value emitted when there is not enough data to smooth.
pub const RSI_NEUTRAL: f64 = 50.0;

/// Compute RSI over a close series.
///
/// Seed averages use the first `period` deltas with divisor `period` (not
/// the count of gains/losses). Edge cases: no losses → 100, no gains → 0,
/// no movement at all → 50.
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "RSI period must be >= 1");

    let n = closes.len();
    if n < period + 1 {
        return vec![RSI_NEUTRAL; n];
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    // Seed: average gain/loss over the first `period` deltas.
    let mut up = 0.0;
    let mut down = 0.0;
    for &d in &deltas[..period] {
        if d >= 0.0 {
            up += d;
        } else {
            down -= d;
        }
    }
    up /= period as f64;
    down /= period as f64;

    let mut result = vec![0.0; n];
    let seed = rsi_value(up, down);
    for slot in result.iter_mut().take(period) {
        *slot = seed;
    }

    // Wilder smoothing for subsequent indices.
    for i in period..n {
        let delta = deltas[i - 1];
        let (gain, loss) = if delta > 0.0 {
            (delta, 0.0)
        } else {
            (0.0, -delta)
        };
        up = (up * (period as f64 - 1.0) + gain) / period as f64;
        down = (down * (period as f64 - 1.0) + loss) / period as f64;
        result[i] = rsi_value(up, down);
    }

    result
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        RSI_NEUTRAL // no movement
    } else if avg_loss == 0.0 {
        100.0
    } else if avg_gain == 0.0 {
        0.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn rsi_short_input_is_all_neutral() {
        let closes = [100.0, 101.0, 99.0];
        let result = rsi(&closes, 14);
        assert_eq!(result.len(), 3);
        for &v in &result {
            assert_approx(v, 50.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn rsi_exactly_period_closes_is_still_neutral() {
        // period + 1 closes are required; period closes is one short
        let result = rsi(&[100.0; 14], 14);
        assert_eq!(result.len(), 14);
        assert!(result.iter().all(|&v| v == 50.0));
    }

    #[test]
    fn rsi_all_gains() {
        let closes = [100.0, 101.0, 102.0, 103.0, 104.0, 105.0];
        let result = rsi(&closes, 3);
        // No losses ever → pinned at 100
        assert_approx(result[3], 100.0, 1e-6);
        assert_approx(result[5], 100.0, 1e-6);
    }

    #[test]
    fn rsi_all_losses() {
        let closes = [105.0, 104.0, 103.0, 102.0, 101.0, 100.0];
        let result = rsi(&closes, 3);
        assert_approx(result[3], 0.0, 1e-6);
        assert_approx(result[5], 0.0, 1e-6);
    }

    #[test]
    fn rsi_flat_series_is_neutral() {
        let result = rsi(&[100.0; 30], 14);
        for &v in &result {
            assert_approx(v, 50.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn rsi_warm_up_region_is_flat_seed() {
        let closes = [44.0, 44.34, 44.09, 43.61, 44.33, 44.83, 45.1];
        let result = rsi(&closes, 3);
        // First `period` values all equal the seed RSI
        assert_approx(result[0], result[1], DEFAULT_EPSILON);
        assert_approx(result[1], result[2], DEFAULT_EPSILON);
        // The seed itself: gains = 0.34, losses = 0.25 + 0.48 = 0.73, both / 3
        // RSI = 100 - 100/(1 + 0.34/0.73) ≈ 31.7757
        assert_approx(result[0], 100.0 - 100.0 / (1.0 + 0.34 / 0.73), 1e-9);
    }

    #[test]
    fn rsi_bounds() {
        let closes = [100.0, 105.0, 98.0, 110.0, 95.0, 115.0, 90.0, 120.0];
        let result = rsi(&closes, 3);
        for (i, &v) in result.iter().enumerate() {
            assert!(
                (0.0..=100.0).contains(&v),
                "RSI out of bounds at index {i}: {v}"
            );
        }
    }

    #[test]
    fn rsi_length_matches_input() {
        for len in 0..40 {
            let closes: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
            assert_eq!(rsi(&closes, 14).len(), len);
        }
    }
}
