//! Bollinger Bands — rolling mean +/- standard deviation multiplier.
//!
//! - Middle: SMA(close, period)
//! - Upper: middle + mult * stddev
//! - Lower: middle - mult * stddev
//!
//! Uses population stddev (divide by N). Warm-up indices (and whole series
//! shorter than `period`) carry the raw close in all three bands, so the
//! output is always fully populated.

/// The three bands, aligned index-for-index with the input closes.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Compute Bollinger Bands over a close series.
///
/// Invariant: `upper[i] >= middle[i] >= lower[i]` for all indices when
/// `mult >= 0` (stddev is never negative).
pub fn bollinger(closes: &[f64], period: usize, mult: f64) -> BollingerBands {
    assert!(period >= 1, "Bollinger period must be >= 1");

    let n = closes.len();
    if n < period {
        return BollingerBands {
            upper: closes.to_vec(),
            middle: closes.to_vec(),
            lower: closes.to_vec(),
        };
    }

    let mut upper = Vec::with_capacity(n);
    let mut middle = Vec::with_capacity(n);
    let mut lower = Vec::with_capacity(n);

    for i in 0..n {
        if i + 1 < period {
            // Warm-up: no full window yet, bands sit on the raw close.
            upper.push(closes[i]);
            middle.push(closes[i]);
            lower.push(closes[i]);
            continue;
        }

        let window = &closes[i + 1 - period..=i];
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance = window
            .iter()
            .map(|&x| {
                let diff = x - mean;
                diff * diff
            })
            .sum::<f64>()
            / period as f64;
        let stddev = variance.sqrt();

        upper.push(mean + mult * stddev);
        middle.push(mean);
        lower.push(mean - mult * stddev);
    }

    BollingerBands {
        upper,
        middle,
        lower,
    }
}
