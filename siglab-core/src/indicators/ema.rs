//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * value[t] + (1 - alpha) * EMA[t-1],
//! alpha = 2 / (period + 1).
//! Seed: EMA[0] = value[0], so every index carries a defined (if
//! under-warmed) value — there is no NaN warm-up region. A prefix of the
//! input always produces the same prefix of the output.

/// Compute an EMA over an arbitrary series.
///
/// Returns a series of the same length as the input. Empty input produces
/// an empty output.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "EMA period must be >= 1");

    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut result = vec![0.0; n];
    result[0] = values[0];

    let mut prev = values[0];
    for i in 1..n {
        let e = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = e;
        prev = e;
    }

    result
}
