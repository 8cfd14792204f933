//! Fair Value Gap (FVG) detection.
//!
//! A fair value gap is a price interval with no trading overlap between two
//! consecutive candles: the market jumped over it. Price revisiting such a
//! zone is read as filling an imbalance.

use crate::domain::Candle;
use serde::{Deserialize, Serialize};

/// Which way the market jumped to leave the gap behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapDirection {
    GapUp,
    GapDown,
}

/// One untraded price interval between two adjacent candles.
///
/// `low_bound < high_bound` always; the bounds are exclusive for the
/// containment test (a price sitting exactly on an edge traded there).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FvgZone {
    pub direction: GapDirection,
    pub low_bound: f64,
    pub high_bound: f64,
}

impl FvgZone {
    /// True if `price` sits strictly inside the gap.
    pub fn contains(&self, price: f64) -> bool {
        self.low_bound < price && price < self.high_bound
    }
}

/// Scan adjacent candle pairs for fair value gaps.
///
/// `curr.low > prev.high` → GapUp zone `(prev.high, curr.low)`;
/// `curr.high < prev.low` → GapDown zone `(curr.high, prev.low)`.
/// One zone per qualifying pair, in window order, recomputed fully per call.
pub fn detect_fvg(candles: &[Candle]) -> Vec<FvgZone> {
    let mut zones = Vec::new();
    for pair in candles.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        if curr.low > prev.high {
            zones.push(FvgZone {
                direction: GapDirection::GapUp,
                low_bound: prev.high,
                high_bound: curr.low,
            });
        } else if curr.high < prev.low {
            zones.push(FvgZone {
                direction: GapDirection::GapDown,
                low_bound: curr.high,
                high_bound: prev.low,
            });
        }
    }
    zones
}
