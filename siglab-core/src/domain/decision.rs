//! Decision — the sole output artifact of the analysis core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional intent of a decision.
///
/// Serialized uppercase (`"BUY"` / `"SELL"` / `"HOLD"`) to match the wire
/// shape the presentation collaborator expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// True for Buy/Sell — the signals that carry risk levels.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Self::Hold)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Hold => write!(f, "HOLD"),
        }
    }
}

/// A complete trading decision for one candle window.
///
/// Carries no identity or lifecycle beyond the call that produced it.
/// `confidence` is in `[0, 1]`; `stop_loss`/`take_profit` are price levels,
/// `0.0` when no level applies (Hold, or too little history).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub signal: Signal,
    pub confidence: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
}

impl Decision {
    /// The neutral decision: Hold with zero confidence and no risk levels.
    pub fn hold() -> Self {
        Self {
            signal: Signal::Hold,
            confidence: 0.0,
            stop_loss: 0.0,
            take_profit: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hold_decision_is_neutral() {
        let d = Decision::hold();
        assert_eq!(d.signal, Signal::Hold);
        assert_eq!(d.confidence, 0.0);
        assert_eq!(d.stop_loss, 0.0);
        assert_eq!(d.take_profit, 0.0);
    }

    #[test]
    fn signal_actionable() {
        assert!(Signal::Buy.is_actionable());
        assert!(Signal::Sell.is_actionable());
        assert!(!Signal::Hold.is_actionable());
    }

    #[test]
    fn signal_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&Signal::Hold).unwrap(), "\"HOLD\"");
    }

    #[test]
    fn decision_serialization_roundtrip() {
        let d = Decision {
            signal: Signal::Sell,
            confidence: 0.85,
            stop_loss: 105.5,
            take_profit: 94.0,
        };
        let json = serde_json::to_string(&d).unwrap();
        let deser: Decision = serde_json::from_str(&json).unwrap();
        assert_eq!(d, deser);
    }
}
