//! Domain types: candles in, decisions out.
//!
//! Everything here is a plain value. The core never holds shared mutable
//! state — each invocation owns its derived series and discards them.

pub mod candle;
pub mod decision;

pub use candle::Candle;
pub use decision::{Decision, Signal};
