//! Pattern detection over the raw candle window: fair value gaps and
//! liquidity-zone proximity. Everything here is recomputed fully per call —
//! no incremental state.

pub mod fvg;
pub mod liquidity;

pub use fvg::{detect_fvg, FvgZone, GapDirection};
pub use liquidity::{
    liquidity_levels, near_liquidity_zone, LIQUIDITY_LOOKBACK, LIQUIDITY_THRESHOLD,
};
