//! siglab core — turns a window of price candles into a trading decision.
//!
//! - Domain types (candles, signals, decisions)
//! - Indicator engine (RSI, MACD, Bollinger Bands, ATR)
//! - Pattern detection (fair value gaps, liquidity proximity)
//! - Strategy evaluation (fvg_liquidity, rsi_macd, bollinger_breakout)
//! - Risk levels (lookback stop-loss, ATR take-profit)
//!
//! The analysis path is pure and infallible: insufficient or degenerate
//! input maps to documented neutral outputs (RSI 50, zero MACD, flat bands,
//! Hold decisions, zero risk levels) rather than errors, so the caller's
//! presentation loop never needs a failure branch. Each invocation is a
//! pure function of its inputs — no state survives a call, and disjoint
//! windows may be analyzed concurrently without synchronization.

pub mod data;
pub mod domain;
pub mod indicators;
pub mod patterns;
pub mod risk;
pub mod strategy;

pub use domain::{Candle, Decision, Signal};
pub use strategy::{analyze, analyze_with_price, StrategyKind};
