//! Candle ingestion and synthesis — the fallible edge around the pure core.

pub mod load;
pub mod sample;

pub use load::{read_candles_csv, read_candles_json, DataError};
pub use sample::SyntheticSeries;
