//! Candle file loading — CSV and JSON boundaries.
//!
//! The analysis core itself is infallible; loading is where errors live.
//! Both loaders sort ascending by timestamp on the way in so downstream
//! code can rely on time order.

use crate::domain::Candle;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv parse failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("json parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read candles from a CSV file with a
/// `timestamp,open,high,low,close,volume` header.
pub fn read_candles_csv(path: &Path) -> Result<Vec<Candle>, DataError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut candles = Vec::new();
    for row in reader.deserialize() {
        let candle: Candle = row?;
        candles.push(candle);
    }
    candles.sort_by_key(|c| c.timestamp);
    Ok(candles)
}

/// Read candles from a JSON array of objects — the shape the kline
/// collaborator produces.
pub fn read_candles_json(path: &Path) -> Result<Vec<Candle>, DataError> {
    let text = std::fs::read_to_string(path)?;
    let mut candles: Vec<Candle> = serde_json::from_str(&text)?;
    candles.sort_by_key(|c| c.timestamp);
    Ok(candles)
}
