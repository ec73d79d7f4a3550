use serde::{Deserialize, Serialize};

/// A single OHLCV candle.
///
/// A sequence of candles is always ordered ascending by timestamp with no
/// duplicates; every component in this crate assumes that ordering and never
/// re-validates it. Callers own the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Unix timestamp (milliseconds) of the candle open.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Extract the close series from a candle slice.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closes_preserves_order() {
        let candles = vec![
            Candle::new(0, 1.0, 2.0, 0.5, 1.5, 10.0),
            Candle::new(60_000, 1.5, 2.5, 1.0, 2.0, 12.0),
        ];
        assert_eq!(closes(&candles), vec![1.5, 2.0]);
    }
}
