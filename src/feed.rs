//! Candle ingestion boundary.

use crate::types::Candle;

/// Source of historical candles for one symbol.
///
/// Implementations fetch from an exchange, a database, or a fixture
/// file; the analysis pipeline itself never performs I/O. Candles must
/// be returned oldest-first with no gaps the caller cares about; the
/// engine assumes that ordering and does not re-validate it.
pub trait CandleSource {
    type Error;

    /// Fetch up to `limit` candles for `symbol` at the given interval
    /// (for example `"1h"`), oldest first.
    fn candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> std::result::Result<Vec<Candle>, Self::Error>;
}
