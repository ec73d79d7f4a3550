//! Simple Moving Average (SMA) indicator.

use crate::error::{Result, SignalError};
use crate::types::Series;

/// SMA series: arithmetic mean of the trailing `period` values, aligned
/// with the input. The first `period - 1` positions are `None`.
pub fn sma_series(prices: &[f64], period: usize) -> Result<Series> {
    SignalError::check_len(prices.len(), period)?;

    let mut series: Series = vec![None; period - 1];
    for i in (period - 1)..prices.len() {
        let mean = prices[i + 1 - period..=i].iter().sum::<f64>() / period as f64;
        series.push(Some(mean));
    }

    Ok(series)
}
