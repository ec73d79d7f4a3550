//! Exponential Moving Average (EMA) indicator.

use crate::error::{Result, SignalError};
use crate::types::Series;

/// EMA series: SMA-seeded exponential smoothing with multiplier
/// `2 / (period + 1)`, aligned with the input. Same `period - 1` null
/// prefix as the SMA.
pub fn ema_series(prices: &[f64], period: usize) -> Result<Series> {
    SignalError::check_len(prices.len(), period)?;
    Ok(ema_aligned(prices, period))
}

/// EMA without the length check, for callers that already validated.
/// The seed value is the SMA of the first `period` samples.
pub(crate) fn ema_aligned(values: &[f64], period: usize) -> Series {
    let multiplier = 2.0 / (period as f64 + 1.0);

    let mut series: Series = vec![None; period - 1];
    let mut ema = values.iter().take(period).sum::<f64>() / period as f64;
    series.push(Some(ema));

    for value in values.iter().skip(period) {
        ema += multiplier * (value - ema);
        series.push(Some(ema));
    }

    series
}
