//! Relative Strength Index (RSI) indicator.

use crate::error::{Result, SignalError};
use crate::types::Series;

/// RSI series using Wilder smoothing.
///
/// The seed average gain/loss is the simple mean of the first `period`
/// deltas; subsequent averages use `avg = (avg * (period - 1) + new) / period`.
/// Because the first sample has no preceding delta, the null prefix is one
/// longer than the SMA's: `period` positions.
pub fn rsi_series(prices: &[f64], period: usize) -> Result<Series> {
    SignalError::check_len(prices.len(), period + 1)?;

    let mut gains = Vec::with_capacity(prices.len() - 1);
    let mut losses = Vec::with_capacity(prices.len() - 1);
    for i in 1..prices.len() {
        let change = prices[i] - prices[i - 1];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    let mut series: Series = vec![None; period];
    let mut avg_gain = gains.iter().take(period).sum::<f64>() / period as f64;
    let mut avg_loss = losses.iter().take(period).sum::<f64>() / period as f64;
    series.push(Some(rsi_value(avg_gain, avg_loss)));

    for i in period..gains.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
        series.push(Some(rsi_value(avg_gain, avg_loss)));
    }

    Ok(series)
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
