//! MACD (Moving Average Convergence Divergence) indicator.

use crate::error::{Result, SignalError};
use crate::indicators::ema::ema_aligned;
use crate::types::{MacdSeries, Series};

/// MACD line family:
/// - MACD line = EMA(fast) - EMA(slow), defined where both EMAs are
/// - Signal line = EMA(signal) of the MACD line's defined values,
///   realigned to the original index positions
/// - Histogram = MACD - signal, defined where both are
pub fn macd_series(prices: &[f64], fast: usize, slow: usize, signal: usize) -> Result<MacdSeries> {
    SignalError::check_len(prices.len(), slow + signal)?;

    let fast_ema = ema_aligned(prices, fast);
    let slow_ema = ema_aligned(prices, slow);

    let macd: Series = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    let defined: Vec<f64> = macd.iter().filter_map(|v| *v).collect();
    let offset = macd.len() - defined.len();
    let mut signal_line: Series = vec![None; offset];
    signal_line.extend(ema_aligned(&defined, signal));

    let histogram: Series = macd
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    Ok(MacdSeries {
        macd,
        signal: signal_line,
        histogram,
    })
}
