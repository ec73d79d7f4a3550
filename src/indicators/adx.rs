//! Average Directional Index (ADX) indicator with its +DI/-DI components.

use crate::error::{Result, SignalError};
use crate::indicators::atr::true_range;
use crate::indicators::ema::ema_aligned;
use crate::types::{AdxSeries, Candle, Series};

/// Wilder's smoothed running sum: seeded by the sum of the first `period`
/// values, then `smoothed = smoothed - smoothed / period + new`.
fn wilder_smooth_sum(values: &[f64], period: usize) -> Vec<f64> {
    let mut smoothed = Vec::with_capacity(values.len() + 1 - period);
    let mut current: f64 = values.iter().take(period).sum();
    smoothed.push(current);

    for value in values.iter().skip(period) {
        current = current - current / period as f64 + value;
        smoothed.push(current);
    }

    smoothed
}

/// ADX series plus directional components, aligned with the candles.
///
/// Per step exactly one of +DM/-DM is nonzero; ties and non-positive moves
/// yield both zero. +DI/-DI are `100 * smoothed(DM) / smoothed(TR)` (zero
/// when the smoothed TR is zero), DX is `100 * |+DI - -DI| / (+DI + -DI)`
/// (zero when the denominator is), and ADX is an EMA(period) of the DX
/// sequence realigned to the candle axis with its leading nulls.
pub fn adx_series(candles: &[Candle], period: usize) -> Result<AdxSeries> {
    SignalError::check_len(candles.len(), period * 2)?;

    let mut plus_dm = Vec::with_capacity(candles.len() - 1);
    let mut minus_dm = Vec::with_capacity(candles.len() - 1);
    let mut true_ranges = Vec::with_capacity(candles.len() - 1);

    for i in 1..candles.len() {
        let current = &candles[i];
        let previous = &candles[i - 1];

        let up_move = current.high - previous.high;
        let down_move = previous.low - current.low;

        plus_dm.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
        true_ranges.push(true_range(current, previous));
    }

    let smoothed_plus = wilder_smooth_sum(&plus_dm, period);
    let smoothed_minus = wilder_smooth_sum(&minus_dm, period);
    let smoothed_tr = wilder_smooth_sum(&true_ranges, period);

    // First smoothed value sits at candle index `period`.
    let mut plus_di: Series = vec![None; period];
    let mut minus_di: Series = vec![None; period];
    let mut dx_values = Vec::with_capacity(smoothed_tr.len());

    for i in 0..smoothed_tr.len() {
        let (pdi, mdi) = if smoothed_tr[i] == 0.0 {
            (0.0, 0.0)
        } else {
            (
                100.0 * smoothed_plus[i] / smoothed_tr[i],
                100.0 * smoothed_minus[i] / smoothed_tr[i],
            )
        };
        plus_di.push(Some(pdi));
        minus_di.push(Some(mdi));

        let di_sum = pdi + mdi;
        dx_values.push(if di_sum == 0.0 {
            0.0
        } else {
            100.0 * (pdi - mdi).abs() / di_sum
        });
    }

    let mut adx: Series = vec![None; period];
    adx.extend(ema_aligned(&dx_values, period));

    Ok(AdxSeries {
        adx,
        plus_di,
        minus_di,
    })
}
