//! Average True Range (ATR) indicator.

use crate::error::{Result, SignalError};
use crate::indicators::ema::ema_aligned;
use crate::types::{Candle, Series};

/// True range for one step:
/// `max(high - low, |high - prev_close|, |low - prev_close|)`.
pub(crate) fn true_range(current: &Candle, previous: &Candle) -> f64 {
    let hl = current.high - current.low;
    let hc = (current.high - previous.close).abs();
    let lc = (current.low - previous.close).abs();
    hl.max(hc).max(lc)
}

/// ATR series: EMA-style recurrence (multiplier `2 / (period + 1)`) over
/// the true ranges, seeded by their simple mean. Index 0 has no true range
/// and is always `None`.
pub fn atr_series(candles: &[Candle], period: usize) -> Result<Series> {
    SignalError::check_len(candles.len(), period + 1)?;

    let true_ranges: Vec<f64> = (1..candles.len())
        .map(|i| true_range(&candles[i], &candles[i - 1]))
        .collect();

    let mut series: Series = vec![None];
    series.extend(ema_aligned(&true_ranges, period));
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(high: f64, low: f64, close: f64) -> Candle {
        Candle::new(0, close, high, low, close, 1000.0)
    }

    fn volatile_candles(count: usize) -> Vec<Candle> {
        (0..count)
            .map(|i| {
                let base = 100.0 + (i as f64 * 0.4).sin() * 5.0;
                Candle::new(i as i64 * 60_000, base, base + 2.0, base - 2.0, base + 0.5, 1000.0)
            })
            .collect()
    }

    #[test]
    fn test_true_range_uses_previous_close() {
        let prev = candle(10.0, 8.0, 9.0);
        // Gap up: high - prev close dominates.
        let cur = candle(14.0, 13.0, 13.5);
        assert!((true_range(&cur, &prev) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_atr_length_and_prefix() {
        let candles = volatile_candles(40);
        let series = atr_series(&candles, 14).unwrap();
        assert_eq!(series.len(), 40);
        assert!(series[0].is_none());
        assert!(series[..14].iter().all(|v| v.is_none()));
        assert!(series[14..].iter().all(|v| v.is_some()));
    }

    #[test]
    fn test_atr_positive_for_moving_prices() {
        let candles = volatile_candles(40);
        let series = atr_series(&candles, 14).unwrap();
        for value in series.iter().flatten() {
            assert!(*value > 0.0);
        }
    }

    #[test]
    fn test_atr_seed_is_mean_of_true_ranges() {
        // Constant 4.0 range candles with no gaps: every TR is 4.0.
        let candles: Vec<Candle> = (0..20)
            .map(|i| Candle::new(i as i64, 100.0, 102.0, 98.0, 100.0, 1.0))
            .collect();
        let series = atr_series(&candles, 14).unwrap();
        assert_eq!(series[14], Some(4.0));
        assert_eq!(series[19], Some(4.0));
    }

    #[test]
    fn test_atr_insufficient_data() {
        let candles = volatile_candles(14);
        let err = atr_series(&candles, 14).unwrap_err();
        assert_eq!(
            err,
            SignalError::InsufficientData {
                required: 15,
                available: 14
            }
        );
    }
}
