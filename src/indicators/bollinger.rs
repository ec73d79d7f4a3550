//! Bollinger Bands indicator.

use crate::error::{Result, SignalError};
use crate::types::{BollingerSeries, Series};

/// Bollinger bands: middle = SMA(period), half-width = `std_dev` times the
/// population standard deviation of the trailing window (divide by
/// `period`, not `period - 1`).
pub fn bollinger_series(prices: &[f64], period: usize, std_dev: f64) -> Result<BollingerSeries> {
    SignalError::check_len(prices.len(), period)?;

    let mut upper: Series = vec![None; period - 1];
    let mut middle: Series = vec![None; period - 1];
    let mut lower: Series = vec![None; period - 1];

    for i in (period - 1)..prices.len() {
        let window = &prices[i + 1 - period..=i];
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
        let half_width = std_dev * variance.sqrt();

        middle.push(Some(mean));
        upper.push(Some(mean + half_width));
        lower.push(Some(mean - half_width));
    }

    Ok(BollingerSeries {
        upper,
        middle,
        lower,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bollinger_lengths_and_prefix() {
        let prices: Vec<f64> = (0..40).map(|v| 100.0 + (v as f64).cos() * 3.0).collect();
        let bands = bollinger_series(&prices, 20, 2.0).unwrap();
        assert_eq!(bands.upper.len(), 40);
        assert_eq!(bands.middle.len(), 40);
        assert_eq!(bands.lower.len(), 40);
        assert!(bands.middle[..19].iter().all(|v| v.is_none()));
        assert!(bands.middle[19..].iter().all(|v| v.is_some()));
    }

    #[test]
    fn test_bollinger_band_ordering() {
        let prices: Vec<f64> = (0..60).map(|v| 100.0 + (v as f64 * 0.5).sin() * 8.0).collect();
        let bands = bollinger_series(&prices, 20, 2.0).unwrap();
        for i in 0..prices.len() {
            if let (Some(u), Some(m), Some(l)) = (bands.upper[i], bands.middle[i], bands.lower[i]) {
                assert!(u >= m && m >= l);
            }
        }
    }

    #[test]
    fn test_bollinger_zero_variance_collapses_bands() {
        let prices = vec![50.0; 25];
        let bands = bollinger_series(&prices, 20, 2.0).unwrap();
        let i = 24;
        assert_eq!(bands.upper[i], Some(50.0));
        assert_eq!(bands.middle[i], Some(50.0));
        assert_eq!(bands.lower[i], Some(50.0));
    }

    #[test]
    fn test_bollinger_population_std_dev() {
        // Window [1, 3]: mean 2, population variance 1, std dev 1.
        let prices = vec![1.0, 3.0];
        let bands = bollinger_series(&prices, 2, 2.0).unwrap();
        assert_eq!(bands.middle[1], Some(2.0));
        assert_eq!(bands.upper[1], Some(4.0));
        assert_eq!(bands.lower[1], Some(0.0));
    }

    #[test]
    fn test_bollinger_insufficient_data() {
        let prices = vec![1.0; 10];
        assert!(bollinger_series(&prices, 20, 2.0).is_err());
    }
}
