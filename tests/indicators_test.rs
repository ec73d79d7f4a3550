//! Indicator engine tests.
//!
//! End-to-end checks on the indicator battery:
//! - Series alignment with the input candle sequence
//! - Warm-up (None) prefixes per indicator
//! - Graceful degradation on short histories
//! - Determinism across repeated runs

use omen::indicators::{
    adx_series, atr_series, bollinger_series, calculate_all, ema_series, macd_series, rsi_series,
    sma_series,
};
use omen::types::{closes, Computed};

mod common {
    use omen::types::Candle;

    /// Gentle sine-wave market around a base price.
    pub fn wave_candles(count: usize, base: f64) -> Vec<Candle> {
        (0..count)
            .map(|i| {
                let c = base + (i as f64 * 0.35).sin() * base * 0.03;
                Candle::new(i as i64 * 3_600_000, c, c + 1.0, c - 1.0, c, 1000.0)
            })
            .collect()
    }
}

#[test]
fn test_all_series_align_with_input() {
    let candles = common::wave_candles(300, 100.0);
    let set = calculate_all(&candles);
    let n = candles.len();

    assert_eq!(set.sma20.available().unwrap().len(), n);
    assert_eq!(set.ema12.available().unwrap().len(), n);
    assert_eq!(set.ema200.available().unwrap().len(), n);
    assert_eq!(set.rsi.available().unwrap().len(), n);
    assert_eq!(set.atr.available().unwrap().len(), n);

    let macd = set.macd.available().unwrap();
    assert_eq!(macd.macd.len(), n);
    assert_eq!(macd.signal.len(), n);
    assert_eq!(macd.histogram.len(), n);

    let bands = set.bollinger.available().unwrap();
    assert_eq!(bands.upper.len(), n);
    assert_eq!(bands.middle.len(), n);
    assert_eq!(bands.lower.len(), n);

    let adx = set.adx.available().unwrap();
    assert_eq!(adx.adx.len(), n);
    assert_eq!(adx.plus_di.len(), n);
    assert_eq!(adx.minus_di.len(), n);
}

#[test]
fn test_warm_up_prefixes() {
    let candles = common::wave_candles(300, 100.0);
    let prices = closes(&candles);

    let sma = sma_series(&prices, 20).unwrap();
    assert!(sma[..19].iter().all(Option::is_none));
    assert!(sma[19].is_some());

    let ema = ema_series(&prices, 20).unwrap();
    assert!(ema[..19].iter().all(Option::is_none));
    assert!(ema[19].is_some());

    let rsi = rsi_series(&prices, 14).unwrap();
    assert!(rsi[..14].iter().all(Option::is_none));
    assert!(rsi[14].is_some());

    let macd = macd_series(&prices, 12, 26, 9).unwrap();
    assert!(macd.macd[..25].iter().all(Option::is_none));
    assert!(macd.macd[25].is_some());
    assert!(macd.signal[..33].iter().all(Option::is_none));
    assert!(macd.signal[33].is_some());
    assert!(macd.histogram[33].is_some());

    let bands = bollinger_series(&prices, 20, 2.0).unwrap();
    assert!(bands.upper[..19].iter().all(Option::is_none));
    assert!(bands.upper[19].is_some());

    let atr = atr_series(&candles, 14).unwrap();
    assert!(atr[..14].iter().all(Option::is_none));
    assert!(atr[14].is_some());

    let adx = adx_series(&candles, 14).unwrap();
    assert!(adx.plus_di[..14].iter().all(Option::is_none));
    assert!(adx.plus_di[14].is_some());
    assert!(adx.adx[..27].iter().all(Option::is_none));
    assert!(adx.adx[27].is_some());
}

#[test]
fn test_macd_histogram_identity() {
    let candles = common::wave_candles(120, 50.0);
    let macd = macd_series(&closes(&candles), 12, 26, 9).unwrap();
    for i in 0..macd.macd.len() {
        if let (Some(line), Some(signal), Some(hist)) = (macd.macd[i], macd.signal[i], macd.histogram[i]) {
            assert!((hist - (line - signal)).abs() < 1e-9, "index {i}");
        }
    }
}

#[test]
fn test_bollinger_band_ordering() {
    let candles = common::wave_candles(80, 200.0);
    let bands = bollinger_series(&closes(&candles), 20, 2.0).unwrap();
    for i in 19..bands.middle.len() {
        let upper = bands.upper[i].unwrap();
        let middle = bands.middle[i].unwrap();
        let lower = bands.lower[i].unwrap();
        assert!(upper >= middle && middle >= lower, "index {i}");
    }
}

#[test]
fn test_short_history_degrades_per_indicator() {
    // 15 candles: RSI needs exactly 15 closes, ADX needs 28.
    let candles = common::wave_candles(15, 100.0);
    let set = calculate_all(&candles);

    assert!(set.ema12.is_available());
    assert!(set.rsi.is_available());
    assert!(set.atr.is_available());
    assert!(!set.sma20.is_available());
    assert!(!set.macd.is_available());
    assert!(!set.adx.is_available());
    assert!(!set.ema200.is_available());

    match &set.adx {
        Computed::Unavailable { required, available } => {
            assert_eq!(*required, 28);
            assert_eq!(*available, 15);
        }
        Computed::Available { .. } => panic!("expected unavailable adx"),
    }
}

#[test]
fn test_battery_is_deterministic() {
    let candles = common::wave_candles(250, 100.0);
    let a = calculate_all(&candles);
    let b = calculate_all(&candles);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_rsi_stays_in_range() {
    let candles = common::wave_candles(200, 100.0);
    let rsi = rsi_series(&closes(&candles), 14).unwrap();
    for value in rsi.iter().flatten() {
        assert!((0.0..=100.0).contains(value));
    }
}
