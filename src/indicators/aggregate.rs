//! Defensive aggregation of the full indicator battery.

use tracing::debug;

use crate::error::{Result, SignalError};
use crate::indicators::{
    adx_series, atr_series, bollinger_series, ema_series, macd_series, rsi_series, sma_series,
};
use crate::types::{closes, Candle, Computed, IndicatorSet};

/// Compute every indicator the scorer consumes, degrading each one
/// independently.
///
/// An indicator whose minimum history is unmet becomes
/// `Computed::Unavailable` carrying the required/available counts instead
/// of propagating the failure; the scorer then treats it as neutral. The
/// degrade is logged so a fully neutral recommendation can be traced back
/// to missing history.
pub fn calculate_all(candles: &[Candle]) -> IndicatorSet {
    let prices = closes(candles);

    IndicatorSet {
        sma20: computed("sma20", sma_series(&prices, 20)),
        ema12: computed("ema12", ema_series(&prices, 12)),
        ema20: computed("ema20", ema_series(&prices, 20)),
        ema26: computed("ema26", ema_series(&prices, 26)),
        ema50: computed("ema50", ema_series(&prices, 50)),
        ema200: computed("ema200", ema_series(&prices, 200)),
        rsi: computed("rsi", rsi_series(&prices, 14)),
        macd: computed("macd", macd_series(&prices, 12, 26, 9)),
        bollinger: computed("bollinger", bollinger_series(&prices, 20, 2.0)),
        atr: computed("atr", atr_series(candles, 14)),
        adx: computed("adx", adx_series(candles, 14)),
    }
}

fn computed<T>(name: &str, result: Result<T>) -> Computed<T> {
    match result {
        Ok(value) => Computed::Available { value },
        Err(SignalError::InsufficientData {
            required,
            available,
        }) => {
            debug!(
                "{} unavailable: need {} candles, have {}",
                name, required, available
            );
            Computed::Unavailable {
                required,
                available,
            }
        }
        Err(SignalError::EmptyHistory) => {
            debug!("{} unavailable: empty history", name);
            Computed::Unavailable {
                required: 1,
                available: 0,
            }
        }
    }
}
