use serde::{Deserialize, Serialize};

/// An indicator series aligned index-for-index with its source candles.
///
/// Positions without enough trailing history to compute a value are `None`;
/// the length of that leading prefix is a fixed function of the indicator's
/// period (`period - 1` for SMA/EMA/Bollinger, `period` for RSI and ATR,
/// `slow + signal - 2` for MACD's signal line, `2 * period - 1` for ADX).
pub type Series = Vec<Option<f64>>;

/// Result of computing one indicator under the degrade-gracefully policy.
///
/// The aggregator never propagates `InsufficientData`; an indicator whose
/// minimum history is unmet becomes `Unavailable` carrying the counts, so
/// consumers can tell "neutral" apart from "not computable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum Computed<T> {
    Available { value: T },
    Unavailable { required: usize, available: usize },
}

impl<T> Computed<T> {
    /// The computed value, if the indicator had enough history.
    pub fn available(&self) -> Option<&T> {
        match self {
            Computed::Available { value } => Some(value),
            Computed::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Computed::Available { .. })
    }
}

/// MACD line family, all aligned with the source candles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacdSeries {
    /// EMA(fast) - EMA(slow), defined where both EMAs are.
    pub macd: Series,
    /// EMA(signal) of the MACD line, realigned to candle positions.
    pub signal: Series,
    /// MACD - signal, defined where both are.
    pub histogram: Series,
}

/// Bollinger band family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BollingerSeries {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

/// ADX family: trend strength plus its directional components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdxSeries {
    pub adx: Series,
    pub plus_di: Series,
    pub minus_di: Series,
}

/// Every indicator the engine computes for one candle history.
///
/// Each entry degrades independently; a short history yields a set where the
/// cheap indicators are `Available` and the expensive ones are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSet {
    pub sma20: Computed<Series>,
    pub ema12: Computed<Series>,
    pub ema20: Computed<Series>,
    pub ema26: Computed<Series>,
    pub ema50: Computed<Series>,
    pub ema200: Computed<Series>,
    pub rsi: Computed<Series>,
    pub macd: Computed<MacdSeries>,
    pub bollinger: Computed<BollingerSeries>,
    pub atr: Computed<Series>,
    pub adx: Computed<AdxSeries>,
}

/// Last defined value of a series.
pub fn last_value(series: &Series) -> Option<f64> {
    series.iter().rev().find_map(|v| *v)
}

/// Second-to-last defined value of a series.
pub fn previous_value(series: &Series) -> Option<f64> {
    series.iter().rev().filter_map(|v| *v).nth(1)
}
