use serde::{Deserialize, Serialize};

/// Final categorical recommendation, derived from composite score, entry
/// quality, and warning severities together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalStatus {
    StrongBuyNow,
    BuyPartial,
    WatchForPullback,
    Hold,
    Sell,
    StrongSell,
}

impl SignalStatus {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            SignalStatus::StrongBuyNow => "Strong Buy Now",
            SignalStatus::BuyPartial => "Buy Partial",
            SignalStatus::WatchForPullback => "Watch For Pullback",
            SignalStatus::Hold => "Hold",
            SignalStatus::Sell => "Sell",
            SignalStatus::StrongSell => "Strong Sell",
        }
    }
}

/// Legacy 5-value recommendation derived from the composite score alone,
/// kept for simpler consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Advice {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl Advice {
    /// Fixed thresholds at 60/50/40/30.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 60.0 => Advice::StrongBuy,
            s if s >= 50.0 => Advice::Buy,
            s if s >= 40.0 => Advice::Hold,
            s if s >= 30.0 => Advice::Sell,
            _ => Advice::StrongSell,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Advice::StrongBuy => "Strong Buy",
            Advice::Buy => "Buy",
            Advice::Hold => "Hold",
            Advice::Sell => "Sell",
            Advice::StrongSell => "Strong Sell",
        }
    }
}

/// Severity of an overheat warning. Downstream classification reads
/// severity, not the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Medium,
    High,
}

/// Which overheat rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    RsiOverbought,
    AboveUpperBand,
    RapidRise,
    ExtendedAboveEma,
    TrendOverextended,
}

/// One overheat warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub kind: WarningKind,
    pub severity: Severity,
    /// The measured value that tripped the rule (RSI level, percent move, ...).
    pub value: f64,
    pub message: String,
}

/// ATR-based stop-loss levels for a position opened at the current close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLoss {
    /// Stop for a long position: close - 2 * ATR.
    pub long: f64,
    /// Stop for a short position: close + 2 * ATR.
    pub short: f64,
    /// Absolute stop distance, 2 * ATR.
    pub distance: f64,
    /// Stop distance as a percentage of the close.
    pub distance_pct: f64,
}

/// Per-indicator sub-scores, each in [0,100] centered on 50.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub long_term_trend: f64,
    pub macd: f64,
    pub ema_cross: f64,
    pub adx: f64,
    pub rsi: f64,
    pub bollinger: f64,
}

/// The final recommendation object. Immutable once produced; plain data
/// with no live bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Composite score in [0,100], rounded to one decimal.
    pub score: f64,
    pub signal_status: SignalStatus,
    /// Legacy 5-value advice from the composite score alone.
    pub advice: Advice,
    /// Independent "is now a good entry" score in [0,100].
    pub entry_quality: f64,
    pub warnings: Vec<Warning>,
    pub breakdown: ScoreBreakdown,
    /// `None` when ATR was unavailable.
    pub stop_loss: Option<StopLoss>,
    pub current_price: f64,
    /// Unix timestamp (milliseconds) when computed.
    pub timestamp: i64,
}
