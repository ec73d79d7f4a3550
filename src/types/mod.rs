//! Plain data types exchanged with collaborators: candles in, indicator
//! series, pattern matches and recommendations out.

pub mod candle;
pub mod indicator;
pub mod pattern;
pub mod recommendation;

pub use candle::{closes, Candle};
pub use indicator::{
    last_value, previous_value, AdxSeries, BollingerSeries, Computed, IndicatorSet, MacdSeries,
    Series,
};
pub use pattern::{
    Bias, LevelKind, PatternKind, PatternMatch, PatternScan, PatternSummary, PivotKind,
    PivotPoint, PriceLevel, SupportResistance,
};
pub use recommendation::{
    Advice, Recommendation, ScoreBreakdown, Severity, SignalStatus, StopLoss, Warning,
    WarningKind,
};
