//! Composite scoring and signal classification.

use crate::config::{ScoreWeights, ScoringConfig};
use crate::error::{Result, SignalError};
use crate::indicators::calculate_all;
use crate::scoring::{entry, scores, trend, warnings};
use crate::types::{
    last_value, Advice, Candle, IndicatorSet, Recommendation, ScoreBreakdown, Severity,
    SignalStatus, StopLoss, Warning,
};

/// Compute the full recommendation for one candle history.
///
/// Fails only on an empty candle sequence; every other data shortfall
/// degrades to neutral contributions instead.
pub fn recommend(candles: &[Candle], config: &ScoringConfig) -> Result<Recommendation> {
    let indicators = calculate_all(candles);
    recommend_with(candles, &indicators, config)
}

/// As [`recommend`], for callers that already hold the indicator set.
pub fn recommend_with(
    candles: &[Candle],
    indicators: &IndicatorSet,
    config: &ScoringConfig,
) -> Result<Recommendation> {
    let last = candles.last().ok_or(SignalError::EmptyHistory)?;
    let close = last.close;

    let breakdown = ScoreBreakdown {
        long_term_trend: trend::long_term_trend_score(candles),
        macd: scores::macd_score(indicators),
        ema_cross: scores::ema_cross_score(indicators),
        adx: scores::adx_score(indicators),
        rsi: scores::rsi_score(indicators),
        bollinger: scores::bollinger_score(indicators, close),
    };
    let score = composite_score(&breakdown, &config.weights);
    let entry_quality = entry::entry_quality_score(candles, indicators);
    let warnings = warnings::overheat_warnings(candles, indicators);
    let signal_status = classify(score, entry_quality, &warnings, config);

    Ok(Recommendation {
        score,
        signal_status,
        advice: Advice::from_score(score),
        entry_quality,
        warnings,
        breakdown,
        stop_loss: stop_loss(close, indicators, config),
        current_price: close,
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
}

/// Weighted ensemble of the six sub-scores, rounded to one decimal.
pub fn composite_score(breakdown: &ScoreBreakdown, weights: &ScoreWeights) -> f64 {
    let raw = weights.long_term_trend * breakdown.long_term_trend
        + weights.macd * breakdown.macd
        + weights.ema_cross * breakdown.ema_cross
        + weights.adx * breakdown.adx
        + weights.rsi * breakdown.rsi
        + weights.bollinger * breakdown.bollinger;
    (raw * 10.0).round() / 10.0
}

/// ATR stop distances for a position opened at `close`; `None` when ATR
/// is unavailable.
fn stop_loss(close: f64, indicators: &IndicatorSet, config: &ScoringConfig) -> Option<StopLoss> {
    let atr = last_value(indicators.atr.available()?)?;
    let distance = config.stop_loss_atr_multiple * atr;
    Some(StopLoss {
        long: close - distance,
        short: close + distance,
        distance,
        distance_pct: if close != 0.0 {
            distance / close * 100.0
        } else {
            0.0
        },
    })
}

/// The signal-status table: a pure function of composite score, entry
/// quality, and warning severities, re-evaluated fresh on every call.
pub fn classify(
    score: f64,
    entry_quality: f64,
    warnings: &[Warning],
    config: &ScoringConfig,
) -> SignalStatus {
    let has_high = warnings.iter().any(|w| w.severity == Severity::High);

    if score >= config.strong_threshold {
        if has_high {
            SignalStatus::WatchForPullback
        } else if entry_quality >= config.entry_strong {
            SignalStatus::StrongBuyNow
        } else if entry_quality >= config.entry_partial {
            SignalStatus::BuyPartial
        } else {
            SignalStatus::WatchForPullback
        }
    } else if score >= config.buy_threshold {
        if entry_quality >= config.entry_moderate && !has_high {
            SignalStatus::BuyPartial
        } else {
            SignalStatus::Hold
        }
    } else if score >= config.sell_threshold {
        SignalStatus::Hold
    } else if score >= config.strong_sell_threshold {
        SignalStatus::Sell
    } else {
        SignalStatus::StrongSell
    }
}
