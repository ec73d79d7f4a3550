//! Entry-quality heuristic.
//!
//! A second, independent 0-100 score answering "is *now* a good entry",
//! distinct from the directional composite: a strong trend read can still
//! be a bad moment to enter when price is extended.

use crate::types::{last_value, Candle, IndicatorSet};

/// Volume average window for the quiet-pullback bonus.
const VOLUME_LOOKBACK: usize = 20;

/// Score the current moment as an entry in [0,100].
///
/// Returns exactly 50 when RSI, ADX, EMA(20) or the Bollinger bands are
/// unavailable. Rules on EMA(12)/EMA(26) are skipped individually when
/// those are missing.
pub fn entry_quality_score(candles: &[Candle], indicators: &IndicatorSet) -> f64 {
    let Some(last) = candles.last() else {
        return 50.0;
    };
    let close = last.close;

    let (Some(rsi), Some(adx_set), Some(ema20), Some(bands)) = (
        indicators.rsi.available(),
        indicators.adx.available(),
        indicators.ema20.available(),
        indicators.bollinger.available(),
    ) else {
        return 50.0;
    };
    let (Some(rsi), Some(adx), Some(plus_di), Some(minus_di), Some(ema20), Some(upper), Some(lower)) = (
        last_value(rsi),
        last_value(&adx_set.adx),
        last_value(&adx_set.plus_di),
        last_value(&adx_set.minus_di),
        last_value(ema20),
        last_value(&bands.upper),
        last_value(&bands.lower),
    ) else {
        return 50.0;
    };

    let mut score: f64 = 50.0;
    let trending_up = adx > 25.0 && plus_di > minus_di;

    // The ideal setup: a pullback inside an established uptrend.
    if trending_up && (40.0..=55.0).contains(&rsi) {
        score += 20.0;
    }
    // Chasing an overbought move in the same trend is the opposite.
    if trending_up && rsi > 70.0 {
        score -= 15.0;
    }

    if ema20 > 0.0 {
        let extension = (close - ema20) / ema20;
        if extension > 0.15 {
            score -= 20.0;
        } else if extension > 0.08 {
            score -= 10.0;
        }
    }

    let short_trend_up = match (
        indicators.ema12.available().and_then(|s| last_value(s)),
        indicators.ema26.available().and_then(|s| last_value(s)),
    ) {
        (Some(e12), Some(e26)) => Some(e12 > e26),
        _ => None,
    };

    let width = upper - lower;
    if width > 0.0 && short_trend_up == Some(true) {
        let position = (close - lower) / width;
        if position < 0.25 {
            score += 10.0;
        }
    }

    // Quiet volume while price rests under EMA(12) reads as an orderly
    // pullback rather than distribution.
    if let Some(e12) = indicators.ema12.available().and_then(|s| last_value(s)) {
        if close < e12 && candles.len() >= 2 {
            let lookback = VOLUME_LOOKBACK.min(candles.len());
            let avg_volume = candles[candles.len() - lookback..]
                .iter()
                .map(|c| c.volume)
                .sum::<f64>()
                / lookback as f64;
            if avg_volume > 0.0 && last.volume < avg_volume * 0.8 {
                score += 5.0;
            }
        }
    }

    score.clamp(0.0, 100.0)
}
