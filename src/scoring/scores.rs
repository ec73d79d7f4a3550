//! Per-indicator sub-scores.
//!
//! Every score lives in [0,100] centered on 50 (neutral); a missing or
//! unavailable input short-circuits to exactly 50 so a degraded indicator
//! dilutes the ensemble instead of blocking it.

use crate::types::{last_value, previous_value, IndicatorSet};

/// Neutral sub-score returned whenever an input is missing.
pub const NEUTRAL: f64 = 50.0;

/// Fully converged MACD/signal lines leave floating-point dust in the
/// histogram; magnitudes below this read as zero.
const CONVERGENCE_EPSILON: f64 = 1e-9;

/// MACD score: histogram sign and momentum, MACD-vs-signal position, and
/// MACD line sign.
pub fn macd_score(indicators: &IndicatorSet) -> f64 {
    let Some(macd) = indicators.macd.available() else {
        return NEUTRAL;
    };
    let (Some(hist), Some(prev_hist), Some(line), Some(signal)) = (
        last_value(&macd.histogram),
        previous_value(&macd.histogram),
        last_value(&macd.macd),
        last_value(&macd.signal),
    ) else {
        return NEUTRAL;
    };

    let mut score = NEUTRAL;
    if hist > CONVERGENCE_EPSILON {
        score += 20.0;
        if hist > prev_hist {
            score += 10.0;
        }
    } else if hist < -CONVERGENCE_EPSILON {
        score -= 20.0;
        if hist < prev_hist {
            score -= 10.0;
        }
    }
    let gap = line - signal;
    if gap > CONVERGENCE_EPSILON {
        score += 15.0;
    } else if gap < -CONVERGENCE_EPSILON {
        score -= 15.0;
    }
    if line > 0.0 {
        score += 5.0;
    } else if line < 0.0 {
        score -= 5.0;
    }

    score.clamp(0.0, 100.0)
}

/// EMA-cross score: 12-vs-26 and 50-vs-200 ordering with fresh-crossover
/// bonuses, plus a full-alignment bonus when all four EMAs stack.
pub fn ema_cross_score(indicators: &IndicatorSet) -> f64 {
    let (Some(ema12), Some(ema26), Some(ema50), Some(ema200)) = (
        indicators.ema12.available(),
        indicators.ema26.available(),
        indicators.ema50.available(),
        indicators.ema200.available(),
    ) else {
        return NEUTRAL;
    };
    let (Some(c12), Some(c26), Some(c50), Some(c200)) = (
        last_value(ema12),
        last_value(ema26),
        last_value(ema50),
        last_value(ema200),
    ) else {
        return NEUTRAL;
    };
    let (Some(p12), Some(p26), Some(p50), Some(p200)) = (
        previous_value(ema12),
        previous_value(ema26),
        previous_value(ema50),
        previous_value(ema200),
    ) else {
        return NEUTRAL;
    };

    let mut score = NEUTRAL;
    if c12 > c26 {
        score += 15.0;
        if p12 <= p26 {
            // Crossed on the immediately preceding sample.
            score += 5.0;
        }
    } else if c12 < c26 {
        score -= 15.0;
        if p12 >= p26 {
            score -= 5.0;
        }
    }
    if c50 > c200 {
        score += 10.0;
        if p50 <= p200 {
            score += 10.0;
        }
    } else if c50 < c200 {
        score -= 10.0;
        if p50 >= p200 {
            score -= 10.0;
        }
    }
    if c12 > c26 && c26 > c50 && c50 > c200 {
        score += 5.0;
    } else if c12 < c26 && c26 < c50 && c50 < c200 {
        score -= 5.0;
    }

    score.clamp(0.0, 100.0)
}

/// ADX score: neutral below 20 (no meaningful trend), otherwise trend
/// strength signed by the dominant directional component.
pub fn adx_score(indicators: &IndicatorSet) -> f64 {
    let Some(adx_set) = indicators.adx.available() else {
        return NEUTRAL;
    };
    let (Some(adx), Some(plus_di), Some(minus_di)) = (
        last_value(&adx_set.adx),
        last_value(&adx_set.plus_di),
        last_value(&adx_set.minus_di),
    ) else {
        return NEUTRAL;
    };

    if adx < 20.0 {
        return NEUTRAL;
    }
    let direction = if plus_di > minus_di {
        1.0
    } else if plus_di < minus_di {
        -1.0
    } else {
        0.0
    };
    (NEUTRAL + direction * adx / 2.0).clamp(0.0, 100.0)
}

/// RSI score: contrarian piecewise-linear mapping around 50.
pub fn rsi_score(indicators: &IndicatorSet) -> f64 {
    let Some(rsi) = indicators.rsi.available() else {
        return NEUTRAL;
    };
    let Some(rsi) = last_value(rsi) else {
        return NEUTRAL;
    };

    let score = if rsi >= 70.0 {
        // Overbought: continues from the -15 band edge toward -30 at RSI 100.
        35.0 - (rsi - 70.0) / 30.0 * 15.0
    } else if rsi <= 30.0 {
        // Oversold: continues from the +15 band edge toward +30 at RSI 0.
        65.0 + (30.0 - rsi) / 30.0 * 15.0
    } else if rsi < 50.0 {
        NEUTRAL + (50.0 - rsi) / 20.0 * 15.0
    } else {
        NEUTRAL - (rsi - 50.0) / 20.0 * 15.0
    };

    score.clamp(0.0, 100.0)
}

/// Bollinger score from the close's position inside the bands.
pub fn bollinger_score(indicators: &IndicatorSet, close: f64) -> f64 {
    let Some(bands) = indicators.bollinger.available() else {
        return NEUTRAL;
    };
    let (Some(upper), Some(lower)) = (last_value(&bands.upper), last_value(&bands.lower)) else {
        return NEUTRAL;
    };

    let width = upper - lower;
    if width <= 0.0 {
        return NEUTRAL;
    }
    let position = (close - lower) / width;

    if position >= 0.95 {
        30.0
    } else if position <= 0.05 {
        70.0
    } else {
        NEUTRAL + (0.5 - position) / 0.45 * 20.0
    }
}
