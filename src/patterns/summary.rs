//! Composite pattern summary.

use crate::types::{
    Bias, PatternKind, PatternMatch, PatternScan, PatternSummary, SupportResistance,
};

/// How close the current price must be to a level for a proximity hint.
const LEVEL_PROXIMITY: f64 = 0.02;

/// Reduce both pattern scans and the level map to one directional read.
///
/// Fixed priority, not configurable: confirmed patterns beat unconfirmed
/// ones; at equal confirmation status bottoms beat tops; with no pattern at
/// all, proximity to a support or resistance level within 2% yields a hint;
/// otherwise neutral.
pub fn summarize(
    bottoms: &PatternScan,
    tops: &PatternScan,
    levels: &SupportResistance,
    current_price: f64,
) -> PatternSummary {
    let candidates = [
        bottoms.best.as_ref().filter(|p| p.confirmed),
        tops.best.as_ref().filter(|p| p.confirmed),
        bottoms.best.as_ref().filter(|p| !p.confirmed),
        tops.best.as_ref().filter(|p| !p.confirmed),
    ];
    if let Some(pattern) = candidates.into_iter().flatten().next() {
        return from_pattern(pattern);
    }

    if current_price > 0.0 {
        if let Some(level) = levels.support.first() {
            if (current_price - level.price) / current_price <= LEVEL_PROXIMITY {
                return PatternSummary {
                    bias: Bias::Bullish,
                    detail: format!("Price is holding near support at {:.2}", level.price),
                    pattern: None,
                };
            }
        }
        if let Some(level) = levels.resistance.first() {
            if (level.price - current_price) / current_price <= LEVEL_PROXIMITY {
                return PatternSummary {
                    bias: Bias::Bearish,
                    detail: format!("Price is pressing resistance at {:.2}", level.price),
                    pattern: None,
                };
            }
        }
    }

    PatternSummary {
        bias: Bias::Neutral,
        detail: "No actionable pattern detected".to_string(),
        pattern: None,
    }
}

fn from_pattern(pattern: &PatternMatch) -> PatternSummary {
    let bias = match pattern.kind {
        PatternKind::DoubleBottom => Bias::Bullish,
        PatternKind::DoubleTop => Bias::Bearish,
    };
    PatternSummary {
        bias,
        detail: pattern.description.clone(),
        pattern: Some(pattern.clone()),
    }
}
