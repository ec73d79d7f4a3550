//! Overheat warning rules.
//!
//! Each rule family emits at most one warning at its highest matched
//! tier. Downstream classification reads only the severities.

use crate::types::{last_value, Candle, IndicatorSet, Severity, Warning, WarningKind};

/// Evaluate the overheat rule set against the latest candle.
///
/// The 24-hour change rule infers candle density as `len / 30`, matching
/// the 30-day-history assumption of the long-term trend score; histories
/// shorter than 30 candles skip that rule.
pub fn overheat_warnings(candles: &[Candle], indicators: &IndicatorSet) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let Some(last) = candles.last() else {
        return warnings;
    };
    let close = last.close;

    if let Some(rsi) = indicators.rsi.available().and_then(|s| last_value(s)) {
        if rsi > 80.0 {
            warnings.push(warning(
                WarningKind::RsiOverbought,
                Severity::High,
                rsi,
                format!("RSI critically overbought at {rsi:.1}"),
            ));
        } else if rsi > 75.0 {
            warnings.push(warning(
                WarningKind::RsiOverbought,
                Severity::High,
                rsi,
                format!("RSI heavily overbought at {rsi:.1}"),
            ));
        } else if rsi > 70.0 {
            warnings.push(warning(
                WarningKind::RsiOverbought,
                Severity::Medium,
                rsi,
                format!("RSI overbought at {rsi:.1}"),
            ));
        }
    }

    if let Some(bands) = indicators.bollinger.available() {
        if let Some(upper) = last_value(&bands.upper) {
            if close > upper {
                warnings.push(warning(
                    WarningKind::AboveUpperBand,
                    Severity::Medium,
                    close,
                    format!("Close {close:.2} above the upper Bollinger band {upper:.2}"),
                ));
            }
        }
    }

    let candles_per_day = candles.len() / 30;
    if candles_per_day > 0 && candles.len() > candles_per_day {
        let base = candles[candles.len() - 1 - candles_per_day].close;
        if base > 0.0 {
            let change = (close - base) / base * 100.0;
            let tier = if change > 50.0 {
                Some((Severity::High, "vertical"))
            } else if change > 30.0 {
                Some((Severity::High, "rapid"))
            } else if change > 20.0 {
                Some((Severity::Medium, "fast"))
            } else {
                None
            };
            if let Some((severity, label)) = tier {
                warnings.push(warning(
                    WarningKind::RapidRise,
                    severity,
                    change,
                    format!("{} {:.1}% rise in 24h", capitalize(label), change),
                ));
            }
        }
    }

    if let Some(ema20) = indicators.ema20.available().and_then(|s| last_value(s)) {
        if ema20 > 0.0 {
            let distance = (close - ema20) / ema20 * 100.0;
            if distance > 20.0 {
                warnings.push(warning(
                    WarningKind::ExtendedAboveEma,
                    Severity::High,
                    distance,
                    format!("Price {distance:.1}% above EMA20"),
                ));
            } else if distance > 15.0 {
                warnings.push(warning(
                    WarningKind::ExtendedAboveEma,
                    Severity::Medium,
                    distance,
                    format!("Price {distance:.1}% above EMA20"),
                ));
            }
        }
    }

    if let Some(adx) = indicators
        .adx
        .available()
        .and_then(|s| last_value(&s.adx))
    {
        if adx > 50.0 {
            warnings.push(warning(
                WarningKind::TrendOverextended,
                Severity::Medium,
                adx,
                format!("ADX at {adx:.1}: trend is overextended"),
            ));
        }
    }

    warnings
}

fn warning(kind: WarningKind, severity: Severity, value: f64, message: String) -> Warning {
    Warning {
        kind,
        severity,
        value,
        message,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
