//! Double-bottom and double-top recognition.

use crate::config::PatternConfig;
use crate::patterns::pivots::find_pivots;
use crate::types::{Candle, PatternKind, PatternMatch, PatternScan, PivotKind, PivotPoint};

/// Search the most recent `lookback_candles` for double-bottom formations.
pub fn detect_double_bottom(candles: &[Candle], config: &PatternConfig) -> PatternScan {
    detect(candles, config, PatternKind::DoubleBottom)
}

/// Search the most recent `lookback_candles` for double-top formations.
pub fn detect_double_top(candles: &[Candle], config: &PatternConfig) -> PatternScan {
    detect(candles, config, PatternKind::DoubleTop)
}

fn detect(candles: &[Candle], config: &PatternConfig, kind: PatternKind) -> PatternScan {
    let n = candles.len();
    if n < 2 * config.pivot_window + 1 {
        return PatternScan::not_found();
    }

    let start = n.saturating_sub(config.lookback_candles);
    let wanted = match kind {
        PatternKind::DoubleBottom => PivotKind::Low,
        PatternKind::DoubleTop => PivotKind::High,
    };

    // Pivot indices are reported relative to the full candle sequence.
    let pivots: Vec<PivotPoint> = find_pivots(&candles[start..], config.pivot_window)
        .into_iter()
        .filter(|p| p.kind == wanted)
        .map(|mut p| {
            p.index += start;
            p
        })
        .collect();
    if pivots.len() < 2 {
        return PatternScan::not_found();
    }

    let last_close = candles[n - 1].close;
    let mut matches = Vec::new();

    // Every ordered pair is scored independently, not just adjacent ones.
    for a in 0..pivots.len() {
        for b in a + 1..pivots.len() {
            let first = &pivots[a];
            let second = &pivots[b];
            if let Some(found) = match_pair(candles, config, kind, first, second, last_close) {
                matches.push(found);
            }
        }
    }

    if matches.is_empty() {
        return PatternScan::not_found();
    }

    matches.sort_by(|a, b| b.strength.total_cmp(&a.strength));
    matches.truncate(config.max_patterns);
    let best = matches[0].clone();

    PatternScan {
        found: true,
        patterns: matches,
        best: Some(best),
    }
}

fn match_pair(
    candles: &[Candle],
    config: &PatternConfig,
    kind: PatternKind,
    first: &PivotPoint,
    second: &PivotPoint,
    last_close: f64,
) -> Option<PatternMatch> {
    let gap = second.index - first.index;
    if gap < config.min_candles_between || gap > config.max_candles_between {
        return None;
    }

    let average = (first.price + second.price) / 2.0;
    if average <= 0.0 {
        return None;
    }
    let price_diff = (first.price - second.price).abs() / average;
    if price_diff > config.tolerance {
        return None;
    }

    // Neckline: the opposite extremum strictly between the two pivots.
    let between = &candles[first.index + 1..second.index];
    if between.is_empty() {
        return None;
    }
    let (neckline_offset, neckline_price) = match kind {
        PatternKind::DoubleBottom => between
            .iter()
            .enumerate()
            .map(|(i, c)| (i, c.high))
            .max_by(|a, b| a.1.total_cmp(&b.1))?,
        PatternKind::DoubleTop => between
            .iter()
            .enumerate()
            .map(|(i, c)| (i, c.low))
            .min_by(|a, b| a.1.total_cmp(&b.1))?,
    };
    let neckline_index = first.index + 1 + neckline_offset;

    let height = match kind {
        PatternKind::DoubleBottom => (neckline_price - average) / average,
        PatternKind::DoubleTop => (average - neckline_price) / average,
    };
    if height < config.min_middle_height {
        return None;
    }

    let (confirmed, target) = match kind {
        PatternKind::DoubleBottom => (
            last_close > neckline_price,
            neckline_price + (neckline_price - average),
        ),
        PatternKind::DoubleTop => (
            last_close < neckline_price,
            neckline_price - (average - neckline_price),
        ),
    };

    let mut strength = 0.0;
    if confirmed {
        strength += 40.0;
    }
    strength += (height * 300.0).min(30.0);
    strength += (20.0 - price_diff * 500.0).max(0.0);
    strength += if (15..=30).contains(&gap) {
        10.0
    } else if (10..=40).contains(&gap) {
        5.0
    } else {
        0.0
    };
    let strength = strength.min(100.0);

    let description = match kind {
        PatternKind::DoubleBottom => format!(
            "Double bottom at {:.2}/{:.2}, neckline {:.2}{}",
            first.price,
            second.price,
            neckline_price,
            if confirmed { " (confirmed)" } else { "" }
        ),
        PatternKind::DoubleTop => format!(
            "Double top at {:.2}/{:.2}, neckline {:.2}{}",
            first.price,
            second.price,
            neckline_price,
            if confirmed { " (confirmed)" } else { "" }
        ),
    };

    Some(PatternMatch {
        kind,
        first: *first,
        second: *second,
        neckline_index,
        neckline_price,
        confirmed,
        target,
        strength,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(i: usize, low: f64, high: f64, close: f64) -> Candle {
        Candle::new(i as i64 * 60_000, close, high, low, close, 1000.0)
    }

    /// Two equal troughs at 100, 20 candles apart, with an intervening
    /// peak 5% above them, ending at `final_close`.
    fn double_bottom_candles(final_close: f64) -> Vec<Candle> {
        let mut lows = Vec::new();
        // Descent into the first trough (index 5).
        lows.extend([108.0, 106.0, 104.0, 103.0, 101.5, 100.0]);
        // Rise toward the middle peak (index 15) and back down.
        for step in 1..=10 {
            lows.push(100.0 + step as f64 * 0.4);
        }
        for step in (1..=9).rev() {
            lows.push(100.0 + step as f64 * 0.4);
        }
        // Second trough at index 25, then drift up.
        lows.push(100.0);
        lows.extend([101.0, 102.0, 103.0, 103.5, 104.0]);

        let n = lows.len();
        lows.iter()
            .enumerate()
            .map(|(i, low)| {
                // The middle peak carries the pattern's high at exactly 105.
                let high = if i == 15 { 105.0 } else { low + 0.5 };
                let close = if i == n - 1 { final_close } else { low + 0.2 };
                candle(i, *low, high, close)
            })
            .collect()
    }

    #[test]
    fn test_double_bottom_found_and_confirmed() {
        let candles = double_bottom_candles(106.0);
        let scan = detect_double_bottom(&candles, &PatternConfig::default());
        assert!(scan.found);
        let best = scan.best.as_ref().unwrap();
        assert_eq!(best.kind, PatternKind::DoubleBottom);
        assert_eq!(best.first.index, 5);
        assert_eq!(best.second.index, 25);
        assert_eq!(best.neckline_index, 15);
        assert_eq!(best.neckline_price, 105.0);
        // Close above the neckline confirms.
        assert!(best.confirmed);
        // 1:1 projection: neckline + (neckline - pivot average).
        assert!((best.target - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_double_bottom_unconfirmed_below_neckline() {
        let candles = double_bottom_candles(103.0);
        let scan = detect_double_bottom(&candles, &PatternConfig::default());
        assert!(scan.found);
        assert!(!scan.best.as_ref().unwrap().confirmed);
    }

    #[test]
    fn test_confirmation_raises_strength() {
        let confirmed = detect_double_bottom(&double_bottom_candles(106.0), &PatternConfig::default());
        let unconfirmed =
            detect_double_bottom(&double_bottom_candles(103.0), &PatternConfig::default());
        let diff = confirmed.best.unwrap().strength - unconfirmed.best.unwrap().strength;
        assert!((diff - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_shallow_middle_rejected() {
        let config = PatternConfig {
            min_middle_height: 0.10,
            ..PatternConfig::default()
        };
        let scan = detect_double_bottom(&double_bottom_candles(106.0), &config);
        assert!(!scan.found);
    }

    #[test]
    fn test_double_top_mirror() {
        // Mirror the double bottom around 105: two peaks at 110 with a
        // trough between them, closing below the trough.
        let bottom = double_bottom_candles(106.0);
        let candles: Vec<Candle> = bottom
            .iter()
            .map(|c| Candle::new(c.timestamp, 210.0 - c.open, 210.0 - c.low, 210.0 - c.high, 210.0 - c.close, c.volume))
            .collect();
        let scan = detect_double_top(&candles, &PatternConfig::default());
        assert!(scan.found);
        let best = scan.best.as_ref().unwrap();
        assert_eq!(best.kind, PatternKind::DoubleTop);
        assert_eq!(best.neckline_price, 105.0);
        assert!(best.confirmed);
        assert!((best.target - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_insufficient_history_not_found() {
        let candles = double_bottom_candles(106.0)[..5].to_vec();
        let scan = detect_double_bottom(&candles, &PatternConfig::default());
        assert!(!scan.found);
        assert!(scan.patterns.is_empty());
    }

    #[test]
    fn test_trending_market_not_found() {
        let candles: Vec<Candle> = (0..80)
            .map(|i| candle(i, 100.0 + i as f64, 102.0 + i as f64, 101.0 + i as f64))
            .collect();
        let scan = detect_double_bottom(&candles, &PatternConfig::default());
        assert!(!scan.found);
    }

    #[test]
    fn test_patterns_sorted_by_strength() {
        let candles = double_bottom_candles(106.0);
        let scan = detect_double_bottom(&candles, &PatternConfig::default());
        for pair in scan.patterns.windows(2) {
            assert!(pair[0].strength >= pair[1].strength);
        }
    }
}
