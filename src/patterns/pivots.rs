//! Local extremum (pivot point) detection.

use crate::types::{Candle, PivotKind, PivotPoint};

/// Find pivot points over a symmetric window of half-width `window`.
///
/// Position `i` is a high pivot iff its high strictly exceeds the high of
/// every other candle in `[i - window, i + window]`; symmetric rule for low
/// pivots. Strict inequality means plateaus produce no pivot at all, which
/// trades recall for precision. Positions too close to either edge for a
/// full window are never pivots.
pub fn find_pivots(candles: &[Candle], window: usize) -> Vec<PivotPoint> {
    let n = candles.len();
    if n < 2 * window + 1 {
        return Vec::new();
    }

    let mut pivots = Vec::new();
    for i in window..n - window {
        let mut is_high = true;
        let mut is_low = true;

        for j in i - window..=i + window {
            if j == i {
                continue;
            }
            if candles[j].high >= candles[i].high {
                is_high = false;
            }
            if candles[j].low <= candles[i].low {
                is_low = false;
            }
            if !is_high && !is_low {
                break;
            }
        }

        if is_high {
            pivots.push(PivotPoint {
                index: i,
                price: candles[i].high,
                timestamp: candles[i].timestamp,
                kind: PivotKind::High,
            });
        }
        if is_low {
            pivots.push(PivotPoint {
                index: i,
                price: candles[i].low,
                timestamp: candles[i].timestamp,
                kind: PivotKind::Low,
            });
        }
    }

    pivots
}
