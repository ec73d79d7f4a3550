//! Long-term trend score.

use crate::types::Candle;

/// Window weights: 7, 14 and 30 days.
const WINDOW_DAYS: [usize; 3] = [7, 14, 30];
const WINDOW_WEIGHTS: [f64; 3] = [0.25, 0.35, 0.40];

/// Score the multi-week trend in [0,100].
///
/// Carries the single largest ensemble weight so a multi-week decline can
/// never be overridden into a strong buy by short-term momentum.
///
/// Candle density is inferred as `len / 30`: the supplied history is
/// assumed to span exactly 30 days. Histories of fewer than 30 candles
/// cannot satisfy that assumption and score neutral (50).
///
/// Each window's percentage change maps through an asymmetric tier table
/// (losses cost roughly 1.5-2x what equal gains earn), the windows are
/// blended 0.25/0.35/0.40, then flat adjustments apply: -20 when every
/// window is below -3%, +10 when every window is above +3%, and -10 when
/// the close sits more than 15% under the 30-day high.
pub fn long_term_trend_score(candles: &[Candle]) -> f64 {
    let n = candles.len();
    let candles_per_day = n / 30;
    if candles_per_day == 0 {
        return 50.0;
    }
    let last_close = candles[n - 1].close;

    let change_pct = |days: usize| -> f64 {
        let back = days * candles_per_day;
        let base = candles[n.saturating_sub(1 + back)].close;
        if base == 0.0 {
            0.0
        } else {
            (last_close - base) / base * 100.0
        }
    };
    let changes = WINDOW_DAYS.map(change_pct);

    let mut score = changes
        .iter()
        .zip(WINDOW_WEIGHTS)
        .map(|(change, weight)| tier_score(*change) * weight)
        .sum::<f64>();

    if changes.iter().all(|c| *c < -3.0) {
        score -= 20.0;
    } else if changes.iter().all(|c| *c > 3.0) {
        score += 10.0;
    }

    let high_30d = candles.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    if high_30d > 0.0 && last_close < high_30d * 0.85 {
        score -= 10.0;
    }

    score.clamp(0.0, 100.0)
}

/// Asymmetric per-window tiers: a -5% window costs more than a +5% window
/// earns.
fn tier_score(change_pct: f64) -> f64 {
    if change_pct >= 10.0 {
        85.0
    } else if change_pct >= 5.0 {
        75.0
    } else if change_pct >= 3.0 {
        65.0
    } else if change_pct >= 0.0 {
        55.0
    } else if change_pct > -2.0 {
        45.0
    } else if change_pct > -5.0 {
        30.0
    } else if change_pct > -10.0 {
        15.0
    } else {
        5.0
    }
}
