//! Support/resistance level construction from clustered pivots.

use crate::config::LevelConfig;
use crate::patterns::pivots::find_pivots;
use crate::types::{Candle, LevelKind, PivotPoint, PriceLevel, SupportResistance};

/// Cluster pivots into price zones and classify them against the current
/// close.
///
/// Clustering is a single greedy pass over pivots sorted by price
/// ascending: a pivot joins the current cluster while it is within
/// `tolerance` of the running cluster mean, otherwise it starts a new one.
/// The result depends on the price sort order, not on density. Clusters
/// with fewer than `min_touches` pivots are discarded; each side is sorted
/// nearest-first and capped at `max_levels`.
pub fn support_resistance(candles: &[Candle], config: &LevelConfig) -> SupportResistance {
    let Some(last) = candles.last() else {
        return SupportResistance::default();
    };
    let current_price = last.close;

    let mut pivots = find_pivots(candles, config.pivot_window);
    if pivots.is_empty() {
        return SupportResistance::default();
    }
    pivots.sort_by(|a, b| a.price.total_cmp(&b.price));

    let mut clusters: Vec<Vec<&PivotPoint>> = Vec::new();
    let mut running_sum = 0.0;
    for pivot in &pivots {
        if let Some(cluster) = clusters.last_mut() {
            let mean = running_sum / cluster.len() as f64;
            if (pivot.price - mean).abs() / mean <= config.tolerance {
                cluster.push(pivot);
                running_sum += pivot.price;
                continue;
            }
        }
        clusters.push(vec![pivot]);
        running_sum = pivot.price;
    }

    let mut support = Vec::new();
    let mut resistance = Vec::new();

    for cluster in clusters.iter().filter(|c| c.len() >= config.min_touches) {
        let touches = cluster.len();
        let mean = cluster.iter().map(|p| p.price).sum::<f64>() / touches as f64;
        let price = (mean * 100.0).round() / 100.0;
        let first_touch = cluster.iter().map(|p| p.index).min().unwrap_or(0);
        let last_touch = cluster.iter().map(|p| p.index).max().unwrap_or(0);
        let recency = last_touch as f64 / candles.len() as f64;
        let strength = (touches as f64 * 25.0 + recency * 25.0).min(100.0);

        let kind = if price < current_price {
            LevelKind::Support
        } else {
            LevelKind::Resistance
        };
        let level = PriceLevel {
            price,
            touches,
            strength,
            first_touch,
            last_touch,
            kind,
        };
        match kind {
            LevelKind::Support => support.push(level),
            LevelKind::Resistance => resistance.push(level),
        }
    }

    // Nearest to the current price first on both sides.
    support.sort_by(|a, b| b.price.total_cmp(&a.price));
    resistance.sort_by(|a, b| a.price.total_cmp(&b.price));
    support.truncate(config.max_levels);
    resistance.truncate(config.max_levels);

    SupportResistance {
        support,
        resistance,
    }
}
