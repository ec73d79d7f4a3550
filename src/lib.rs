//! Omen - single-asset trading signal engine.
//!
//! Turns one candle history into technical indicators, chart patterns,
//! and a weighted buy/sell recommendation. The crate is a pure library:
//! no I/O, no clock dependence beyond the stamped output timestamp, and
//! the same candles always produce the same analysis.

pub mod config;
pub mod error;
pub mod feed;
pub mod indicators;
pub mod patterns;
pub mod scoring;
pub mod types;

pub use config::{AnalysisConfig, LevelConfig, PatternConfig, ScoreWeights, ScoringConfig};
pub use error::{Result, SignalError};
pub use feed::CandleSource;
pub use indicators::calculate_all;
pub use scoring::{recommend, recommend_with};
pub use types::{
    Candle, Computed, IndicatorSet, PatternScan, PatternSummary, Recommendation,
    SupportResistance,
};

use serde::Serialize;
use tracing::debug;

/// Everything the engine derives from one candle history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub indicators: IndicatorSet,
    pub levels: SupportResistance,
    pub double_bottom: PatternScan,
    pub double_top: PatternScan,
    pub pattern_summary: PatternSummary,
    pub recommendation: Recommendation,
}

/// Run the full pipeline: indicators, support/resistance, double
/// top/bottom detection, and the composite recommendation.
///
/// Candles must be oldest-first. Fails only on an empty history.
pub fn analyze(candles: &[Candle], config: &AnalysisConfig) -> Result<Analysis> {
    let last = candles.last().ok_or(SignalError::EmptyHistory)?;
    debug!(
        "analyzing {} candles, latest close {:.4}",
        candles.len(),
        last.close
    );

    let indicators = calculate_all(candles);
    let levels = patterns::support_resistance(candles, &config.levels);
    let double_bottom = patterns::detect_double_bottom(candles, &config.patterns);
    let double_top = patterns::detect_double_top(candles, &config.patterns);
    let pattern_summary = patterns::summarize(&double_bottom, &double_top, &levels, last.close);
    let recommendation = recommend_with(candles, &indicators, &config.scoring)?;

    Ok(Analysis {
        indicators,
        levels,
        double_bottom,
        double_top,
        pattern_summary,
        recommendation,
    })
}
