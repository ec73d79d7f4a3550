use std::env;

/// Ensemble weights for the composite recommendation score.
///
/// Long-term trend carries the single largest weight specifically so a
/// multi-week decline cannot be overridden by short-term momentum into a
/// false "strong buy".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub long_term_trend: f64,
    pub macd: f64,
    pub ema_cross: f64,
    pub adx: f64,
    pub rsi: f64,
    pub bollinger: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            long_term_trend: 0.30,
            macd: 0.20,
            ema_cross: 0.20,
            adx: 0.15,
            rsi: 0.10,
            bollinger: 0.05,
        }
    }
}

/// Scorer configuration: ensemble weights plus the classification
/// thresholds of the signal-status table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    /// Composite score at or above which a buy-side status is considered.
    pub strong_threshold: f64,
    /// Composite score at or above which a partial buy is considered.
    pub buy_threshold: f64,
    /// Composite score below which the signal turns to sell.
    pub sell_threshold: f64,
    /// Composite score below which the signal turns to strong sell.
    pub strong_sell_threshold: f64,
    /// Entry quality needed for STRONG_BUY_NOW at a strong composite.
    pub entry_strong: f64,
    /// Entry quality needed for BUY_PARTIAL at a strong composite.
    pub entry_partial: f64,
    /// Entry quality needed for BUY_PARTIAL at a moderate composite.
    pub entry_moderate: f64,
    /// ATR multiple used for stop-loss distance.
    pub stop_loss_atr_multiple: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            strong_threshold: 60.0,
            buy_threshold: 50.0,
            sell_threshold: 40.0,
            strong_sell_threshold: 30.0,
            entry_strong: 60.0,
            entry_partial: 45.0,
            entry_moderate: 55.0,
            stop_loss_atr_multiple: 2.0,
        }
    }
}

/// Pivot and support/resistance clustering configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    /// Symmetric window half-width for pivot detection.
    pub pivot_window: usize,
    /// Relative distance from the running cluster mean that still joins
    /// a pivot to the cluster.
    pub tolerance: f64,
    /// Clusters with fewer touches are discarded.
    pub min_touches: usize,
    /// Cap on reported levels per side.
    pub max_levels: usize,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            pivot_window: 5,
            tolerance: 0.015,
            min_touches: 2,
            max_levels: 5,
        }
    }
}

/// Double top/bottom detection configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternConfig {
    /// Only the most recent candles are searched.
    pub lookback_candles: usize,
    /// Pivot window half-width used inside the lookback.
    pub pivot_window: usize,
    /// Max relative price difference between the two matched extrema.
    pub tolerance: f64,
    /// Minimum candle gap between the two extrema.
    pub min_candles_between: usize,
    /// Maximum candle gap between the two extrema.
    pub max_candles_between: usize,
    /// Minimum relative height (depth) of the neckline versus the
    /// average of the two extrema.
    pub min_middle_height: f64,
    /// How many matches to report, strength descending.
    pub max_patterns: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            lookback_candles: 100,
            pivot_window: 3,
            tolerance: 0.02,
            min_candles_between: 5,
            max_candles_between: 60,
            min_middle_height: 0.03,
            max_patterns: 3,
        }
    }
}

/// Top-level analysis configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisConfig {
    pub scoring: ScoringConfig,
    pub levels: LevelConfig,
    pub patterns: PatternConfig,
}

impl AnalysisConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.levels.pivot_window = env_usize("OMEN_PIVOT_WINDOW", config.levels.pivot_window);
        config.levels.tolerance = env_f64("OMEN_LEVEL_TOLERANCE", config.levels.tolerance);
        config.levels.max_levels = env_usize("OMEN_MAX_LEVELS", config.levels.max_levels);
        config.patterns.lookback_candles =
            env_usize("OMEN_PATTERN_LOOKBACK", config.patterns.lookback_candles);
        config.patterns.tolerance = env_f64("OMEN_PATTERN_TOLERANCE", config.patterns.tolerance);
        config.scoring.stop_loss_atr_multiple = env_f64(
            "OMEN_STOP_LOSS_ATR_MULTIPLE",
            config.scoring.stop_loss_atr_multiple,
        );

        config
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
