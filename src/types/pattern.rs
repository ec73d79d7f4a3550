use serde::{Deserialize, Serialize};

/// Kind of local extremum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotKind {
    High,
    Low,
}

/// A local price extremum over a symmetric window of neighboring candles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotPoint {
    /// Index into the source candle sequence.
    pub index: usize,
    /// The pivot's high (for high pivots) or low (for low pivots).
    pub price: f64,
    /// Timestamp of the pivot candle, milliseconds.
    pub timestamp: i64,
    pub kind: PivotKind,
}

/// Whether a price level sits below or above the current close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelKind {
    Support,
    Resistance,
}

/// A clustered support/resistance level built from nearby pivots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLevel {
    /// Representative price: mean of the cluster, rounded to 2 decimals.
    pub price: f64,
    /// Number of pivots in the cluster.
    pub touches: usize,
    /// 0-100: `min(100, touches * 25 + recency * 25)`.
    pub strength: f64,
    /// Candle index of the earliest pivot in the cluster.
    pub first_touch: usize,
    /// Candle index of the most recent pivot in the cluster.
    pub last_touch: usize,
    pub kind: LevelKind,
}

/// Support and resistance levels around the current price, nearest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportResistance {
    pub support: Vec<PriceLevel>,
    pub resistance: Vec<PriceLevel>,
}

/// Chart pattern family recognized by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    DoubleBottom,
    DoubleTop,
}

/// One matched double-bottom or double-top formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternMatch {
    pub kind: PatternKind,
    /// The earlier of the two matched extrema.
    pub first: PivotPoint,
    /// The later of the two matched extrema.
    pub second: PivotPoint,
    /// Candle index of the intervening opposite extremum.
    pub neckline_index: usize,
    /// Price of the neckline extremum; crossing it confirms the pattern.
    pub neckline_price: f64,
    /// Whether the current close has crossed the neckline.
    pub confirmed: bool,
    /// 1:1 projection of the pattern height beyond the neckline.
    pub target: f64,
    /// 0-100 quality score.
    pub strength: f64,
    pub description: String,
}

/// Result of a pattern search. Absence of a pattern is an expected outcome,
/// never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternScan {
    pub found: bool,
    /// Up to the three strongest matches, strength descending.
    pub patterns: Vec<PatternMatch>,
    /// The single strongest match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<PatternMatch>,
}

impl PatternScan {
    /// The uniform "no signal" result.
    pub fn not_found() -> Self {
        Self {
            found: false,
            patterns: Vec::new(),
            best: None,
        }
    }
}

/// Directional lean of the composite pattern summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bias {
    Bullish,
    Bearish,
    Neutral,
}

/// Composite pattern read: the strongest detected structure, or a
/// support/resistance proximity hint when no pattern is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSummary {
    pub bias: Bias,
    pub detail: String,
    /// The pattern that produced the bias, when one did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternMatch>,
}
