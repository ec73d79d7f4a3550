//! Recommendation scoring: sub-scores, entry quality, warnings, and the
//! composite classification.

pub mod entry;
pub mod recommend;
pub mod scores;
pub mod trend;
pub mod warnings;

pub use entry::entry_quality_score;
pub use recommend::{classify, composite_score, recommend, recommend_with};
pub use scores::NEUTRAL;
pub use trend::long_term_trend_score;
pub use warnings::overheat_warnings;
