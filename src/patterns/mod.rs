//! Chart pattern detection: pivots, support/resistance zones, and
//! double-top/double-bottom formations.
//!
//! Nothing here errors on insufficient data or absent patterns; a missing
//! pattern is an expected outcome and comes back as a `found: false` scan.

pub mod double;
pub mod levels;
pub mod pivots;
pub mod summary;

pub use double::{detect_double_bottom, detect_double_top};
pub use levels::support_resistance;
pub use pivots::find_pivots;
pub use summary::summarize;
