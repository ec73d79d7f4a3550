//! Technical indicator implementations.
//!
//! Each indicator is a pure function from a price/candle slice to a
//! `Series` (or a multi-line struct of them) aligned index-for-index with
//! its input, failing fast with `InsufficientData` when the history is too
//! short. The aggregator wraps the battery in the degrade-gracefully
//! policy the scorer consumes.

pub mod adx;
pub mod aggregate;
pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use adx::adx_series;
pub use aggregate::calculate_all;
pub use atr::atr_series;
pub use bollinger::bollinger_series;
pub use ema::ema_series;
pub use macd::macd_series;
pub use rsi::rsi_series;
pub use sma::sma_series;
