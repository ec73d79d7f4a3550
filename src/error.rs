use thiserror::Error;

/// Signal engine error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// An indicator was asked for more history than the caller supplied.
    #[error("insufficient data: need {required} candles, have {available}")]
    InsufficientData { required: usize, available: usize },

    /// The candle sequence was empty; nothing can be computed at all.
    #[error("empty candle history")]
    EmptyHistory,
}

impl SignalError {
    /// Length check used at the top of each indicator.
    pub fn check_len(available: usize, required: usize) -> Result<()> {
        if available < required {
            Err(SignalError::InsufficientData {
                required,
                available,
            })
        } else {
            Ok(())
        }
    }
}

pub type Result<T> = std::result::Result<T, SignalError>;
