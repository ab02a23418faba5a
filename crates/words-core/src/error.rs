//! Unified error types for number conversion.

/// Main error type for numwords operations.
#[derive(Debug, thiserror::Error)]
pub enum WordsError {
    /// String input was empty or contained only whitespace.
    #[error("empty value")]
    EmptyValue,

    /// String input does not parse as a signed decimal number.
    #[error("invalid number format: {input:?}")]
    InvalidFormat { input: String },

    /// Numeric input is infinite or NaN.
    #[error("non-finite number: {value}")]
    NonFinite { value: f64 },

    /// Requested locale tag has no registered rule set.
    #[error("unsupported locale {requested:?} (supported: {})", .supported.join(", "))]
    UnsupportedLocale {
        requested: String,
        supported: Vec<&'static str>,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with WordsError.
pub type WordsResult<T> = Result<T, WordsError>;

impl WordsError {
    /// Create an invalid format error for the given input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns true for errors caused by the value being converted, as
    /// opposed to the locale or environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyValue | Self::InvalidFormat { .. } | Self::NonFinite { .. }
        )
    }
}
