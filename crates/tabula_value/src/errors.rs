//! Error type for value operations.
//!
//! Factory functions (e.g. `nil_table_key()`) are the public way to build
//! errors, so messages stay uniform across crates.

use thiserror::Error;

/// Result of a value operation.
pub type ValueResult<T> = Result<T, ValueError>;

/// A value operation was called with an argument it cannot accept.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl ValueError {
    /// Create an invalid-argument error with a custom message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ValueError::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cold]
pub fn nil_table_key() -> ValueError {
    ValueError::invalid_argument("table key cannot be nil")
}

#[cold]
pub fn pop_from_empty_pack() -> ValueError {
    ValueError::invalid_argument("cannot pop from an empty pack")
}

#[cold]
pub fn expected_table(got: &str) -> ValueError {
    ValueError::invalid_argument(format!("expected table, got {got}"))
}
