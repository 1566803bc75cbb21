//! Error types for representation.

use tabula_value::ValueError;
use thiserror::Error;

/// Result of a representation step.
pub type ReprResult<T> = Result<T, ReprError>;

/// Failure while representing a value.
///
/// Neither kind is reachable through `represent` with a configuration built
/// by overlaying onto the defaults; both mark a broken caller contract.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReprError {
    /// A helper received a value of the wrong kind.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
    /// Multi-line layout was requested with nothing to close at `depth`.
    #[error("multi-line format requested at depth {depth}")]
    MisconfiguredFormat { depth: usize },
}

impl From<ValueError> for ReprError {
    fn from(err: ValueError) -> Self {
        match err {
            ValueError::InvalidArgument { message } => ReprError::InvalidArgument { message },
        }
    }
}

#[cold]
pub fn multiline_at_depth(depth: usize) -> ReprError {
    ReprError::MisconfiguredFormat { depth }
}
