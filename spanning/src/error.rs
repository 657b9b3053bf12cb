//! Error-handling module for the crate

use thiserror::Error;

/// Error-Collection for all the possible Errors occurring in this crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An argument violates the contract of the called operation,
    /// e.g. an edge without label is added to a labelled graph
    #[error("invalid argument for `{operation}`: {reason}")]
    InvalidArgument {
        /// Name of the operation that rejected the argument
        operation: &'static str,
        /// Description of the violated requirement
        reason: String,
    },
    /// The operation is not applicable in the current configuration,
    /// e.g. asking for a label in an unlabelled graph
    #[error("invalid state for `{operation}`: {reason}")]
    InvalidState {
        /// Name of the operation that could not be performed
        operation: &'static str,
        /// Description of the conflicting state
        reason: String,
    },
    /// An element was requested from an empty queue
    #[error("cannot pop from an empty priority queue")]
    EmptyQueue,
    /// Weights must be finite numbers
    #[error("edge weights must be finite, got {0}")]
    NonFiniteWeight(f64),
    /// The sum of edge weights left the range of finite values
    #[error("total weight exceeds the range of finite numbers")]
    WeightOverflow,
    /// Error occurred during parsing of a weight
    #[error(transparent)]
    WeightParse(#[from] std::num::ParseFloatError),
}

impl Error {
    /// Create an [`Error::InvalidArgument`].
    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    /// Create an [`Error::InvalidState`].
    pub(crate) fn invalid_state(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            operation,
            reason: reason.into(),
        }
    }
}
