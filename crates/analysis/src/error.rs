//! Analysis error types.

use tell_chain::ChainError;

/// Errors that can occur while analysing a simulated run.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// A sequence element does not belong to the model.
    #[error("invalid state in sequence: {state} (must be < {n_states})")]
    InvalidState {
        /// The offending index.
        state: usize,
        /// Number of states in the model.
        n_states: usize,
    },

    /// A parameter is outside its allowed range.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the problem.
        reason: String,
    },

    /// Two inputs disagree on the number of states.
    #[error("dimension mismatch: expected {expected} states, got {got}")]
    DimensionMismatch {
        /// States in the transition matrix.
        expected: usize,
        /// States in the other input.
        got: usize,
    },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Message from the serializer.
        reason: String,
    },

    /// An error from the chain model.
    #[error(transparent)]
    Chain(#[from] ChainError),
}
