//! Error types for the tell-chain crate.

/// Error type for all fallible operations in the tell-chain crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// Returned when the state set or transition matrix is malformed.
    #[error("invalid model: {reason}")]
    InvalidModel {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a state index is outside `0..n_states`.
    #[error("invalid state: {state} (must be < {n_states})")]
    InvalidState {
        /// The offending index.
        state: usize,
        /// Number of states in the model.
        n_states: usize,
    },

    /// Returned when a label does not name any state.
    #[error("unknown state label: {label:?}")]
    UnknownLabel {
        /// The label that was looked up.
        label: String,
    },

    /// Returned when a run would exceed the simulation length limit.
    #[error("too many steps: {steps} (limit {max})")]
    TooManySteps {
        /// Requested number of transitions.
        steps: usize,
        /// Largest accepted number of transitions.
        max: usize,
    },

    /// Returned when a simulation buffer cannot hold the start state.
    #[error("buffer length must be at least 1, got {got}")]
    BufferLength {
        /// Actual buffer length.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_model() {
        let e = ChainError::InvalidModel {
            reason: "row 2 sums to 0.5, expected ~1.0".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid model: row 2 sums to 0.5, expected ~1.0"
        );
    }

    #[test]
    fn error_invalid_state() {
        let e = ChainError::InvalidState {
            state: 9,
            n_states: 7,
        };
        assert_eq!(e.to_string(), "invalid state: 9 (must be < 7)");
    }

    #[test]
    fn error_unknown_label() {
        let e = ChainError::UnknownLabel {
            label: "Uppercut".to_string(),
        };
        assert_eq!(e.to_string(), "unknown state label: \"Uppercut\"");
    }

    #[test]
    fn error_too_many_steps() {
        let e = ChainError::TooManySteps {
            steps: 500,
            max: 100,
        };
        assert_eq!(e.to_string(), "too many steps: 500 (limit 100)");
    }

    #[test]
    fn error_buffer_length() {
        let e = ChainError::BufferLength { got: 0 };
        assert_eq!(e.to_string(), "buffer length must be at least 1, got 0");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ChainError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ChainError>();
    }
}
