//! Labelled Markov chain model.

use crate::error::ChainError;
use crate::state::{StateId, StateSet};
use crate::transition::TransitionMatrix;

/// Labels of the built-in boss chain, in state order.
pub const BOSS_LABELS: [&str; 7] = [
    "Idle",
    "Jab",
    "Swing Right",
    "Swing Left",
    "Hopping Stab",
    "Hopping Swing",
    "Hopping Stab High/Slow",
];

/// Transition probabilities of the built-in boss chain.
pub const BOSS_MATRIX: [[f64; 7]; 7] = [
    [0.13, 0.16, 0.13, 0.00, 0.58, 0.00, 0.00],
    [0.25, 0.50, 0.00, 0.25, 0.00, 0.00, 0.00],
    [0.00, 0.00, 0.00, 1.00, 0.00, 0.00, 0.00],
    [1.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00],
    [0.13, 0.00, 0.00, 0.00, 0.70, 0.04, 0.13],
    [1.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00],
    [1.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00],
];

/// A validated chain: labelled states plus a matching transition matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainModel {
    states: StateSet,
    matrix: TransitionMatrix,
}

impl ChainModel {
    /// Pairs a state set with a transition matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidModel`] if the number of labels differs
    /// from the matrix dimension.
    pub fn new(states: StateSet, matrix: TransitionMatrix) -> Result<Self, ChainError> {
        if states.len() != matrix.n_states() {
            return Err(ChainError::InvalidModel {
                reason: format!(
                    "{} state labels for a {n}x{n} matrix",
                    states.len(),
                    n = matrix.n_states()
                ),
            });
        }
        Ok(Self { states, matrix })
    }

    /// Builds a model from raw labels and rows.
    pub fn from_parts<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, ChainError> {
        Self::new(StateSet::new(labels)?, TransitionMatrix::new(rows)?)
    }

    /// The built-in seven-state boss attack chain.
    pub fn boss() -> Self {
        let states = StateSet::new(BOSS_LABELS).expect("built-in labels are unique");
        let matrix =
            TransitionMatrix::from_array(BOSS_MATRIX).expect("built-in matrix is stochastic");
        Self { states, matrix }
    }

    /// Number of states.
    pub fn n_states(&self) -> usize {
        self.matrix.n_states()
    }

    /// The labelled state set.
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// The transition matrix.
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Returns `state` if it lies in `0..n_states`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidState`] otherwise.
    pub fn check_state(&self, state: StateId) -> Result<StateId, ChainError> {
        if state.as_index() < self.n_states() {
            Ok(state)
        } else {
            Err(ChainError::InvalidState {
                state: state.as_index(),
                n_states: self.n_states(),
            })
        }
    }

    /// Label of a state.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidState`] if the state is out of range.
    pub fn label(&self, state: StateId) -> Result<&str, ChainError> {
        self.states.label(state).ok_or(ChainError::InvalidState {
            state: state.as_index(),
            n_states: self.n_states(),
        })
    }

    /// Resolves a state from its label.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownLabel`] if no state carries that label.
    pub fn state_by_label(&self, label: &str) -> Result<StateId, ChainError> {
        self.states.find(label).ok_or_else(|| ChainError::UnknownLabel {
            label: label.to_string(),
        })
    }
}
