//! State identifiers and labelled state sets.

use std::collections::HashSet;
use std::fmt;

use crate::error::ChainError;

/// Index of a state in a chain, in `0..n_states`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    /// Wraps a raw index. Range is checked where a model is available.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the zero-based index of this state.
    pub fn as_index(self) -> usize {
        self.0
    }
}

impl From<usize> for StateId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, non-empty set of unique human-readable state labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSet {
    labels: Vec<String>,
}

impl StateSet {
    /// Builds a state set from labels in index order.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidModel`] if there are no labels, a label
    /// is blank, or a label appears twice.
    pub fn new<I, S>(labels: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ChainError::InvalidModel {
                reason: "state set is empty".to_string(),
            });
        }
        let mut seen = HashSet::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(ChainError::InvalidModel {
                    reason: format!("state {i} has an empty label"),
                });
            }
            if !seen.insert(label.as_str()) {
                return Err(ChainError::InvalidModel {
                    reason: format!("duplicate state label {label:?}"),
                });
            }
        }
        Ok(Self { labels })
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a constructed set; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of a state, or `None` if out of range.
    pub fn label(&self, state: StateId) -> Option<&str> {
        self.labels.get(state.as_index()).map(String::as_str)
    }

    /// Looks up a state by exact label.
    pub fn find(&self, label: &str) -> Option<StateId> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(StateId::new)
    }

    /// All state ids in index order.
    pub fn ids(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.labels.len()).map(StateId::new)
    }
}
