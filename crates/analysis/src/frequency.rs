//! Visit and transition tallies over a simulated sequence.

use std::cmp::Ordering;

use tell_chain::{Sequence, StateId};

use crate::error::AnalysisError;

/// Visit count of every state in a sequence, zero-filled for unvisited states.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    counts: Vec<usize>,
    total: usize,
}

impl FrequencyTable {
    /// Tallies visits for states `0..n_states`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidParameter`] for an empty sequence and
    /// [`AnalysisError::InvalidState`] if an element is `>= n_states`.
    pub fn from_sequence(sequence: &Sequence, n_states: usize) -> Result<Self, AnalysisError> {
        if sequence.is_empty() {
            return Err(AnalysisError::InvalidParameter {
                reason: "sequence is empty".to_string(),
            });
        }
        let mut counts = vec![0usize; n_states];
        for &s in sequence.as_slice() {
            let slot = counts
                .get_mut(s.as_index())
                .ok_or(AnalysisError::InvalidState {
                    state: s.as_index(),
                    n_states,
                })?;
            *slot += 1;
        }
        Ok(Self {
            counts,
            total: sequence.len(),
        })
    }

    /// Number of states covered by the table.
    pub fn n_states(&self) -> usize {
        self.counts.len()
    }

    /// Length of the tallied sequence.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Visit count of a state; 0 if out of range.
    pub fn count(&self, state: StateId) -> usize {
        self.counts.get(state.as_index()).copied().unwrap_or(0)
    }

    /// Visit counts in state order.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Empirical share of a state, `count / total`.
    pub fn frequency(&self, state: StateId) -> f64 {
        self.count(state) as f64 / self.total as f64
    }

    /// Empirical shares in state order; sums to 1.
    pub fn frequencies(&self) -> Vec<f64> {
        let total = self.total as f64;
        self.counts.iter().map(|&c| c as f64 / total).collect()
    }
}

/// One ordered transition pair and how often it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairCount {
    pub from: StateId,
    pub to: StateId,
    pub count: usize,
}

impl PairCount {
    /// Report order: count descending, then `from` ascending, then `to` ascending.
    pub fn report_order(a: &Self, b: &Self) -> Ordering {
        b.count
            .cmp(&a.count)
            .then(a.from.cmp(&b.from))
            .then(a.to.cmp(&b.to))
    }
}

/// Counts of each ordered consecutive pair `(seq[i], seq[i + 1])`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionCounts {
    n: usize,
    counts: Vec<usize>,
    total: usize,
}

impl TransitionCounts {
    /// Tallies transitions for states `0..n_states`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidState`] if an element is `>= n_states`.
    pub fn from_sequence(sequence: &Sequence, n_states: usize) -> Result<Self, AnalysisError> {
        let check = |s: StateId| {
            if s.as_index() < n_states {
                Ok(s.as_index())
            } else {
                Err(AnalysisError::InvalidState {
                    state: s.as_index(),
                    n_states,
                })
            }
        };
        let mut counts = vec![0usize; n_states * n_states];
        let mut total = 0;
        for (from, to) in sequence.transitions() {
            counts[check(from)? * n_states + check(to)?] += 1;
            total += 1;
        }
        // A single-element sequence has no pairs but its state must still be valid.
        if let Some(first) = sequence.first() {
            check(first)?;
        }
        Ok(Self {
            n: n_states,
            counts,
            total,
        })
    }

    /// Total number of transitions tallied.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Count of one ordered pair; 0 if out of range.
    pub fn count(&self, from: StateId, to: StateId) -> usize {
        let (i, j) = (from.as_index(), to.as_index());
        if i >= self.n || j >= self.n {
            return 0;
        }
        self.counts[i * self.n + j]
    }

    /// Every observed pair (count > 0) in [`PairCount::report_order`].
    pub fn ranked(&self) -> Vec<PairCount> {
        let mut pairs: Vec<PairCount> = self
            .counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(k, &count)| PairCount {
                from: StateId::new(k / self.n),
                to: StateId::new(k % self.n),
                count,
            })
            .collect();
        pairs.sort_by(PairCount::report_order);
        pairs
    }

    /// The `k` most frequent pairs in [`PairCount::report_order`].
    pub fn top(&self, k: usize) -> Vec<PairCount> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }
}
