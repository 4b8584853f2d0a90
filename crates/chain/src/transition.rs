//! Row-stochastic transition matrix and categorical sampling.

use crate::error::ChainError;
use crate::state::StateId;

/// Maximum allowed deviation of a row sum from 1.0.
pub const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// An N x N row-stochastic transition matrix.
///
/// Row `i` holds the probabilities of moving from state `i` to each state
/// `0..N`. Entries are finite and in `[0, 1]`, and every row sums to 1.0
/// within [`ROW_SUM_TOLERANCE`]. Construction validates, so a value of this
/// type is always a valid chain.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    n: usize,
    probs: Vec<f64>,
}

impl TransitionMatrix {
    /// Builds a matrix from rows and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidModel`] if the matrix is empty, not
    /// square, or not row-stochastic.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ChainError> {
        let n = rows.len();
        if n == 0 {
            return Err(ChainError::InvalidModel {
                reason: "transition matrix has no rows".to_string(),
            });
        }
        let mut probs = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(ChainError::InvalidModel {
                    reason: format!("row {i} has {} entries, expected {n}", row.len()),
                });
            }
            probs.extend(row);
        }
        let matrix = Self { n, probs };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Builds a matrix from a fixed-size array.
    pub fn from_array<const N: usize>(rows: [[f64; N]; N]) -> Result<Self, ChainError> {
        Self::new(rows.iter().map(|r| r.to_vec()).collect())
    }

    /// Number of states (rows).
    pub fn n_states(&self) -> usize {
        self.n
    }

    /// Returns the outgoing probabilities of a state.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of range.
    pub fn row(&self, from: StateId) -> &[f64] {
        let i = from.as_index();
        assert!(i < self.n, "state {i} out of range for {} states", self.n);
        &self.probs[i * self.n..(i + 1) * self.n]
    }

    /// Returns the probability of moving from one state to another.
    pub fn prob(&self, from: StateId, to: StateId) -> f64 {
        self.row(from)[to.as_index()]
    }

    /// Iterates over all rows in state order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.probs.chunks_exact(self.n)
    }

    /// Validates that the matrix is row-stochastic.
    ///
    /// Checks that all values are finite, in `[0, 1]`, and that each row
    /// sums to 1.0 within [`ROW_SUM_TOLERANCE`].
    pub fn validate(&self) -> Result<(), ChainError> {
        for (i, row) in self.rows().enumerate() {
            let mut sum = 0.0;
            for (j, &p) in row.iter().enumerate() {
                if !p.is_finite() {
                    return Err(ChainError::InvalidModel {
                        reason: format!("probs[{i}][{j}] is not finite: {p}"),
                    });
                }
                if !(0.0..=1.0).contains(&p) {
                    return Err(ChainError::InvalidModel {
                        reason: format!("probs[{i}][{j}] = {p} is outside [0, 1]"),
                    });
                }
                sum += p;
            }
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(ChainError::InvalidModel {
                    reason: format!("row {i} sums to {sum}, expected ~1.0"),
                });
            }
        }
        Ok(())
    }

    /// Samples the next state given the current state, using the row's CDF.
    ///
    /// Draws `u` uniformly from `[0, 1)` and returns the first state whose
    /// cumulative probability exceeds `u`. Zero-probability states are never
    /// returned. If rounding leaves the row total just below `u`, the last
    /// state with positive probability is returned.
    pub fn sample(&self, from: StateId, rng: &mut impl rand::Rng) -> StateId {
        let u: f64 = rng.random();
        let row = self.row(from);
        let mut cumulative = 0.0;
        let mut last_positive = 0;
        for (j, &p) in row.iter().enumerate() {
            if p <= 0.0 {
                continue;
            }
            cumulative += p;
            last_positive = j;
            if cumulative > u {
                return StateId::new(j);
            }
        }
        StateId::new(last_positive)
    }
}
