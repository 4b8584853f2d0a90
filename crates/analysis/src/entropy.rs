//! Per-state and visitation-weighted entropy.

use tell_chain::{StateId, TransitionMatrix};
use tell_stats::{entropy_ratio_pct, max_entropy, shannon_entropy, weighted_sum};

use crate::config::{Predictability, PredictabilityThresholds};
use crate::error::AnalysisError;
use crate::frequency::FrequencyTable;

/// Shannon entropy (bits) of a state's outgoing row.
pub fn state_entropy(matrix: &TransitionMatrix, state: StateId) -> f64 {
    shannon_entropy(matrix.row(state))
}

/// Entropy of every state's row plus the visit-weighted chain average.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyTable {
    per_state: Vec<f64>,
    weighted: f64,
    max: f64,
}

impl EntropyTable {
    /// Computes `H(i)` for every row and `H_avg = sum(freq(i) * H(i))`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DimensionMismatch`] if the table and matrix
    /// cover a different number of states.
    pub fn new(matrix: &TransitionMatrix, visits: &FrequencyTable) -> Result<Self, AnalysisError> {
        if visits.n_states() != matrix.n_states() {
            return Err(AnalysisError::DimensionMismatch {
                expected: matrix.n_states(),
                got: visits.n_states(),
            });
        }
        let per_state: Vec<f64> = matrix.rows().map(shannon_entropy).collect();
        let weighted = weighted_sum(&visits.frequencies(), &per_state);
        Ok(Self {
            per_state,
            weighted,
            max: max_entropy(matrix.n_states()),
        })
    }

    /// Entropy of each state's row, in state order.
    pub fn per_state(&self) -> &[f64] {
        &self.per_state
    }

    /// Visit-weighted average entropy of the run.
    pub fn weighted(&self) -> f64 {
        self.weighted
    }

    /// `log2(N)`, the entropy of a uniform choice among all states.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `100 * weighted / max`.
    pub fn relative_pct(&self) -> f64 {
        entropy_ratio_pct(self.weighted, self.max)
    }

    /// Classifies [`relative_pct`](Self::relative_pct).
    pub fn predictability(&self, thresholds: &PredictabilityThresholds) -> Predictability {
        thresholds.classify(self.relative_pct())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tell_chain::{ChainModel, Sequence};

    fn visits(ids: &[usize], n: usize) -> FrequencyTable {
        let seq = Sequence::from_states(ids.iter().map(|&i| StateId::new(i)).collect());
        FrequencyTable::from_sequence(&seq, n).unwrap()
    }

    #[test]
    fn deterministic_row_is_zero() {
        let model = ChainModel::boss();
        // Swing Left always returns to Idle.
        assert_eq!(state_entropy(model.matrix(), StateId::new(3)), 0.0);
    }

    #[test]
    fn uniform_row_is_log2_k() {
        let tm = TransitionMatrix::from_array([
            [0.25, 0.25, 0.25, 0.25],
            [0.5, 0.5, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
            [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 0.0],
        ])
        .unwrap();
        assert_relative_eq!(state_entropy(&tm, StateId::new(0)), 2.0, epsilon = 1e-12);
        assert_relative_eq!(state_entropy(&tm, StateId::new(1)), 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            state_entropy(&tm, StateId::new(3)),
            3f64.log2(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn boss_row_entropies() {
        let model = ChainModel::boss();
        let table = EntropyTable::new(model.matrix(), &visits(&[0], 7)).unwrap();
        let h = table.per_state();
        assert_relative_eq!(h[0], 1.644113, epsilon = 1e-6);
        assert_relative_eq!(h[1], 1.5, epsilon = 1e-12);
        assert_relative_eq!(h[4], 1.311244, epsilon = 1e-6);
        assert_eq!(h[2], 0.0);
        assert_eq!(h[5], 0.0);
        assert_relative_eq!(table.max(), 2.807355, epsilon = 1e-6);
    }

    #[test]
    fn weighted_average_uses_visits() {
        let model = ChainModel::boss();
        // Half Idle, half Jab: (1.644113 + 1.5) / 2
        let table = EntropyTable::new(model.matrix(), &visits(&[0, 1, 0, 1], 7)).unwrap();
        assert_relative_eq!(table.weighted(), (1.6441128859 + 1.5) / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn unvisited_states_contribute_nothing() {
        let model = ChainModel::boss();
        // Only deterministic states visited.
        let table = EntropyTable::new(model.matrix(), &visits(&[2, 3, 5, 6], 7)).unwrap();
        assert_eq!(table.weighted(), 0.0);
        assert_eq!(table.relative_pct(), 0.0);
        assert_eq!(
            table.predictability(&PredictabilityThresholds::default()),
            Predictability::HighlyPredictable
        );
    }

    #[test]
    fn dimension_mismatch() {
        let model = ChainModel::boss();
        let result = EntropyTable::new(model.matrix(), &visits(&[0, 1], 3));
        assert!(matches!(
            result,
            Err(AnalysisError::DimensionMismatch {
                expected: 7,
                got: 3
            })
        ));
    }
}
