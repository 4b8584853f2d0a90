//! Long-run state shares by power iteration.

use tracing::{debug, warn};

use crate::error::ChainError;
use crate::model::ChainModel;
use crate::transition::TransitionMatrix;

/// Configuration for the stationary-distribution power iteration.
///
/// # Example
///
/// ```
/// use tell_chain::StationaryConfig;
///
/// let config = StationaryConfig::new().with_tolerance(1e-10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StationaryConfig {
    tolerance: f64,
    max_iterations: usize,
}

impl StationaryConfig {
    /// Defaults: `tolerance = 1e-12` (L1 change per step), `max_iterations = 10_000`.
    pub fn new() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 10_000,
        }
    }

    /// Sets the L1 convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Returns the L1 convergence tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Checks that the tolerance is finite and positive and the cap non-zero.
    pub fn validate(&self) -> Result<(), ChainError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ChainError::InvalidModel {
                reason: format!(
                    "stationary tolerance must be finite and positive, got {}",
                    self.tolerance
                ),
            });
        }
        if self.max_iterations == 0 {
            return Err(ChainError::InvalidModel {
                reason: "stationary max_iterations must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for StationaryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a stationary-distribution computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Stationary {
    /// Long-run share of each state; sums to 1.
    pub probs: Vec<f64>,
    /// Iterations performed.
    pub iterations: usize,
    /// False if the cap was hit first; `probs` is then only an approximation.
    pub converged: bool,
}

/// Computes `pi = pi P` by power iteration from the uniform vector.
///
/// Iterates the lazy chain `(I + P) / 2`, which has the same stationary
/// distribution as `P` but no periodicity, so bipartite and cyclic chains
/// converge instead of oscillating.
pub fn stationary_distribution(
    matrix: &TransitionMatrix,
    config: &StationaryConfig,
) -> Result<Stationary, ChainError> {
    config.validate()?;
    let n = matrix.n_states();
    let mut pi = vec![1.0 / n as f64; n];
    let mut next = vec![0.0; n];

    for iteration in 1..=config.max_iterations() {
        for (acc, &stay) in next.iter_mut().zip(&pi) {
            *acc = 0.5 * stay;
        }
        for (row, &weight) in matrix.rows().zip(&pi) {
            if weight == 0.0 {
                continue;
            }
            for (acc, &p) in next.iter_mut().zip(row) {
                *acc += 0.5 * weight * p;
            }
        }
        normalize(&mut next);
        let delta: f64 = pi.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
        std::mem::swap(&mut pi, &mut next);
        if delta < config.tolerance() {
            debug!(iterations = iteration, delta, "stationary distribution converged");
            return Ok(Stationary {
                probs: pi,
                iterations: iteration,
                converged: true,
            });
        }
    }

    warn!(
        max_iterations = config.max_iterations(),
        "stationary distribution did not converge"
    );
    Ok(Stationary {
        probs: pi,
        iterations: config.max_iterations(),
        converged: false,
    })
}

/// Rescales to sum 1; rows are stochastic, so this only absorbs rounding drift.
fn normalize(v: &mut [f64]) {
    let s: f64 = v.iter().sum();
    if s > 0.0 {
        v.iter_mut().for_each(|x| *x /= s);
    }
}

impl ChainModel {
    /// Long-run share of each state. See [`stationary_distribution`].
    pub fn stationary_distribution(
        &self,
        config: &StationaryConfig,
    ) -> Result<Stationary, ChainError> {
        stationary_distribution(self.matrix(), config)
    }
}
