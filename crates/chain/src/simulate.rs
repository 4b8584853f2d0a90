//! Random-walk simulation through a chain.

use tracing::debug;

use crate::error::ChainError;
use crate::model::ChainModel;
use crate::state::StateId;

/// Largest number of transitions [`simulate`] will allocate for.
pub const MAX_STEPS: usize = 100_000_000;

/// An ordered trajectory of visited states.
///
/// Always non-empty: the first element is the start state, followed by one
/// element per simulated transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    states: Vec<StateId>,
}

impl Sequence {
    /// Wraps an existing trajectory, e.g. one recorded from play.
    ///
    /// Range checking against a model happens where the sequence is analysed.
    pub fn from_states(states: Vec<StateId>) -> Self {
        Self { states }
    }

    /// Number of visited states (`steps + 1` for a simulated run).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True if the sequence holds no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of transitions in the sequence.
    pub fn steps(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// The first visited state.
    pub fn first(&self) -> Option<StateId> {
        self.states.first().copied()
    }

    /// The visited states as a slice.
    pub fn as_slice(&self) -> &[StateId] {
        &self.states
    }

    /// Iterates over consecutive `(from, to)` pairs.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, StateId)> + '_ {
        self.states.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Simulates `steps` transitions starting from `start`.
///
/// # Arguments
///
/// * `model` - The chain to walk.
/// * `steps` - Number of transitions; the result holds `steps + 1` states.
/// * `start` - Initial state, included as the first element.
/// * `rng` - Random number generator.
///
/// # Errors
///
/// Returns [`ChainError::InvalidState`] if `start` is not a state of `model`
/// and [`ChainError::TooManySteps`] if `steps` exceeds [`MAX_STEPS`].
pub fn simulate(
    model: &ChainModel,
    steps: usize,
    start: StateId,
    rng: &mut impl rand::Rng,
) -> Result<Sequence, ChainError> {
    if steps > MAX_STEPS {
        return Err(ChainError::TooManySteps {
            steps,
            max: MAX_STEPS,
        });
    }
    let mut out = vec![start; steps + 1];
    simulate_into(model, start, rng, &mut out)?;
    Ok(Sequence::from_states(out))
}

/// Simulates into a pre-allocated buffer.
///
/// Writes `start` to `out[0]` and fills the rest of the buffer with
/// `out.len() - 1` sampled transitions.
///
/// # Errors
///
/// Returns [`ChainError::InvalidState`] if `start` is out of range and
/// [`ChainError::BufferLength`] if `out` is empty.
pub fn simulate_into(
    model: &ChainModel,
    start: StateId,
    rng: &mut impl rand::Rng,
    out: &mut [StateId],
) -> Result<(), ChainError> {
    model.check_state(start)?;
    let Some((first, rest)) = out.split_first_mut() else {
        return Err(ChainError::BufferLength { got: 0 });
    };
    *first = start;
    let matrix = model.matrix();
    let mut current = start;
    for slot in rest.iter_mut() {
        current = matrix.sample(current, rng);
        *slot = current;
    }
    debug!(start = %start, steps = rest.len(), "simulated chain");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cycle3() -> ChainModel {
        ChainModel::from_parts(
            ["A", "B", "C"],
            vec![
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
                vec![1.0, 0.0, 0.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn zero_steps_returns_start_only() {
        let model = ChainModel::boss();
        let mut rng = StdRng::seed_from_u64(1);
        let seq = simulate(&model, 0, StateId::new(4), &mut rng).unwrap();
        assert_eq!(seq.as_slice(), &[StateId::new(4)]);
        assert_eq!(seq.steps(), 0);
        assert_eq!(seq.transitions().count(), 0);
    }

    #[test]
    fn length_and_range() {
        let model = ChainModel::boss();
        let mut rng = StdRng::seed_from_u64(2);
        let seq = simulate(&model, 500, StateId::new(1), &mut rng).unwrap();
        assert_eq!(seq.len(), 501);
        assert_eq!(seq.first(), Some(StateId::new(1)));
        assert!(seq.as_slice().iter().all(|s| s.as_index() < 7));
    }

    #[test]
    fn deterministic_cycle() {
        let model = cycle3();
        let mut rng = StdRng::seed_from_u64(3);
        let seq = simulate(&model, 6, StateId::new(0), &mut rng).unwrap();
        let idx: Vec<usize> = seq.as_slice().iter().map(|s| s.as_index()).collect();
        assert_eq!(idx, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn deterministic_with_seed() {
        let model = ChainModel::boss();
        let mut rng1 = StdRng::seed_from_u64(123);
        let mut rng2 = StdRng::seed_from_u64(123);
        let a = simulate(&model, 1000, StateId::new(0), &mut rng1).unwrap();
        let b = simulate(&model, 1000, StateId::new(0), &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_start_state() {
        let model = ChainModel::boss();
        let mut rng = StdRng::seed_from_u64(4);
        let result = simulate(&model, 10, StateId::new(7), &mut rng);
        assert!(matches!(
            result,
            Err(ChainError::InvalidState {
                state: 7,
                n_states: 7
            })
        ));
    }

    #[test]
    fn oversized_run_is_an_error() {
        let model = ChainModel::boss();
        let mut rng = StdRng::seed_from_u64(6);
        for steps in [MAX_STEPS + 1, usize::MAX] {
            let result = simulate(&model, steps, StateId::new(0), &mut rng);
            assert!(matches!(
                result,
                Err(ChainError::TooManySteps { max: MAX_STEPS, .. })
            ));
        }
    }

    #[test]
    fn into_matches_allocating() {
        let model = ChainModel::boss();
        let mut rng1 = StdRng::seed_from_u64(999);
        let alloc = simulate(&model, 64, StateId::new(2), &mut rng1).unwrap();

        let mut rng2 = StdRng::seed_from_u64(999);
        let mut buf = vec![StateId::new(0); 65];
        simulate_into(&model, StateId::new(2), &mut rng2, &mut buf).unwrap();
        assert_eq!(alloc.as_slice(), buf.as_slice());
    }

    #[test]
    fn empty_buffer_error() {
        let model = ChainModel::boss();
        let mut rng = StdRng::seed_from_u64(5);
        let mut buf: Vec<StateId> = Vec::new();
        let result = simulate_into(&model, StateId::new(0), &mut rng, &mut buf);
        assert!(matches!(result, Err(ChainError::BufferLength { got: 0 })));
    }
}
