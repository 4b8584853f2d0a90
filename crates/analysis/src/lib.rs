//! Statistics over a simulated Markov chain run.
//!
//! Given a [`ChainModel`] and a [`Sequence`] drawn from it, [`analyze`]
//! computes the empirical state distribution, the most frequent transition
//! pairs, per-state Shannon entropy and the visit-weighted chain entropy,
//! and classifies the chain's predictability. The resulting [`Report`] can
//! be rendered as text ([`render_text`]) or JSON ([`to_json`]).
//!
//! All computations are pure: analysing the same sequence twice yields
//! identical reports.

mod config;
mod entropy;
mod error;
mod frequency;
mod report;

use tracing::debug;

use tell_chain::{ChainModel, Sequence, StateId};

pub use config::{AnalysisConfig, Predictability, PredictabilityThresholds};
pub use entropy::{EntropyTable, state_entropy};
pub use error::AnalysisError;
pub use frequency::{FrequencyTable, PairCount, TransitionCounts};
pub use report::{
    EntropySummary, Report, RunSummary, StateEntropy, StateShare, StationaryStatus,
    TransitionEntry, render_text, to_json,
};

/// Analyse a simulated run.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidParameter`] for an invalid configuration
/// or empty sequence, and [`AnalysisError::InvalidState`] if the sequence
/// contains a state outside the model.
pub fn analyze(
    model: &ChainModel,
    sequence: &Sequence,
    config: &AnalysisConfig,
) -> Result<Report, AnalysisError> {
    config.validate()?;
    let n = model.n_states();

    // Step 1: Tally visits and transitions
    let visits = FrequencyTable::from_sequence(sequence, n)?;
    let transitions = TransitionCounts::from_sequence(sequence, n)?;
    debug!(
        len = visits.total(),
        transitions = transitions.total(),
        "tallied sequence"
    );

    // Step 2: Entropy
    let entropy = EntropyTable::new(model.matrix(), &visits)?;
    let predictability = entropy.predictability(&config.thresholds());
    debug!(
        weighted = entropy.weighted(),
        relative_pct = entropy.relative_pct(),
        %predictability,
        "entropy computed"
    );

    // Step 3: Optional stationary shares; withheld from the table unless converged
    let stationary = match config.stationary() {
        Some(st) => Some(model.stationary_distribution(st)?),
        None => None,
    };
    let stationary_status = stationary.as_ref().map(|st| StationaryStatus {
        converged: st.converged,
        iterations: st.iterations,
    });
    let stationary_probs = stationary
        .filter(|st| st.converged)
        .map(|st| st.probs);

    // Step 4: Assemble
    let start = sequence.first().ok_or_else(|| AnalysisError::InvalidParameter {
        reason: "sequence is empty".to_string(),
    })?;

    let distribution = model
        .states()
        .ids()
        .map(|id| -> Result<StateShare, AnalysisError> {
            Ok(StateShare {
                state: id.as_index(),
                label: model.label(id)?.to_string(),
                count: visits.count(id),
                frequency: visits.frequency(id),
                stationary: stationary_probs.as_ref().map(|p| p[id.as_index()]),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let top_transitions = transitions
        .top(config.top_k())
        .into_iter()
        .map(|p| -> Result<TransitionEntry, AnalysisError> {
            Ok(TransitionEntry {
                from: model.label(p.from)?.to_string(),
                to: model.label(p.to)?.to_string(),
                count: p.count,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let per_state = entropy
        .per_state()
        .iter()
        .enumerate()
        .map(|(i, &h)| -> Result<StateEntropy, AnalysisError> {
            Ok(StateEntropy {
                state: i,
                label: model.label(StateId::new(i))?.to_string(),
                entropy: h,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Report {
        run: RunSummary {
            n_states: n,
            steps: sequence.steps(),
            start: model.label(start)?.to_string(),
            seed: None,
            stationary: stationary_status,
        },
        distribution,
        top_transitions,
        entropy: per_state,
        summary: EntropySummary {
            weighted_entropy: entropy.weighted(),
            max_entropy: entropy.max(),
            relative_pct: entropy.relative_pct(),
            predictability,
        },
    })
}
