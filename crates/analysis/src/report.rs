//! Report structures and their text and JSON renderings.

use std::fmt::Write;

use serde::Serialize;

use crate::config::Predictability;
use crate::error::AnalysisError;

/// Full analysis of one simulated run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// What was simulated.
    pub run: RunSummary,
    /// Empirical share of every state.
    pub distribution: Vec<StateShare>,
    /// Most frequent ordered transitions.
    pub top_transitions: Vec<TransitionEntry>,
    /// Entropy of each state's outgoing row.
    pub entropy: Vec<StateEntropy>,
    /// Chain-level entropy and its classification.
    pub summary: EntropySummary,
}

impl Report {
    /// Records the RNG seed the run was drawn with.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.run.seed = seed;
        self
    }
}

/// Parameters of the simulated run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub n_states: usize,
    pub steps: usize,
    pub start: String,
    pub seed: Option<u64>,
    /// Outcome of the stationary computation, when requested.
    pub stationary: Option<StationaryStatus>,
}

/// Whether the stationary shares in the distribution can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StationaryStatus {
    pub converged: bool,
    pub iterations: usize,
}

/// Visits of a single state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateShare {
    pub state: usize,
    pub label: String,
    pub count: usize,
    pub frequency: f64,
    /// Theoretical long-run share; `None` if disabled or not converged.
    pub stationary: Option<f64>,
}

/// A ranked transition pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionEntry {
    pub from: String,
    pub to: String,
    pub count: usize,
}

/// Entropy of one state's outgoing distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateEntropy {
    pub state: usize,
    pub label: String,
    pub entropy: f64,
}

/// Chain-level entropy summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntropySummary {
    pub weighted_entropy: f64,
    pub max_entropy: f64,
    pub relative_pct: f64,
    pub predictability: Predictability,
}

/// Width of the label column in the text report.
const LABEL_WIDTH: usize = 25;

/// Renders the report as human-readable text.
///
/// Sections appear in a fixed order: empirical distribution, frequent
/// transitions, per-state entropy, weighted-entropy summary, classification.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    write_text(&mut out, report).expect("writing to a String cannot fail");
    out
}

fn write_text(out: &mut String, report: &Report) -> std::fmt::Result {
    writeln!(out, "=== Empirical State Distribution ===")?;
    for share in &report.distribution {
        write!(
            out,
            "{:<width$} -> {:.4}",
            share.label,
            share.frequency,
            width = LABEL_WIDTH
        )?;
        if let Some(st) = share.stationary {
            write!(out, "  (stationary {st:.4})")?;
        }
        writeln!(out)?;
    }
    if let Some(status) = report.run.stationary.filter(|st| !st.converged) {
        writeln!(
            out,
            "(stationary shares omitted: no convergence after {} iterations)",
            status.iterations
        )?;
    }

    writeln!(out, "\n=== Most Frequent Transitions ===")?;
    for t in &report.top_transitions {
        writeln!(out, "{} → {} : {}", t.from, t.to, t.count)?;
    }

    writeln!(out, "\n=== Entropy (Predictability) ===")?;
    for e in &report.entropy {
        writeln!(
            out,
            "{:<width$} -> Entropy: {:.4}",
            e.label,
            e.entropy,
            width = LABEL_WIDTH
        )?;
    }

    let s = &report.summary;
    writeln!(
        out,
        "\nAverage chain entropy during the fight: {:.4}",
        s.weighted_entropy
    )?;
    writeln!(out, "\nMaximum possible entropy:")?;
    writeln!(
        out,
        "  H_max = log2({}) = {:.6}",
        report.run.n_states, s.max_entropy
    )?;
    writeln!(out, "\nShare of maximum entropy:")?;
    writeln!(out, "  H / H_max = {:.2}%", s.relative_pct)?;
    writeln!(
        out,
        "\nInterpretation: the boss's behaviour is {}.",
        s.predictability
    )?;
    Ok(())
}

/// Serializes the report to a pretty-printed JSON string.
pub fn to_json(report: &Report) -> Result<String, AnalysisError> {
    serde_json::to_string_pretty(report).map_err(|e| AnalysisError::Serialization {
        reason: e.to_string(),
    })
}
