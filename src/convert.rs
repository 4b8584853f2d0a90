//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use tell_analysis::AnalysisConfig;
use tell_chain::{ChainModel, StateId, StationaryConfig};

use crate::config::{AnalysisToml, ChainToml, StartToml};

/// Builds the chain model, falling back to the built-in boss chain.
pub fn build_model(chain: Option<&ChainToml>) -> Result<ChainModel> {
    match chain {
        None => Ok(ChainModel::boss()),
        Some(c) => ChainModel::from_parts(c.labels.iter().cloned(), c.matrix.clone())
            .context("invalid [chain] section"),
    }
}

/// Converts a signed step count; negative counts are an invalid parameter.
pub fn parse_steps(steps: i64) -> Result<usize> {
    if steps < 0 {
        bail!("invalid parameter: steps must be non-negative, got {steps}");
    }
    usize::try_from(steps).with_context(|| format!("steps out of range: {steps}"))
}

/// Resolves a start state given as an index or a label.
pub fn resolve_start(model: &ChainModel, start: &StartToml) -> Result<StateId> {
    let state = match start {
        StartToml::Index(i) => {
            let idx = usize::try_from(*i)
                .with_context(|| format!("invalid start state: {i} is negative"))?;
            model.check_state(StateId::new(idx))?
        }
        StartToml::Label(label) => model.state_by_label(label)?,
    };
    Ok(state)
}

/// Parses a CLI `--start` value: digits are an index, anything else a label.
pub fn parse_start_arg(s: &str) -> StartToml {
    match s.parse::<i64>() {
        Ok(i) => StartToml::Index(i),
        Err(_) => StartToml::Label(s.to_string()),
    }
}

/// Builds an [`AnalysisConfig`] from the TOML analysis section.
pub fn build_analysis_config(a: &AnalysisToml) -> Result<AnalysisConfig> {
    let stationary = a.stationary.then(StationaryConfig::new);
    let cfg = AnalysisConfig::new()
        .with_top_k(a.top_k)
        .with_thresholds(a.highly_predictable_below, a.unpredictable_from)
        .with_stationary(stationary);
    cfg.validate().context("invalid [analysis] section")?;
    Ok(cfg)
}
