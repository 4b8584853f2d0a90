use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level tell configuration. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TellConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Random-walk settings.
    #[serde(default)]
    pub simulation: SimulationToml,

    /// Report settings.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// Custom chain; the built-in boss chain is used when absent.
    #[serde(default)]
    pub chain: Option<ChainToml>,
}

impl TellConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationToml {
    /// Signed so a negative value is reported rather than a TOML type error.
    #[serde(default = "default_steps")]
    pub steps: i64,
    #[serde(default)]
    pub start: StartToml,
}

impl Default for SimulationToml {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            start: StartToml::default(),
        }
    }
}

fn default_steps() -> i64 {
    10_000
}

/// Start state, given either as an index or as a label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StartToml {
    Index(i64),
    Label(String),
}

impl Default for StartToml {
    fn default() -> Self {
        Self::Index(0)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_highly_below")]
    pub highly_predictable_below: f64,
    #[serde(default = "default_unpredictable_from")]
    pub unpredictable_from: f64,
    #[serde(default = "default_true")]
    pub stationary: bool,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            highly_predictable_below: default_highly_below(),
            unpredictable_from: default_unpredictable_from(),
            stationary: true,
        }
    }
}

fn default_top_k() -> usize {
    10
}
fn default_highly_below() -> f64 {
    25.0
}
fn default_unpredictable_from() -> f64 {
    70.0
}
fn default_true() -> bool {
    true
}

/// A custom chain: one label per state and one row per state.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainToml {
    pub labels: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}
