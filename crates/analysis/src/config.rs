//! Configuration for run analysis.

use serde::Serialize;
use tell_chain::StationaryConfig;

use crate::error::AnalysisError;

/// Qualitative predictability of a chain, from its relative entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predictability {
    /// Relative entropy below the lower threshold.
    HighlyPredictable,
    /// Relative entropy in `[lower, upper)`.
    ModeratelyPredictable,
    /// Relative entropy at or above the upper threshold.
    Unpredictable,
}

impl Predictability {
    /// Classifies a relative entropy percentage with the default 25 / 70 bands.
    pub fn classify(relative_pct: f64) -> Self {
        PredictabilityThresholds::default().classify(relative_pct)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::HighlyPredictable => "highly predictable",
            Self::ModeratelyPredictable => "moderately predictable",
            Self::Unpredictable => "unpredictable",
        }
    }
}

impl std::fmt::Display for Predictability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Half-open percentage bands for [`Predictability`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictabilityThresholds {
    /// `r < highly_below` is highly predictable.
    pub highly_below: f64,
    /// `r >= unpredictable_from` is unpredictable.
    pub unpredictable_from: f64,
}

impl PredictabilityThresholds {
    /// Classifies a relative entropy percentage. Boundary values fall in the
    /// upper band.
    pub fn classify(&self, relative_pct: f64) -> Predictability {
        if relative_pct < self.highly_below {
            Predictability::HighlyPredictable
        } else if relative_pct < self.unpredictable_from {
            Predictability::ModeratelyPredictable
        } else {
            Predictability::Unpredictable
        }
    }
}

impl Default for PredictabilityThresholds {
    fn default() -> Self {
        Self {
            highly_below: 25.0,
            unpredictable_from: 70.0,
        }
    }
}

/// Configuration for [`analyze`](crate::analyze).
///
/// # Example
///
/// ```
/// use tell_analysis::AnalysisConfig;
///
/// let config = AnalysisConfig::new().with_top_k(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    top_k: usize,
    thresholds: PredictabilityThresholds,
    stationary: Option<StationaryConfig>,
}

impl AnalysisConfig {
    /// Defaults: `top_k = 10`, thresholds 25 / 70, stationary shares enabled.
    pub fn new() -> Self {
        Self {
            top_k: 10,
            thresholds: PredictabilityThresholds::default(),
            stationary: Some(StationaryConfig::new()),
        }
    }

    /// Sets how many transition pairs to report.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the predictability bands.
    pub fn with_thresholds(mut self, highly_below: f64, unpredictable_from: f64) -> Self {
        self.thresholds = PredictabilityThresholds {
            highly_below,
            unpredictable_from,
        };
        self
    }

    /// Enables (`Some`) or disables (`None`) stationary shares in the report.
    pub fn with_stationary(mut self, stationary: Option<StationaryConfig>) -> Self {
        self.stationary = stationary;
        self
    }

    // --- Accessors ---

    /// Returns the number of transition pairs to report.
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Returns the predictability bands.
    pub fn thresholds(&self) -> PredictabilityThresholds {
        self.thresholds
    }

    /// Returns the stationary configuration, if enabled.
    pub fn stationary(&self) -> Option<&StationaryConfig> {
        self.stationary.as_ref()
    }

    /// Validates this configuration.
    ///
    /// Checks that `top_k >= 1` and `0 <= highly_below <= unpredictable_from <= 100`.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.top_k == 0 {
            return Err(AnalysisError::InvalidParameter {
                reason: "top_k must be at least 1".to_string(),
            });
        }
        let PredictabilityThresholds {
            highly_below: lo,
            unpredictable_from: hi,
        } = self.thresholds;
        if !lo.is_finite() || !hi.is_finite() || lo < 0.0 || lo > hi || hi > 100.0 {
            return Err(AnalysisError::InvalidParameter {
                reason: format!(
                    "thresholds must satisfy 0 <= highly_below <= unpredictable_from <= 100, \
                     got {lo} and {hi}"
                ),
            });
        }
        if let Some(st) = &self.stationary {
            st.validate()?;
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}
