//! Tunable estimator parameters.
//!
//! All structs deserialize with `#[serde(default)]`, so a JSON file only has
//! to name the values it overrides:
//!
//! ```json
//! { "equity": { "trials": 500 }, "bluff": { "divisor": 2.5 } }
//! ```

use std::path::Path;
use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::odds_engine::{
    budget::TrialBudget,
    error::{OddsError, Result},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityConfig {
    /// Monte Carlo trials per estimate.
    pub trials: usize,
    /// Optional wall-clock bound for one estimate.
    pub time_limit_ms: Option<u64>,
}

impl EquityConfig {
    pub const DEFAULT_TRIALS: usize = 5;

    pub fn with_trials(trials: usize) -> Self {
        EquityConfig { trials, ..Default::default() }
    }

    pub fn budget(&self) -> TrialBudget<'static> {
        budget_for(self.trials, self.time_limit_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(OddsError::NoTrials);
        }
        Ok(())
    }
}

impl Default for EquityConfig {
    fn default() -> Self {
        EquityConfig { trials: Self::DEFAULT_TRIALS, time_limit_ms: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BluffConfig {
    /// Hypothetical hands sampled per decision.
    pub trials: usize,
    /// Position, in the descending list of sampled scores, of the reference hand.
    pub percentile_index: usize,
    /// The reference score divided by this must exceed the mean score.
    pub divisor: f64,
    pub time_limit_ms: Option<u64>,
}

impl BluffConfig {
    pub const DEFAULT_TRIALS: usize = 30;
    pub const DEFAULT_PERCENTILE_INDEX: usize = 25;
    pub const DEFAULT_DIVISOR: f64 = 2.2;

    pub fn budget(&self) -> TrialBudget<'static> {
        budget_for(self.trials, self.time_limit_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(OddsError::NoTrials);
        }
        if self.percentile_index >= self.trials {
            return Err(OddsError::PercentileOutOfRange {
                index: self.percentile_index,
                trials: self.trials,
            });
        }
        if !(self.divisor.is_finite() && self.divisor > 0.0) {
            return Err(OddsError::InvalidDivisor(self.divisor));
        }
        Ok(())
    }
}

impl Default for BluffConfig {
    fn default() -> Self {
        BluffConfig {
            trials: Self::DEFAULT_TRIALS,
            percentile_index: Self::DEFAULT_PERCENTILE_INDEX,
            divisor: Self::DEFAULT_DIVISOR,
            time_limit_ms: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OddsConfig {
    pub equity: EquityConfig,
    pub bluff: BluffConfig,
}

impl OddsConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: OddsConfig =
            serde_json::from_str(json).map_err(|e| OddsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| OddsError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.equity.validate()?;
        self.bluff.validate()
    }
}

fn budget_for(trials: usize, time_limit_ms: Option<u64>) -> TrialBudget<'static> {
    let budget = TrialBudget::new(trials);
    match time_limit_ms {
        Some(ms) => budget.with_time_limit(Duration::from_millis(ms)),
        None => budget,
    }
}
