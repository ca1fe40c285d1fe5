//! Simulator configuration: horizon, strategy selection, and seeding.
//!
//! The source deployments of this model disagree on three behaviors (drift
//! shape, jump arrival, volatility dynamics). Each is an explicit named
//! strategy selected here rather than a hidden conditional, so a deployment
//! declares the variant it runs.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::{DEFAULT_COLLAPSE_THRESHOLD, DEFAULT_HORIZON};
use crate::errors::Error;

/// Shape of the deterministic drift term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftMode {
    /// `mu * (baseline - M_prev)`: mood is pulled back toward its baseline.
    MeanReverting,
    /// `mu * dt`: a constant recovery tendency with no baseline pull.
    Constant,
}

impl Default for DriftMode {
    fn default() -> Self {
        DriftMode::MeanReverting
    }
}

/// How emotional shocks arrive within one step.
///
/// The two policies are alternatives, never mixed within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpPolicy {
    /// Poisson(jump_rate) count of independent shocks, summed.
    CompoundPoisson,
    /// At most one shock per step, gated with probability jump_rate.
    SingleGated,
}

impl Default for JumpPolicy {
    fn default() -> Self {
        JumpPolicy::CompoundPoisson
    }
}

/// Dynamics of the diffusion scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum VolatilityMode {
    /// Constant `sigma_base`.
    Fixed,
    /// `sigma_base * (1 + (1 - M_prev/100))`: volatility rises as mood sinks.
    /// Deterministic given the path; no volatility trajectory is recorded.
    MoodAdaptive,
    /// Mean-reverting random volatility:
    /// `vol = max(vol + kappa*(sigma_base - vol) + eta*Z, 0.1)`.
    Stochastic {
        #[serde(default = "default_kappa")]
        kappa: f64,
        #[serde(default = "default_eta")]
        eta: f64,
    },
}

fn default_kappa() -> f64 {
    1.0
}

fn default_eta() -> f64 {
    0.3
}

impl Default for VolatilityMode {
    fn default() -> Self {
        VolatilityMode::Fixed
    }
}

impl VolatilityMode {
    /// Stochastic dynamics with the stock kappa/eta constants.
    pub fn stochastic() -> Self {
        VolatilityMode::Stochastic {
            kappa: default_kappa(),
            eta: default_eta(),
        }
    }
}

/// How the random stream is seeded for a run.
///
/// The original deployments sometimes froze the seed and sometimes did not,
/// without saying which they meant. Here the choice is explicit: pick
/// [`SeedMode::Fixed`] for reproducible paths, [`SeedMode::Entropy`] for a
/// fresh path per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// Deterministic: identical configuration and seed reproduce the
    /// trajectory bit for bit.
    Fixed(u64),
    /// Seed from OS entropy on every run.
    Entropy,
}

impl Default for SeedMode {
    fn default() -> Self {
        SeedMode::Entropy
    }
}

/// Full configuration of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Number of discrete steps. The trajectory has `horizon + 1` values.
    #[serde(default = "default_horizon")]
    pub horizon: usize,

    /// Mood level that flags a trajectory as at risk (strictly below).
    #[serde(default = "default_collapse_threshold")]
    pub collapse_threshold: f64,

    #[serde(default)]
    pub drift: DriftMode,

    #[serde(default)]
    pub jump: JumpPolicy,

    #[serde(default)]
    pub volatility: VolatilityMode,

    #[serde(default)]
    pub seed: SeedMode,
}

fn default_horizon() -> usize {
    DEFAULT_HORIZON
}

fn default_collapse_threshold() -> f64 {
    DEFAULT_COLLAPSE_THRESHOLD
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            collapse_threshold: default_collapse_threshold(),
            drift: DriftMode::default(),
            jump: JumpPolicy::default(),
            volatility: VolatilityMode::default(),
            seed: SeedMode::default(),
        }
    }
}

impl SimulatorConfig {
    /// The full jump-diffusion model: mean reversion, compound Poisson
    /// shocks, stochastic volatility.
    pub fn jump_diffusion() -> Self {
        Self {
            volatility: VolatilityMode::stochastic(),
            ..Default::default()
        }
    }

    /// The simplified questionnaire model: constant drift, one gated shock
    /// per step, fixed volatility.
    pub fn questionnaire() -> Self {
        Self {
            drift: DriftMode::Constant,
            jump: JumpPolicy::SingleGated,
            ..Default::default()
        }
    }

    /// Fix the seed on an otherwise unchanged configuration.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = SeedMode::Fixed(seed);
        self
    }

    /// Parse from a JSON value, falling back to defaults on a bad payload.
    pub fn from_json(config: &Value) -> Self {
        serde_json::from_value(config.clone()).unwrap_or_else(|e| {
            warn!("Failed to parse simulator config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Fail-fast domain check, run once before a simulation starts.
    pub fn validate(&self) -> Result<(), Error> {
        if self.horizon == 0 {
            return Err(Error::InvalidConfig(
                "horizon must be at least 1 step".to_string(),
            ));
        }
        if !self.collapse_threshold.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "collapse_threshold must be finite, got {}",
                self.collapse_threshold
            )));
        }
        if let VolatilityMode::Stochastic { kappa, eta } = self.volatility {
            if !kappa.is_finite() || kappa < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "stochastic volatility kappa must be finite and non-negative, got {}",
                    kappa
                )));
            }
            if !eta.is_finite() || eta < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "stochastic volatility eta must be finite and non-negative, got {}",
                    eta
                )));
            }
        }
        Ok(())
    }
}
