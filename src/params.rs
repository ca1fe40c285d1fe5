//! Parameter mapping from self-reported inputs to model coefficients.
//!
//! Two declared mappings produce a [`SimulationParameters`] bundle:
//! 1. The questionnaire mapping ([`PersonaInputs::to_parameters`]): bounded
//!    0-10 sliders plus a stress category, converted through a fixed affine
//!    formula set.
//! 2. The journal mapping ([`SimulationParameters::from_journal_entry`]):
//!    coefficients derived from the most recent mood-log record.
//!
//! Both mappings are pure and total over their declared input domains. Input
//! bounds are enforced by whatever collects them (sliders, forms); the
//! mappers assume well-formed input and do not re-validate it. Validation of
//! the *resulting* coefficients happens once, fail-fast, in
//! [`SimulationParameters::validate`].

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BASELINE, DEFAULT_JUMP_STD};
use crate::errors::Error;
use crate::journal::MoodEntry;

/// Self-reported recent bullying / social stress.
///
/// Raises the jump intensity: stressed respondents see shocks more often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    No,
    Maybe,
    Yes,
}

impl StressLevel {
    /// Additive contribution to the per-step jump rate.
    pub fn modifier(self) -> f64 {
        match self {
            StressLevel::No => 0.0,
            StressLevel::Maybe => 0.05,
            StressLevel::Yes => 0.1,
        }
    }
}

/// Raw questionnaire answers, each on a fixed 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaInputs {
    /// "How fast do you recover after emotional setbacks?"
    pub recovery: u8,
    /// "How often does your mood fluctuate unexpectedly?"
    pub instability: u8,
    /// "How strongly do negative events affect you?"
    pub impact: u8,
    /// "How often do unexpected emotional events happen?"
    pub jumpiness: u8,
    /// Recent bullying / social stress.
    pub stress: StressLevel,
}

impl Default for PersonaInputs {
    fn default() -> Self {
        Self {
            recovery: 5,
            instability: 5,
            impact: 5,
            jumpiness: 3,
            stress: StressLevel::No,
        }
    }
}

impl PersonaInputs {
    /// Convert questionnaire answers into model coefficients.
    ///
    /// | input       | range      | parameter  | formula                          |
    /// |-------------|------------|------------|----------------------------------|
    /// | recovery    | 0-10       | mu         | recovery / 10                    |
    /// | instability | 0-10       | sigma_base | 1 + instability * 0.9            |
    /// | impact      | 0-10       | jump_mean  | -3 * impact                      |
    /// | jumpiness   | 0-10       | jump_rate  | 0.01 + jumpiness/100 + modifier  |
    /// | stress      | No/Maybe/Yes | modifier | 0.0 / 0.05 / 0.1                 |
    pub fn to_parameters(&self) -> SimulationParameters {
        SimulationParameters {
            mu: f64::from(self.recovery) / 10.0,
            sigma_base: 1.0 + f64::from(self.instability) * 0.9,
            jump_mean: -3.0 * f64::from(self.impact),
            jump_std: DEFAULT_JUMP_STD,
            jump_rate: 0.01 + f64::from(self.jumpiness) / 100.0 + self.stress.modifier(),
            baseline: DEFAULT_BASELINE,
        }
    }
}

/// Coefficients of the jump-diffusion mood process, derived once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Recovery rate. Scales mean reversion (or the constant drift variant).
    pub mu: f64,
    /// Base volatility of the diffusion term. Strictly positive.
    pub sigma_base: f64,
    /// Mean jump magnitude. Negative for shock-dominated personas.
    pub jump_mean: f64,
    /// Jump magnitude standard deviation. Strictly positive.
    pub jump_std: f64,
    /// Jump intensity per step (Poisson rate or gate probability).
    pub jump_rate: f64,
    /// Mean-reversion target on the 0-100 mood scale.
    pub baseline: f64,
}

impl SimulationParameters {
    /// Derive coefficients from the most recent journal record.
    ///
    /// Irritability and impulsivity widen the diffusion; a low logged mood
    /// biases shocks downward, a decent one biases them slightly upward.
    pub fn from_journal_entry(entry: &MoodEntry) -> Self {
        Self {
            mu: 0.1,
            sigma_base: 1.0 + f64::from(entry.impulsivity + entry.irritability) / 10.0,
            jump_mean: if entry.mood < 4 { -5.0 } else { 3.0 },
            jump_std: 2.0,
            jump_rate: 0.1,
            baseline: DEFAULT_BASELINE,
        }
    }

    /// Fail-fast domain check, run once before a simulation starts.
    ///
    /// Bad coefficients are rejected, never repaired: a degenerate diffusion
    /// or a negative jump intensity would silently produce garbage paths.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.mu.is_finite() {
            return Err(Error::InvalidParameter {
                name: "mu",
                value: self.mu,
                reason: "must be finite",
            });
        }
        if !(self.sigma_base > 0.0) || !self.sigma_base.is_finite() {
            return Err(Error::InvalidParameter {
                name: "sigma_base",
                value: self.sigma_base,
                reason: "must be strictly positive",
            });
        }
        if !self.jump_mean.is_finite() {
            return Err(Error::InvalidParameter {
                name: "jump_mean",
                value: self.jump_mean,
                reason: "must be finite",
            });
        }
        if !(self.jump_std > 0.0) || !self.jump_std.is_finite() {
            return Err(Error::InvalidParameter {
                name: "jump_std",
                value: self.jump_std,
                reason: "must be strictly positive",
            });
        }
        if !(self.jump_rate >= 0.0) || !self.jump_rate.is_finite() {
            return Err(Error::InvalidParameter {
                name: "jump_rate",
                value: self.jump_rate,
                reason: "must be non-negative",
            });
        }
        if !self.baseline.is_finite() {
            return Err(Error::InvalidParameter {
                name: "baseline",
                value: self.baseline,
                reason: "must be finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Utc;

    use crate::journal::TimeOfDay;

    fn entry_with(mood: u8, irritability: u8, impulsivity: u8) -> MoodEntry {
        MoodEntry {
            timestamp: Utc::now(),
            time_of_day: TimeOfDay::Morning,
            mood,
            energy: 5,
            sleep: 5,
            irritability,
            confidence: 5,
            impulsivity,
            notes: String::new(),
        }
    }

    #[test]
    fn questionnaire_mapping_follows_declared_formulas() {
        let inputs = PersonaInputs {
            recovery: 5,
            instability: 10,
            impact: 10,
            jumpiness: 3,
            stress: StressLevel::Yes,
        };
        let params = inputs.to_parameters();

        assert_relative_eq!(params.mu, 0.5);
        assert_relative_eq!(params.sigma_base, 10.0);
        assert_relative_eq!(params.jump_mean, -30.0);
        assert_relative_eq!(params.jump_std, DEFAULT_JUMP_STD);
        assert_relative_eq!(params.jump_rate, 0.01 + 0.03 + 0.1);
        assert_relative_eq!(params.baseline, DEFAULT_BASELINE);
    }

    #[test]
    fn stress_modifiers() {
        assert_relative_eq!(StressLevel::No.modifier(), 0.0);
        assert_relative_eq!(StressLevel::Maybe.modifier(), 0.05);
        assert_relative_eq!(StressLevel::Yes.modifier(), 0.1);
    }

    #[test]
    fn mapping_is_total_over_the_slider_domain() {
        for recovery in 0..=10 {
            for stress in [StressLevel::No, StressLevel::Maybe, StressLevel::Yes] {
                let params = PersonaInputs {
                    recovery,
                    instability: recovery,
                    impact: recovery,
                    jumpiness: recovery,
                    stress,
                }
                .to_parameters();
                assert!(params.validate().is_ok());
            }
        }
    }

    #[test]
    fn journal_mapping_biases_jumps_by_logged_mood() {
        let low = SimulationParameters::from_journal_entry(&entry_with(2, 4, 6));
        assert_relative_eq!(low.jump_mean, -5.0);
        assert_relative_eq!(low.sigma_base, 2.0);

        let ok = SimulationParameters::from_journal_entry(&entry_with(7, 0, 0));
        assert_relative_eq!(ok.jump_mean, 3.0);
        assert_relative_eq!(ok.sigma_base, 1.0);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn validate_rejects_degenerate_coefficients() {
        let good = PersonaInputs::default().to_parameters();

        let zero_sigma = SimulationParameters {
            sigma_base: 0.0,
            ..good.clone()
        };
        assert!(zero_sigma.validate().is_err());

        let negative_rate = SimulationParameters {
            jump_rate: -0.1,
            ..good.clone()
        };
        assert!(negative_rate.validate().is_err());

        let nan_mu = SimulationParameters {
            mu: f64::NAN,
            ..good.clone()
        };
        assert!(nan_mu.validate().is_err());

        let nan_rate = SimulationParameters {
            jump_rate: f64::NAN,
            ..good
        };
        assert!(nan_rate.validate().is_err());
    }
}
