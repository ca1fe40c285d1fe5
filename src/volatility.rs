//! Per-run volatility dynamics.
//!
//! One [`VolatilityState`] is created fresh at the start of each simulation
//! run and discarded at its end; runs never share it. In stochastic mode the
//! scale follows a mean-reverting update toward `sigma_base` with a hard
//! floor, so the diffusion term can never collapse to zero.

use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::config::VolatilityMode;
use crate::consts::{MOOD_MAX, VOLATILITY_FLOOR};

/// Current diffusion scale for a single run.
#[derive(Debug, Clone)]
pub struct VolatilityState {
    current: f64,
}

impl VolatilityState {
    pub(crate) fn new(sigma_base: f64) -> Self {
        Self {
            current: sigma_base,
        }
    }

    /// Current scale. Starts at `sigma_base`; in stochastic mode this is the
    /// latest floored value.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Advance one step and return the scale to apply to this step's
    /// diffusion draw.
    ///
    /// Only stochastic mode consumes randomness (one standard-normal Z); the
    /// other modes leave the random stream untouched.
    pub(crate) fn step(
        &mut self,
        mode: &VolatilityMode,
        sigma_base: f64,
        prev_mood: f64,
        rng: &mut StdRng,
    ) -> f64 {
        match *mode {
            VolatilityMode::Fixed => sigma_base,
            VolatilityMode::MoodAdaptive => sigma_base * (1.0 + (1.0 - prev_mood / MOOD_MAX)),
            VolatilityMode::Stochastic { kappa, eta } => {
                let z = Normal::new(0.0, 1.0).unwrap().sample(rng);
                self.current =
                    (self.current + kappa * (sigma_base - self.current) + eta * z).max(VOLATILITY_FLOOR);
                self.current
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;

    #[test]
    fn fixed_mode_returns_sigma_base_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = VolatilityState::new(3.0);
        for _ in 0..10 {
            assert_relative_eq!(state.step(&VolatilityMode::Fixed, 3.0, 50.0, &mut rng), 3.0);
        }
        assert_relative_eq!(state.current(), 3.0);
    }

    #[test]
    fn adaptive_mode_doubles_at_rock_bottom_mood() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = VolatilityState::new(2.0);

        let at_floor = state.step(&VolatilityMode::MoodAdaptive, 2.0, 0.0, &mut rng);
        assert_relative_eq!(at_floor, 4.0);

        let at_ceiling = state.step(&VolatilityMode::MoodAdaptive, 2.0, 100.0, &mut rng);
        assert_relative_eq!(at_ceiling, 2.0);

        let midway = state.step(&VolatilityMode::MoodAdaptive, 2.0, 50.0, &mut rng);
        assert_relative_eq!(midway, 3.0);
    }

    #[test]
    fn stochastic_mode_never_breaks_the_floor() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = VolatilityState::new(0.5);
        let mode = VolatilityMode::Stochastic {
            kappa: 1.2,
            eta: 8.0,
        };
        for _ in 0..500 {
            let sigma = state.step(&mode, 0.5, 50.0, &mut rng);
            assert!(sigma >= VOLATILITY_FLOOR);
            assert_relative_eq!(sigma, state.current());
        }
    }

    #[test]
    fn stochastic_mode_reverts_toward_sigma_base() {
        // With eta = 0 the update is deterministic except for the consumed
        // draw, so the pull toward sigma_base is exact.
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = VolatilityState::new(10.0);
        let mode = VolatilityMode::Stochastic {
            kappa: 0.5,
            eta: 0.0,
        };
        let sigma = state.step(&mode, 2.0, 50.0, &mut rng);
        assert_relative_eq!(sigma, 6.0);
        let sigma = state.step(&mode, 2.0, 50.0, &mut rng);
        assert_relative_eq!(sigma, 4.0);
    }
}
