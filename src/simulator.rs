//! Mood trajectory simulator.
//!
//! Discrete-time jump diffusion on the 0-100 mood scale:
//!
//! ```text
//! M_next = clamp(M_prev + drift + sigma_t * W + J, 0, 100)
//! ```
//!
//! where `drift` follows the configured [`DriftMode`], `sigma_t` the
//! configured [`VolatilityMode`], and `J` the configured [`JumpPolicy`].
//! One run is a bounded synchronous loop with no I/O and no state shared
//! with other runs: the RNG and the volatility state are built fresh inside
//! [`TrajectorySimulator::run`].
//!
//! # Draw order
//!
//! The per-step order of random draws is frozen so a fixed seed reproduces a
//! trajectory bit for bit: volatility shock Z, then diffusion W, then the
//! jump count, then the jump magnitudes. A jump rate of zero consumes no
//! randomness at all, which keeps a zero-rate run identical to a pure
//! drift+diffusion process on the same seed.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Poisson};
use serde::Serialize;

use crate::config::{DriftMode, JumpPolicy, SeedMode, SimulatorConfig, VolatilityMode};
use crate::consts::{MOOD_MAX, MOOD_MIN};
use crate::errors::Error;
use crate::params::SimulationParameters;
use crate::risk::breaches_threshold;
use crate::volatility::VolatilityState;

/// Unit time step of the discrete scheme.
const DT: f64 = 1.0;

/// Everything one run produces, handed to charting and feedback selection.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    /// `horizon + 1` mood values including the initial one, each in [0, 100].
    pub trajectory: Vec<f64>,
    /// Parallel `horizon + 1` volatility values, recorded only in stochastic
    /// volatility mode.
    pub volatility: Option<Vec<f64>>,
    /// True if any trajectory value falls strictly below the threshold.
    pub collapsed: bool,
    /// Threshold the collapse flag was evaluated against.
    pub collapse_threshold: f64,
}

/// One validated parameter/configuration bundle, reusable across runs.
///
/// The simulator itself is stateless between invocations; every call to
/// [`run`](Self::run) draws from its own stream and owns its own volatility
/// state, so repeated runs with a fixed seed are identical and runs with
/// entropy seeding are independent.
#[derive(Debug, Clone)]
pub struct TrajectorySimulator {
    params: SimulationParameters,
    config: SimulatorConfig,
}

impl TrajectorySimulator {
    /// Validates both bundles up front and rejects degenerate ones; nothing
    /// is repaired silently.
    pub fn new(params: SimulationParameters, config: SimulatorConfig) -> Result<Self, Error> {
        params.validate()?;
        config.validate()?;
        Ok(Self { params, config })
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Simulate one trajectory from `initial_mood`.
    pub fn run(&self, initial_mood: f64) -> Result<SimulationOutcome, Error> {
        if !initial_mood.is_finite() || !(MOOD_MIN..=MOOD_MAX).contains(&initial_mood) {
            return Err(Error::InvalidParameter {
                name: "initial_mood",
                value: initial_mood,
                reason: "must lie in [0, 100]",
            });
        }

        let p = &self.params;
        let cfg = &self.config;

        let mut rng = match cfg.seed {
            SeedMode::Fixed(seed) => StdRng::seed_from_u64(seed),
            SeedMode::Entropy => StdRng::from_entropy(),
        };

        let standard = Normal::new(0.0, 1.0).unwrap();
        // Parameters were validated in new(); jump_std > 0 always holds.
        let shock = Normal::new(p.jump_mean, p.jump_std).unwrap();
        // Poisson rejects a zero rate, and a zero rate must not consume
        // randomness anyway, so the sampler only exists when it can fire.
        let arrivals = (cfg.jump == JumpPolicy::CompoundPoisson && p.jump_rate > 0.0)
            .then(|| Poisson::new(p.jump_rate).unwrap());

        let mut vol = VolatilityState::new(p.sigma_base);
        let record_vol = matches!(cfg.volatility, VolatilityMode::Stochastic { .. });

        let mut trajectory = Vec::with_capacity(cfg.horizon + 1);
        trajectory.push(initial_mood);
        let mut vol_path = record_vol.then(|| {
            let mut path = Vec::with_capacity(cfg.horizon + 1);
            path.push(vol.current());
            path
        });

        let mut mood = initial_mood;
        for _ in 0..cfg.horizon {
            let drift = match cfg.drift {
                DriftMode::MeanReverting => p.mu * (p.baseline - mood),
                DriftMode::Constant => p.mu * DT,
            };

            let sigma_t = vol.step(&cfg.volatility, p.sigma_base, mood, &mut rng);
            let diffusion = sigma_t * standard.sample(&mut rng);

            let jump: f64 = match cfg.jump {
                JumpPolicy::CompoundPoisson => match &arrivals {
                    Some(poisson) => {
                        let count = poisson.sample(&mut rng) as u64;
                        (0..count).map(|_| shock.sample(&mut rng)).sum()
                    }
                    None => 0.0,
                },
                JumpPolicy::SingleGated => {
                    if p.jump_rate > 0.0 && rng.gen::<f64>() < p.jump_rate {
                        shock.sample(&mut rng)
                    } else {
                        0.0
                    }
                }
            };

            mood = (mood + drift + diffusion + jump).clamp(MOOD_MIN, MOOD_MAX);
            trajectory.push(mood);
            if let Some(path) = vol_path.as_mut() {
                path.push(sigma_t);
            }
        }

        let collapsed = breaches_threshold(&trajectory, cfg.collapse_threshold);
        debug!(
            "simulated {} steps: final mood {:.2}, collapsed={}",
            cfg.horizon, mood, collapsed
        );

        Ok(SimulationOutcome {
            trajectory,
            volatility: vol_path,
            collapsed,
            collapse_threshold: cfg.collapse_threshold,
        })
    }
}
