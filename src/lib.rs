#![deny(unreachable_pub)]

//! Moodrift: a jump-diffusion simulator for emotional trajectories.
//!
//! Models an individual's mood over discrete time as a mean-reverting
//! stochastic process with random shocks and optionally time-varying
//! volatility, then flags trajectories that cross a collapse threshold.
//! Self-reported personality inputs map to model coefficients through a
//! fixed formula set; a fixed seed reproduces a trajectory bit for bit.
//!
//! This is a visualization model, not a calibrated clinical one: it claims
//! no predictive validity and performs no inference against logged data
//! beyond reading the latest journal entry as an initial condition.

mod config;
mod consts;
mod errors;
mod journal;
mod params;
mod risk;
mod simulator;
mod volatility;

// ============================================================================
// Core Simulator Exports
// ============================================================================
pub use config::{DriftMode, JumpPolicy, SeedMode, SimulatorConfig, VolatilityMode};
pub use errors::Error;
pub use params::{PersonaInputs, SimulationParameters, StressLevel};
pub use risk::{breaches_threshold, RiskVerdict};
pub use simulator::{SimulationOutcome, TrajectorySimulator};
pub use volatility::VolatilityState;

// ============================================================================
// Collaborator Exports
// ============================================================================
pub use consts::{
    DEFAULT_BASELINE, DEFAULT_COLLAPSE_THRESHOLD, DEFAULT_HORIZON, DEFAULT_INITIAL_MOOD,
    DEFAULT_JUMP_STD, MOOD_MAX, MOOD_MIN, VOLATILITY_FLOOR,
};
pub use journal::{Journal, MoodEntry, TimeOfDay};
