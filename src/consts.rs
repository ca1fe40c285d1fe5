//! Model-wide constants shared by the simulator and its collaborators.

/// Mean-reversion target for the mood process unless a deployment overrides it.
pub const DEFAULT_BASELINE: f64 = 60.0;

/// Mood level below which a completed trajectory is flagged as at risk.
pub const DEFAULT_COLLAPSE_THRESHOLD: f64 = 30.0;

/// Number of discrete steps simulated per run.
pub const DEFAULT_HORIZON: usize = 50;

/// Starting mood for callers with no journal history. The simulator never
/// invents this on its own; callers pass it explicitly.
pub const DEFAULT_INITIAL_MOOD: f64 = 50.0;

/// Jump magnitude dispersion used by the questionnaire mapping.
pub const DEFAULT_JUMP_STD: f64 = 5.0;

/// Hard floor for the volatility process. The diffusion term must never
/// collapse to zero or go negative.
pub const VOLATILITY_FLOOR: f64 = 0.1;

/// Lower bound of the mood scale.
pub const MOOD_MIN: f64 = 0.0;

/// Upper bound of the mood scale.
pub const MOOD_MAX: f64 = 100.0;
