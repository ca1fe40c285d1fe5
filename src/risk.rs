//! Collapse detection over a completed trajectory.
//!
//! Evaluated once after the full path is generated, never as an early exit:
//! the whole path is always computed and handed to the renderer even when
//! the first value already breaches the threshold.

use serde::{Deserialize, Serialize};

/// True if any mood value falls strictly below `threshold`.
pub fn breaches_threshold(trajectory: &[f64], threshold: f64) -> bool {
    trajectory.iter().any(|&mood| mood < threshold)
}

/// Two-state verdict the presentation layer maps to its canned feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskVerdict {
    Stable,
    AtRisk,
}

impl RiskVerdict {
    pub fn for_trajectory(trajectory: &[f64], threshold: f64) -> Self {
        if breaches_threshold(trajectory, threshold) {
            RiskVerdict::AtRisk
        } else {
            RiskVerdict::Stable
        }
    }

    pub fn is_at_risk(self) -> bool {
        matches!(self, RiskVerdict::AtRisk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strictly_below() {
        assert!(!breaches_threshold(&[30.0, 45.0, 100.0], 30.0));
        assert!(breaches_threshold(&[30.0, 29.999, 100.0], 30.0));
        assert!(breaches_threshold(&[0.0], 30.0));
        assert!(!breaches_threshold(&[], 30.0));
    }

    #[test]
    fn verdict_matches_predicate() {
        assert_eq!(
            RiskVerdict::for_trajectory(&[50.0, 31.0], 30.0),
            RiskVerdict::Stable
        );
        let verdict = RiskVerdict::for_trajectory(&[50.0, 12.0], 30.0);
        assert_eq!(verdict, RiskVerdict::AtRisk);
        assert!(verdict.is_at_risk());
    }
}
