//! Runner athletic profile.

use super::AthleteProfile;

/// Athletic profile for running activities.
///
/// Based on typical recreational to competitive runner performance:
/// - Base cadence: ~165 steps/min
/// - Elite runners sit around 180 steps/min
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Base cadence in steps per minute.
    cadence: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            cadence: 165.0,
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a runner profile with the given cadence in steps per minute.
    pub fn with_cadence(cadence_spm: f64) -> Self {
        Self {
            cadence: cadence_spm,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~180 steps/min).
    pub fn elite() -> Self {
        Self::with_cadence(180.0)
    }

    /// Creates a recreational runner profile (~155 steps/min).
    pub fn recreational() -> Self {
        Self::with_cadence(155.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn label(&self) -> &'static str {
        "Бег"
    }

    fn cadence_spm(&self) -> f64 {
        self.cadence
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
