//! Walker athletic profile.

use super::AthleteProfile;

/// Athletic profile for walking activities.
///
/// Based on typical everyday walking:
/// - Base cadence: ~100 steps/min
/// - Wider day-to-day spread than running
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Base cadence in steps per minute.
    cadence: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            cadence: 100.0,
            variance: 0.12,
        }
    }
}

impl WalkerProfile {
    /// Creates a walker profile with the given cadence in steps per minute.
    pub fn with_cadence(cadence_spm: f64) -> Self {
        Self {
            cadence: cadence_spm,
            ..Default::default()
        }
    }

    /// Creates a brisk walker profile (~120 steps/min).
    pub fn brisk() -> Self {
        Self::with_cadence(120.0)
    }

    /// Creates a leisurely walker profile (~80 steps/min).
    pub fn leisurely() -> Self {
        Self::with_cadence(80.0)
    }
}

impl AthleteProfile for WalkerProfile {
    fn label(&self) -> &'static str {
        "Ходьба"
    }

    fn cadence_spm(&self) -> f64 {
        self.cadence
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_ordered() {
        assert!(WalkerProfile::brisk().cadence_spm() > WalkerProfile::default().cadence_spm());
        assert!(WalkerProfile::leisurely().cadence_spm() < WalkerProfile::default().cadence_spm());
    }
}
