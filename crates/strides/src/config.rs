//! Physiological and unit constants used by the calculator.

use serde::{Deserialize, Serialize};

use crate::models::Activity;

/// Immutable constants the formulas are evaluated with.
///
/// Build one in code, or deserialize it; missing fields fall back to the
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Fraction of height taken as the length of one step.
    pub step_length_coefficient: f64,

    /// Fixed step length in meters, used for daily step totals.
    pub day_step_length_m: f64,

    pub meters_per_km: f64,

    pub minutes_per_hour: f64,

    /// Calorie multiplier for walking.
    pub walking_calories_multiplier: f64,

    /// Calorie multiplier for running.
    ///
    /// Defaults to 1.0, so running and walking calories currently come out
    /// identical.
    pub running_calories_multiplier: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            step_length_coefficient: 0.45,
            day_step_length_m: 0.65,
            meters_per_km: 1000.0,
            minutes_per_hour: 60.0,
            walking_calories_multiplier: 1.0,
            running_calories_multiplier: 1.0,
        }
    }
}

impl MetricsConfig {
    pub fn calories_multiplier(&self, activity: Activity) -> f64 {
        match activity {
            Activity::Walking => self.walking_calories_multiplier,
            Activity::Running => self.running_calories_multiplier,
        }
    }
}
