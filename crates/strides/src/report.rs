//! Summary values and their fixed-locale text templates.

use std::fmt;

use serde::Serialize;

use crate::models::{Activity, ActivityMetrics};

/// Result of a training record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSummary {
    pub activity: Activity,
    pub steps: u64,
    /// Duration as written in the record
    pub duration: String,
    #[serde(flatten)]
    pub metrics: ActivityMetrics,
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}.\nДлительность: {},\nДистанция составила: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2} ккал.\n",
            self.activity,
            self.duration,
            self.metrics.distance_km,
            self.metrics.mean_speed_kmh,
            self.metrics.calories,
        )
    }
}

/// Result of a daily steps record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub steps: u64,
    pub distance_km: f64,
    pub calories: f64,
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Количество шагов: {}.\nДистанция составила: {:.2} км.\nВы сожгли: {:.2} ккал.\n",
            self.steps, self.distance_km, self.calories,
        )
    }
}
