//! Distance, speed and calorie formulas, and the two report flows built on them.

use time::Duration;
use tracing::{debug, error};

use crate::{
    config::MetricsConfig,
    duration::{hours, minutes},
    errors::{Result, ValidationError},
    models::{Activity, ActivityMetrics, Biometrics},
    record_parser::{parse_day_record, parse_training_record},
    report::{DailySummary, TrainingSummary},
};

/// Evaluates the activity formulas against a fixed [`MetricsConfig`].
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: MetricsConfig,
}

impl Calculator {
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Distance in km covered by `steps`, with step length derived from height.
    ///
    /// Height is not validated here.
    pub fn distance(&self, steps: u64, height: f64) -> f64 {
        let step_length = height * self.config.step_length_coefficient;
        (step_length * steps as f64) / self.config.meters_per_km
    }

    /// Distance in km covered by `steps` at the fixed daily step length.
    pub fn day_distance(&self, steps: u64) -> f64 {
        (steps as f64 * self.config.day_step_length_m) / self.config.meters_per_km
    }

    /// Mean speed in km/h.
    ///
    /// Returns 0 for a zero or negative duration instead of dividing by zero.
    pub fn mean_speed(&self, steps: u64, height: f64, duration: Duration) -> f64 {
        if duration <= Duration::ZERO {
            return 0.0;
        }
        let duration_hours = hours(duration);
        if duration_hours == 0.0 {
            return 0.0;
        }
        self.distance(steps, height) / duration_hours
    }

    fn validate(steps: u64, body: Biometrics, duration: Duration) -> Result<(), ValidationError> {
        if steps == 0 {
            return Err(ValidationError::Steps(steps));
        }
        if body.weight.is_nan() || body.weight <= 0.0 {
            return Err(ValidationError::Weight(body.weight));
        }
        if body.height.is_nan() || body.height <= 0.0 {
            return Err(ValidationError::Height(body.height));
        }
        if duration <= Duration::ZERO {
            return Err(ValidationError::Duration(duration.to_string()));
        }
        Ok(())
    }

    /// Calories burned during an activity.
    ///
    /// `weight * mean_speed * minutes / 60`, scaled by the activity's multiplier.
    pub fn calories_burned(
        &self,
        activity: Activity,
        steps: u64,
        body: Biometrics,
        duration: Duration,
    ) -> Result<f64, ValidationError> {
        Self::validate(steps, body, duration)?;

        let speed = self.mean_speed(steps, body.height, duration);
        let calories =
            (body.weight * speed * minutes(duration)) / self.config.minutes_per_hour;
        Ok(calories * self.config.calories_multiplier(activity))
    }

    pub fn walking_calories_burned(
        &self,
        steps: u64,
        body: Biometrics,
        duration: Duration,
    ) -> Result<f64, ValidationError> {
        self.calories_burned(Activity::Walking, steps, body, duration)
    }

    pub fn running_calories_burned(
        &self,
        steps: u64,
        body: Biometrics,
        duration: Duration,
    ) -> Result<f64, ValidationError> {
        self.calories_burned(Activity::Running, steps, body, duration)
    }

    /// Distance, mean speed and calories for one activity.
    pub fn metrics(
        &self,
        activity: Activity,
        steps: u64,
        body: Biometrics,
        duration: Duration,
    ) -> Result<ActivityMetrics, ValidationError> {
        Ok(ActivityMetrics {
            distance_km: self.distance(steps, body.height),
            mean_speed_kmh: self.mean_speed(steps, body.height, duration),
            calories: self.calories_burned(activity, steps, body, duration)?,
        })
    }

    /// Parse a `<steps>,<label>,<duration>` record and compute its metrics.
    pub fn training_summary(&self, record: &str, body: Biometrics) -> Result<TrainingSummary> {
        let parsed = parse_training_record(record)?;
        let activity = parsed.activity()?;
        let metrics = self.metrics(activity, parsed.steps, body, parsed.duration)?;

        debug!(%activity, steps = parsed.steps, ?metrics, "training metrics computed");

        Ok(TrainingSummary {
            activity,
            steps: parsed.steps,
            duration: parsed.duration_text,
            metrics,
        })
    }

    /// Parse a `<steps>,<duration>` record and compute its daily totals.
    ///
    /// Distance uses the fixed daily step length; calories use the walking formula.
    pub fn daily_summary(&self, record: &str, body: Biometrics) -> Result<DailySummary> {
        let parsed = parse_day_record(record)?;
        if parsed.duration < Duration::ZERO {
            return Err(ValidationError::NegativeDuration(parsed.duration_text).into());
        }

        let distance_km = self.day_distance(parsed.steps);
        let calories = self.walking_calories_burned(parsed.steps, body, parsed.duration)?;

        debug!(steps = parsed.steps, distance_km, calories, "daily metrics computed");

        Ok(DailySummary {
            steps: parsed.steps,
            distance_km,
            calories,
        })
    }

    /// Text report for a training record. Failures are logged, then returned as is.
    pub fn training_report(&self, record: &str, weight: f64, height: f64) -> Result<String> {
        self.training_summary(record, Biometrics::new(weight, height))
            .map(|summary| summary.to_string())
            .inspect_err(|e| error!(record, "failed to build training report: {e}"))
    }

    /// Text report for a daily steps record.
    pub fn daily_steps_report(&self, record: &str, weight: f64, height: f64) -> Result<String> {
        self.daily_summary(record, Biometrics::new(weight, height))
            .map(|summary| summary.to_string())
            .inspect_err(|e| error!(record, "failed to build daily steps report: {e}"))
    }
}
