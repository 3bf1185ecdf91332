use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::errors::Error;

/// Activity kinds a training record can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Walking,
    Running,
}

impl Activity {
    pub const WALKING_LABEL: &'static str = "Ходьба";
    pub const RUNNING_LABEL: &'static str = "Бег";

    /// Label used in records and reports.
    pub fn label(self) -> &'static str {
        match self {
            Activity::Walking => Self::WALKING_LABEL,
            Activity::Running => Self::RUNNING_LABEL,
        }
    }
}

impl FromStr for Activity {
    type Err = Error;

    /// Labels are matched exactly, without case folding.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            Self::WALKING_LABEL => Ok(Activity::Walking),
            Self::RUNNING_LABEL => Ok(Activity::Running),
            other => Err(Error::UnknownActivity(other.to_string())),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body measurements supplied with each calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    /// Weight in kilograms
    pub weight: f64,
    /// Height in the unit the step length coefficient expects
    pub height: f64,
}

impl Biometrics {
    pub fn new(weight: f64, height: f64) -> Self {
        Self { weight, height }
    }
}

/// A two-field daily record: `<steps>,<duration>`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub steps: u64,
    pub duration: Duration,
    /// Duration field as it appeared in the record (trimmed)
    pub duration_text: String,
}

/// A three-field training record: `<steps>,<label>,<duration>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedActivity {
    pub steps: u64,
    /// Activity label, not yet checked against the known activities
    pub label: String,
    pub duration: Duration,
    /// Duration field as it appeared in the record (trimmed)
    pub duration_text: String,
}

impl ParsedActivity {
    /// Resolve the label into a known [`Activity`].
    pub fn activity(&self) -> Result<Activity, Error> {
        self.label.parse()
    }
}

/// Derived metrics for one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityMetrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}
