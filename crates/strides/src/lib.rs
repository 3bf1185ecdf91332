//! Step and training metrics.
//!
//! Turns compact records such as `1000,30m0s` (daily steps) or
//! `3000,Ходьба,45m0s` (a training session) into distance, mean speed and
//! calories burned, and renders them as a short text report.
//!
//! ```rust,ignore
//! let report = strides::training_report("3000,Бег,45m0s", 70.0, 180.0)?;
//! print!("{report}");
//! ```

pub mod calculator;
pub mod config;
pub mod duration;
pub mod errors;
pub mod models;
pub mod record_parser;
pub mod report;

pub use calculator::Calculator;
pub use config::MetricsConfig;
pub use errors::{DurationError, Error, ParseError, Result, ValidationError};
pub use models::{Activity, ActivityMetrics, Biometrics, DayRecord, ParsedActivity};
pub use report::{DailySummary, TrainingSummary};

/// Daily steps report using the default constants.
pub fn daily_steps_report(record: &str, weight: f64, height: f64) -> Result<String> {
    Calculator::default().daily_steps_report(record, weight, height)
}

/// Training report using the default constants.
pub fn training_report(record: &str, weight: f64, height: f64) -> Result<String> {
    Calculator::default().training_report(record, weight, height)
}
