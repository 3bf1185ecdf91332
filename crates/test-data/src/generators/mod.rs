//! Record generators for test data.
//!
//! - [`RecordGenerator`]: daily and training records with matching biometrics

pub mod record;

pub use record::{GeneratedRecord, RecordGenerator, format_duration};
