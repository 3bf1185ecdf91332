//! Test data generation for strides.
//!
//! This crate provides tools for generating realistic daily and training
//! records, paired with plausible body measurements, to drive property-style
//! checks of the metrics library.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::{SeedableRng, rngs::StdRng};
//! use test_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//! let generator = RecordGenerator::new(GeneratorConfig::default());
//! let generated = generator.training_record(&RunnerProfile::elite(), &mut rng);
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::GeneratorConfig;
    pub use crate::generators::{GeneratedRecord, RecordGenerator, format_duration};
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, WalkerProfile, sample_variance, steps_for,
    };
}
