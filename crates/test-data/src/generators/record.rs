//! Activity record generation.

use rand::{Rng, seq::SliceRandom};

use crate::config::GeneratorConfig;
use crate::profiles::{AthleteProfile, WalkerProfile, sample_variance, steps_for};

/// A generated record together with the values it encodes.
#[derive(Debug, Clone)]
pub struct GeneratedRecord {
    /// Record text, ready to pass to the parser.
    pub record: String,
    pub steps: u64,
    /// Activity label, present for training records only.
    pub label: Option<String>,
    pub duration_seconds: u64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Render whole seconds as a compact duration expression, e.g. `1h5m0s` or `45m0s`.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Generates daily and training records.
pub struct RecordGenerator {
    config: GeneratorConfig,
}

impl RecordGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    fn session<R: Rng>(&self, profile: &dyn AthleteProfile, rng: &mut R) -> (u64, u64, f64, f64) {
        let (min_minutes, max_minutes) = self.config.session_minutes;
        let minutes = rng.gen_range(min_minutes..=max_minutes.max(min_minutes));
        let extra_seconds = rng.gen_range(0..60u64);
        let duration_seconds = u64::from(minutes) * 60 + extra_seconds;

        let factor = sample_variance(profile, rng);
        let steps = steps_for(profile, duration_seconds as f64 / 60.0, factor);

        let weight = rng.gen_range(self.config.weight_kg.0..=self.config.weight_kg.1);
        let height = rng.gen_range(self.config.height_cm.0..=self.config.height_cm.1);

        (steps, duration_seconds, weight, height)
    }

    /// A `<steps>,<duration>` record for a day of walking.
    pub fn day_record<R: Rng>(&self, rng: &mut R) -> GeneratedRecord {
        let (steps, duration_seconds, weight_kg, height_cm) =
            self.session(&WalkerProfile::default(), rng);

        GeneratedRecord {
            record: format!("{steps},{}", format_duration(duration_seconds)),
            steps,
            label: None,
            duration_seconds,
            weight_kg,
            height_cm,
        }
    }

    /// A `<steps>,<label>,<duration>` record for the given profile.
    pub fn training_record<R: Rng>(
        &self,
        profile: &dyn AthleteProfile,
        rng: &mut R,
    ) -> GeneratedRecord {
        let (steps, duration_seconds, weight_kg, height_cm) = self.session(profile, rng);
        let label = profile.label();

        tracing::trace!(label, steps, duration_seconds, "generated training record");

        GeneratedRecord {
            record: format!("{steps},{label},{}", format_duration(duration_seconds)),
            steps,
            label: Some(label.to_string()),
            duration_seconds,
            weight_kg,
            height_cm,
        }
    }

    /// A training record whose label is not a known activity.
    pub fn unknown_training_record<R: Rng>(&self, rng: &mut R) -> GeneratedRecord {
        let mut generated = self.training_record(&WalkerProfile::default(), rng);
        let label = self
            .config
            .unknown_labels
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| "Неизвестно".to_string());

        generated.record = format!(
            "{},{label},{}",
            generated.steps,
            format_duration(generated.duration_seconds)
        );
        generated.label = Some(label);
        generated
    }
}

impl Default for RecordGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
