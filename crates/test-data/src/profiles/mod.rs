//! Athletic step profiles.
//!
//! Profiles define realistic cadences for different activity types.
//! They are used by the record generator to produce plausible step counts.

mod runner;
mod walker;

pub use runner::RunnerProfile;
pub use walker::WalkerProfile;

/// Trait for athletic step profiles.
///
/// Implementations should provide:
/// - The activity label written into training records
/// - Base cadence in steps per minute
/// - Day-to-day variance
pub trait AthleteProfile: Send + Sync {
    /// Activity label as it appears in a training record.
    fn label(&self) -> &'static str;

    /// Base cadence in steps per minute.
    fn cadence_spm(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    match Normal::new(1.0, profile.variance()) {
        Ok(normal) if profile.variance() > 0.0 => normal.sample(rng).clamp(0.7, 1.4),
        _ => 1.0,
    }
}

/// Steps taken over `minutes` at the profile's cadence, scaled by `variance_factor`.
pub fn steps_for(profile: &dyn AthleteProfile, minutes: f64, variance_factor: f64) -> u64 {
    (profile.cadence_spm() * minutes * variance_factor).round().max(1.0) as u64
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_variance_is_clamped() {
        let profile = RunnerProfile::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let factor = sample_variance(&profile, &mut rng);
            assert!((0.7..=1.4).contains(&factor));
        }
    }

    #[test]
    fn test_steps_for_never_zero() {
        let profile = WalkerProfile::default();
        assert_eq!(steps_for(&profile, 0.0, 1.0), 1);
        assert_eq!(steps_for(&profile, 10.0, 1.0), 1000);
    }
}
