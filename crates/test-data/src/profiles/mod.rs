//! Athlete profiles.
//!
//! Profiles describe how a typical athlete performs a given workout. The package generator uses
//! them to turn a sampled session length and pace into sensor readings that the factory accepts.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};
use training::WorkoutType;

/// Trait for athlete profiles.
///
/// Implementations should provide:
/// - The workout they describe
/// - Mean speed and day-to-day variance
/// - The readings that follow action, duration and weight in a package
pub trait SensorProfile: Send + Sync {
    fn workout_type(&self) -> WorkoutType;

    /// Typical speed over ground in km/h.
    fn base_speed_kmh(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    fn variance(&self) -> f64;

    /// Shortest and longest session in hours.
    fn duration_range(&self) -> (f64, f64) {
        (0.5, 1.5)
    }

    /// Workout-specific readings for a session covering `distance_km`.
    fn extra_readings(&self, distance_km: f64, rng: &mut dyn RngCore) -> Vec<f64>;
}

/// Samples a variance factor around 1.0.
pub fn sample_variance(profile: &dyn SensorProfile, rng: &mut impl Rng) -> f64 {
    let std_dev = profile.variance();
    match Normal::new(1.0, std_dev) {
        Ok(normal) if std_dev > 0.0 => normal.sample(rng).clamp(0.7, 1.4),
        _ => 1.0,
    }
}

/// Samples a body weight in kg, rounded to 100 g.
pub fn sample_weight(rng: &mut impl Rng) -> f64 {
    let weight = Normal::<f64>::new(72.0, 12.0).map_or(72.0, |normal| normal.sample(rng));
    round_to(weight.clamp(45.0, 120.0), 1)
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_sample_weight_in_range() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..200 {
            let weight = sample_weight(&mut rng);
            assert!((45.0..=120.0).contains(&weight));
            assert!((weight * 10.0 - (weight * 10.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sample_variance_without_spread() {
        let mut rng = StdRng::seed_from_u64(17);
        let profile = RunnerProfile::default();

        let factor = sample_variance(&profile, &mut rng);
        assert!((0.7..=1.4).contains(&factor));
    }
}
