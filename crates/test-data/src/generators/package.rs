//! Sensor package generation from athlete profiles.

use rand::{
    Rng, SeedableRng,
    distributions::{Distribution, WeightedError, WeightedIndex},
    rngs::StdRng,
};
use thiserror::Error;
use tracing::{debug, info};
use training::SensorPackage;

use crate::{
    config::GenerationConfig,
    profiles::{
        RunnerProfile, SensorProfile, SwimmerProfile, WalkerProfile, round_to, sample_variance,
        sample_weight,
    },
};

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid workout mix: {0}")]
    InvalidMix(#[from] WeightedError),
}

/// Generates one package for the profile's workout.
///
/// Duration is drawn from the profile's range, pace from its base speed and variance, and the
/// action count is back-computed from the distance covered.
pub fn generate_package(profile: &dyn SensorProfile, rng: &mut impl Rng) -> SensorPackage {
    let workout_type = profile.workout_type();

    let (min_hours, max_hours) = profile.duration_range();
    let duration_hours = round_to(rng.gen_range(min_hours..=max_hours), 2);
    let speed_kmh = profile.base_speed_kmh() * sample_variance(profile, rng);
    let distance_km = speed_kmh * duration_hours;
    let action = (distance_km * 1000.0 / workout_type.step_length_m()).round();
    let weight_kg = sample_weight(rng);

    let mut data = vec![action, duration_hours, weight_kg];
    data.extend(profile.extra_readings(distance_km, rng));

    SensorPackage::new(workout_type.code(), data)
}

/// Generates batches of packages with a weighted mix of workouts.
pub struct PackageGenerator {
    config: GenerationConfig,
    profiles: Vec<Box<dyn SensorProfile>>,
    weights: WeightedIndex<u32>,
}

impl PackageGenerator {
    /// Creates a generator with default profiles for every workout.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let profiles: Vec<Box<dyn SensorProfile>> = vec![
            Box::new(RunnerProfile::default()),
            Box::new(WalkerProfile::default()),
            Box::new(SwimmerProfile::default()),
        ];
        let mix = config.mix;
        let weights = WeightedIndex::new([mix.running, mix.walking, mix.swimming])?;

        Ok(Self {
            config,
            profiles,
            weights,
        })
    }

    /// Replaces the profile used for its workout type.
    pub fn with_profile(mut self, profile: Box<dyn SensorProfile>) -> Self {
        if let Some(slot) = self
            .profiles
            .iter_mut()
            .find(|p| p.workout_type() == profile.workout_type())
        {
            *slot = profile;
        }
        self
    }

    /// Generates `config.count` packages using the configured seed.
    pub fn generate(&self) -> Vec<SensorPackage> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_batch(self.config.count, &mut rng)
    }

    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<SensorPackage> {
        let packages: Vec<SensorPackage> = (0..count)
            .map(|_| {
                let profile = &self.profiles[self.weights.sample(rng)];
                let package = generate_package(profile.as_ref(), rng);
                debug!(workout_type = %package.workout_type, data = ?package.data, "Generated package");
                package
            })
            .collect();

        info!(count = packages.len(), "Generated sensor packages");
        packages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkoutMix;
    use training::read_sensor_package;

    fn config(count: usize, seed: u64, mix: WorkoutMix) -> GenerationConfig {
        GenerationConfig {
            count,
            seed: Some(seed),
            mix,
        }
    }

    #[test]
    fn test_generate_package_arity() {
        let mut rng = StdRng::seed_from_u64(3);

        let running = generate_package(&RunnerProfile::default(), &mut rng);
        let walking = generate_package(&WalkerProfile::default(), &mut rng);
        let swimming = generate_package(&SwimmerProfile::default(), &mut rng);

        assert_eq!((running.workout_type.as_str(), running.data.len()), ("RUN", 3));
        assert_eq!((walking.workout_type.as_str(), walking.data.len()), ("WLK", 4));
        assert_eq!((swimming.workout_type.as_str(), swimming.data.len()), ("SWM", 5));
    }

    #[test]
    fn test_generated_packages_are_accepted() {
        let generator = PackageGenerator::new(config(200, 42, WorkoutMix::uniform())).unwrap();

        for package in generator.generate() {
            let workout = read_sensor_package(&package).unwrap();
            assert!(workout.as_training().show_training_info().is_ok());
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = PackageGenerator::new(config(20, 12345, WorkoutMix::default())).unwrap();
        let b = PackageGenerator::new(config(20, 12345, WorkoutMix::default())).unwrap();

        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_mix_weights_respected() {
        let generator = PackageGenerator::new(config(50, 9, WorkoutMix::running_only())).unwrap();

        assert!(generator.generate().iter().all(|p| p.workout_type == "RUN"));
    }

    #[test]
    fn test_empty_mix_rejected() {
        let mix = WorkoutMix {
            running: 0,
            walking: 0,
            swimming: 0,
        };

        assert!(matches!(
            PackageGenerator::new(config(1, 1, mix)),
            Err(GenerationError::InvalidMix(_))
        ));
    }

    #[test]
    fn test_with_profile_replaces_pool() {
        let generator = PackageGenerator::new(config(30, 5, WorkoutMix::uniform()))
            .unwrap()
            .with_profile(Box::new(SwimmerProfile::in_pool(50)));

        for package in generator.generate() {
            if package.workout_type == "SWM" {
                assert!((package.data[3] - 50.0).abs() < f64::EPSILON);
            }
        }
    }
}
