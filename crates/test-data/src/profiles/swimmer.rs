//! Swimmer athlete profile.

use rand::{Rng, RngCore};
use training::WorkoutType;

use super::SensorProfile;

/// Athlete profile for pool swimming.
///
/// A fitness swimmer covers ~2 km/h. Speed is measured by pool lengths, so the readings carry
/// the pool length and how many lengths were swum.
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    base_speed: f64,
    variance: f64,
    /// Pool lengths in meters to pick from.
    pool_lengths: Vec<u32>,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            base_speed: 2.0,
            variance: 0.1,
            pool_lengths: vec![25, 50],
        }
    }
}

impl SwimmerProfile {
    /// Creates a profile that always swims in a pool of the given length.
    pub fn in_pool(pool_length_m: u32) -> Self {
        Self {
            pool_lengths: vec![pool_length_m.max(1)],
            ..Default::default()
        }
    }
}

impl SensorProfile for SwimmerProfile {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn duration_range(&self) -> (f64, f64) {
        (0.25, 1.25)
    }

    fn extra_readings(&self, distance_km: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        let pool_length = if self.pool_lengths.is_empty() {
            25
        } else {
            self.pool_lengths[rng.gen_range(0..self.pool_lengths.len())]
        };
        let lengths = (distance_km * 1000.0 / f64::from(pool_length)).round().max(1.0);
        vec![f64::from(pool_length), lengths]
    }
}
