//! Sports walker athlete profile.

use rand::RngCore;
use rand_distr::{Distribution, Normal};
use training::WorkoutType;

use super::{SensorProfile, round_to};

/// Athlete profile for sports walking.
///
/// Race walkers hold ~6-8 km/h; height drives the calorie formula so it is sampled per session.
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    base_speed: f64,
    variance: f64,
    /// Mean height in cm.
    height_mean: f64,
    height_std: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            base_speed: 6.0,
            variance: 0.1,
            height_mean: 172.0,
            height_std: 9.0,
        }
    }
}

impl WalkerProfile {
    /// Creates a walker profile with the given speed in km/h.
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            base_speed: speed_kmh,
            ..Default::default()
        }
    }

    /// Creates a leisurely walker profile (~4.5 km/h).
    pub fn leisurely() -> Self {
        Self::with_speed(4.5)
    }
}

impl SensorProfile for WalkerProfile {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn duration_range(&self) -> (f64, f64) {
        (0.5, 2.0)
    }

    fn extra_readings(&self, _distance_km: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        let height = Normal::new(self.height_mean, self.height_std)
            .map_or(self.height_mean, |normal| normal.sample(rng));
        vec![round_to(height.clamp(140.0, 210.0), 0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_height_in_range() {
        let profile = WalkerProfile::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let readings = profile.extra_readings(5.0, &mut rng);
            assert_eq!(readings.len(), 1);
            assert!((140.0..=210.0).contains(&readings[0]));
            assert_eq!(readings[0].fract(), 0.0);
        }
    }
}
