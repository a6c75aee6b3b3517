//! Runner athlete profile.

use rand::RngCore;
use training::WorkoutType;

use super::SensorProfile;

/// Athlete profile for running.
///
/// Based on a recreational runner: ~10 km/h (6:00/km) on an easy run.
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    base_speed: f64,
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            base_speed: 10.0,
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a runner profile with the given pace.
    ///
    /// # Arguments
    /// * `pace_min_per_km` - Pace in minutes per kilometer (e.g., 5.0 for 5:00/km)
    pub fn with_pace(pace_min_per_km: f64) -> Self {
        Self {
            base_speed: 60.0 / pace_min_per_km,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~3:30/km).
    pub fn elite() -> Self {
        Self::with_pace(3.5)
    }
}

impl SensorProfile for RunnerProfile {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_readings(&self, _distance_km: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        Vec::new()
    }
}
