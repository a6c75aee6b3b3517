//! Builds workouts from raw sensor packages.

use tracing::debug;

use crate::{
    errors::TrainingError,
    models::{SensorPackage, WorkoutType},
    workouts::{Running, SportsWalking, Swimming, Workout},
};

/// Sensor package codes and the workouts they describe.
pub const WORKOUT_CODES: [(&str, WorkoutType); 3] = [
    ("SWM", WorkoutType::Swimming),
    ("RUN", WorkoutType::Running),
    ("WLK", WorkoutType::SportsWalking),
];

/// Builds a workout from a package code and its positional values.
///
/// The values follow the constructor order of the matching workout:
/// - `RUN`: action, duration (h), weight (kg)
/// - `WLK`: action, duration (h), weight (kg), height (cm)
/// - `SWM`: action, duration (h), weight (kg), pool length (m), pool length count
///
/// Unknown codes are rejected before the values are looked at.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, TrainingError> {
    let workout_type: WorkoutType = workout_type.parse()?;

    let expected = workout_type.arity();
    if data.len() != expected {
        return Err(TrainingError::InvalidArgumentArity {
            workout_type: workout_type.code(),
            expected,
            actual: data.len(),
        });
    }

    let action = whole_number("action", data[0])?;
    let (duration_hours, weight_kg) = (data[1], data[2]);

    let workout = match workout_type {
        WorkoutType::Running => Workout::Running(Running::new(action, duration_hours, weight_kg)?),
        WorkoutType::SportsWalking => Workout::SportsWalking(SportsWalking::new(
            action,
            duration_hours,
            weight_kg,
            data[3],
        )?),
        WorkoutType::Swimming => Workout::Swimming(Swimming::new(
            action,
            duration_hours,
            weight_kg,
            whole_number("pool_length_m", data[3])?,
            whole_number("pool_length_count", data[4])?,
        )?),
    };

    debug!(
        workout_type = workout_type.code(),
        action, duration_hours, weight_kg, "Built workout from sensor package"
    );

    Ok(workout)
}

pub fn read_sensor_package(package: &SensorPackage) -> Result<Workout, TrainingError> {
    read_package(&package.workout_type, &package.data)
}

/// Counts (steps, strokes, pool lengths) must be non-negative integers.
fn whole_number(field: &'static str, value: f64) -> Result<u32, TrainingError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(TrainingError::invalid(field, value, "must be a whole number"));
    }
    if value < 0.0 {
        return Err(TrainingError::invalid(field, value, "must not be negative"));
    }
    if value > f64::from(u32::MAX) {
        return Err(TrainingError::invalid(field, value, "is too large"));
    }
    Ok(value as u32)
}
