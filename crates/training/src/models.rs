use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{errors::TrainingError, factory::WORKOUT_CODES};

/// Raw sensor inputs shared by every workout type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Session {
    /// Steps or strokes.
    pub action: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Session {
    /// Validates that duration and weight are finite and strictly positive.
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Result<Self, TrainingError> {
        ensure_positive("duration_hours", duration_hours)?;
        ensure_positive("weight_kg", weight_kg)?;
        Ok(Self {
            action,
            duration_hours,
            weight_kg,
        })
    }
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, TrainingError> {
    if !value.is_finite() {
        return Err(TrainingError::invalid(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(TrainingError::invalid(field, value, "must be greater than zero"));
    }
    Ok(value)
}

/// The closed set of supported workouts.
///
/// Serialized as its sensor package code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum WorkoutType {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::SportsWalking,
    ];

    /// Sensor package code, as listed in [`WORKOUT_CODES`].
    pub fn code(self) -> &'static str {
        WORKOUT_CODES
            .iter()
            .find(|(_, workout_type)| *workout_type == self)
            .map_or("", |(code, _)| *code)
    }

    /// Name shown in the report line.
    pub fn name(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional values a sensor package carries for this workout.
    pub fn arity(self) -> usize {
        match self {
            WorkoutType::Swimming => 5,
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
        }
    }

    /// Meters covered per action unit.
    pub fn step_length_m(self) -> f64 {
        match self {
            WorkoutType::Swimming => 1.38,
            WorkoutType::Running | WorkoutType::SportsWalking => 0.65,
        }
    }
}

impl FromStr for WorkoutType {
    type Err = TrainingError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WORKOUT_CODES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, workout_type)| *workout_type)
            .ok_or_else(|| TrainingError::UnknownWorkoutType(code.to_string()))
    }
}

impl TryFrom<String> for WorkoutType {
    type Error = TrainingError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<WorkoutType> for &'static str {
    fn from(workout_type: WorkoutType) -> Self {
        workout_type.code()
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Summary of a finished workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// Kilometers per hour.
    pub speed: f64,
    /// Kilocalories.
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

/// One reading from the sensor block: a workout code plus positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}
