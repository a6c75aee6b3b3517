//! Workout calculations.
//!
//! Every workout shares the distance and speed formulas of [`Training`] and supplies its own
//! calorie formula. Swimming also replaces the speed formula, since its speed comes from pool
//! laps rather than strokes.

use serde::Serialize;

use crate::{
    errors::TrainingError,
    models::{InfoMessage, Session, WorkoutType, ensure_positive},
};

pub const M_IN_KM: f64 = 1000.0;
/// Minutes per hour.
pub const M_IN_H: f64 = 60.0;
pub const LEN_STEP: f64 = 0.65;

pub trait Training {
    fn session(&self) -> &Session;

    /// Name printed in the report.
    fn training_type(&self) -> &'static str;

    fn step_length_m(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers.
    fn get_distance(&self) -> f64 {
        f64::from(self.session().action) * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.session().duration_hours
    }

    fn get_spent_calories(&self) -> Result<f64, TrainingError> {
        Err(TrainingError::UnsupportedOperation("spent calories"))
    }

    fn show_training_info(&self) -> Result<InfoMessage, TrainingError> {
        Ok(InfoMessage {
            training_type: self.training_type().to_string(),
            duration: self.session().duration_hours,
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Running {
    pub session: Session,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            session: Session::new(action, duration_hours, weight_kg)?,
        })
    }
}

impl Training for Running {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        WorkoutType::Running.name()
    }

    fn get_spent_calories(&self) -> Result<f64, TrainingError> {
        let s = &self.session;
        Ok((Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.get_mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * s.weight_kg
            / M_IN_KM
            * s.duration_hours
            * M_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SportsWalking {
    pub session: Session,
    pub height_cm: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, TrainingError> {
        let session = Session::new(action, duration_hours, weight_kg)?;
        let height_cm = ensure_positive("height_cm", height_cm)?;
        Ok(Self { session, height_cm })
    }
}

impl Training for SportsWalking {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        WorkoutType::SportsWalking.name()
    }

    fn get_spent_calories(&self) -> Result<f64, TrainingError> {
        let s = &self.session;
        // The speed/height ratio only counts in whole units.
        let speed_height_ratio = floor_div(self.get_mean_speed().powi(2), self.height_cm);
        Ok((Self::CALORIES_WEIGHT_MULTIPLIER * s.weight_kg
            + speed_height_ratio * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * s.weight_kg)
            * s.duration_hours
            * M_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swimming {
    pub session: Session,
    pub pool_length_m: u32,
    pub pool_length_count: u32,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: u32,
        pool_length_count: u32,
    ) -> Result<Self, TrainingError> {
        Ok(Self {
            session: Session::new(action, duration_hours, weight_kg)?,
            pool_length_m,
            pool_length_count,
        })
    }
}

impl Training for Swimming {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        WorkoutType::Swimming.name()
    }

    fn step_length_m(&self) -> f64 {
        WorkoutType::Swimming.step_length_m()
    }

    fn get_mean_speed(&self) -> f64 {
        f64::from(self.pool_length_m) * f64::from(self.pool_length_count)
            / M_IN_KM
            / self.session.duration_hours
    }

    fn get_spent_calories(&self) -> Result<f64, TrainingError> {
        Ok((self.get_mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight_kg)
    }
}

/// Floor of the exact quotient `a / b`.
///
/// Dividing first and flooring the rounded quotient overshoots when the quotient rounds up to
/// an integer (`1.0 / 0.1` rounds to `10.0`, the exact quotient is just below it).
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        div -= 1.0;
    }
    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}

/// A workout built from a sensor package.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Workout::Running(_) => WorkoutType::Running,
            Workout::SportsWalking(_) => WorkoutType::SportsWalking,
            Workout::Swimming(_) => WorkoutType::Swimming,
        }
    }

    pub fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}
