//! Summary statistics for running, sports walking and swimming sessions.
//!
//! A sensor package (a workout code plus positional readings) is turned into a [`Workout`]
//! by [`read_package`], and every workout reports its distance, mean speed and spent calories
//! through the [`Training`] trait.
//!
//! ```rust
//! use training::{read_package, write_report};
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let mut out = Vec::new();
//! write_report(workout.as_training(), &mut out)?;
//! assert!(String::from_utf8_lossy(&out).starts_with("Тип тренировки: Running;"));
//! # Ok::<(), training::TrainingError>(())
//! ```

pub mod errors;
pub mod factory;
pub mod models;
pub mod report;
pub mod samples;
pub mod workouts;

pub use errors::TrainingError;
pub use factory::{WORKOUT_CODES, read_package, read_sensor_package};
pub use models::{InfoMessage, SensorPackage, Session, WorkoutType};
pub use report::{process_packages, write_report};
pub use samples::{SAMPLE_PACKAGES, sample_packages};
pub use workouts::{Running, SportsWalking, Swimming, Training, Workout};
