//! Synthetic sensor packages for training.
//!
//! This crate generates plausible running, sports walking and swimming packages from athlete
//! profiles, for exercising the calculator beyond the bundled samples.
//!
//! # Quick Start
//!
//! ```rust
//! use test_data::prelude::*;
//!
//! let generator = PackageGenerator::new(GenerationConfig {
//!     count: 5,
//!     seed: Some(12345),
//!     mix: WorkoutMix::uniform(),
//! })?;
//!
//! for package in generator.generate() {
//!     let workout = training::read_sensor_package(&package)?;
//!     println!("{}", workout.as_training().show_training_info()?);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

pub use training::{SensorPackage, WorkoutType};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{GenerationConfig, WorkoutMix};
    pub use crate::generators::{GenerationError, PackageGenerator, generate_package};
    pub use crate::profiles::{
        RunnerProfile, SensorProfile, SwimmerProfile, WalkerProfile, sample_variance,
        sample_weight,
    };
    pub use crate::{SensorPackage, WorkoutType};
}
