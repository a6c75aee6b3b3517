//! Sensor package generators.
//!
//! - [`PackageGenerator`]: Generate batches of packages from athlete profiles

pub mod package;

pub use package::{GenerationError, PackageGenerator, generate_package};
