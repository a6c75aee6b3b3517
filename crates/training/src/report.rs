//! Report rendering and the batch pipeline.

use std::io::Write;

use tracing::{info, warn};

use crate::{
    errors::TrainingError, factory::read_sensor_package, models::SensorPackage,
    workouts::Training,
};

/// Writes the one-line summary of a workout to `out`.
///
/// Nothing is written if any of the figures cannot be computed.
pub fn write_report(training: &dyn Training, out: &mut impl Write) -> Result<(), TrainingError> {
    let info = training.show_training_info()?;
    writeln!(out, "{}", info.get_message())?;
    Ok(())
}

/// Builds and reports each package in order, stopping at the first failure.
pub fn process_packages(
    packages: &[SensorPackage],
    out: &mut impl Write,
) -> Result<usize, TrainingError> {
    for (index, package) in packages.iter().enumerate() {
        let workout = read_sensor_package(package).inspect_err(|e| {
            warn!(index, workout_type = %package.workout_type, "Rejected sensor package: {e}");
        })?;
        write_report(workout.as_training(), out)?;
    }

    info!(count = packages.len(), "Processed sensor packages");
    Ok(packages.len())
}
