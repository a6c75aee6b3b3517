//! Fixed sensor readings shipped with the `training` binary.

use crate::models::SensorPackage;

pub const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

pub fn sample_packages() -> Vec<SensorPackage> {
    SAMPLE_PACKAGES
        .iter()
        .map(|(code, data)| SensorPackage::new(*code, data.to_vec()))
        .collect()
}
