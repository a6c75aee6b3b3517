//! Configuration types for package generation.

use serde::{Deserialize, Serialize};

/// Relative frequency of each workout in a generated batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkoutMix {
    pub running: u32,
    pub walking: u32,
    pub swimming: u32,
}

impl Default for WorkoutMix {
    fn default() -> Self {
        Self {
            running: 3,
            walking: 2,
            swimming: 1,
        }
    }
}

impl WorkoutMix {
    /// Every workout equally likely.
    pub fn uniform() -> Self {
        Self {
            running: 1,
            walking: 1,
            swimming: 1,
        }
    }

    /// Running packages only.
    pub fn running_only() -> Self {
        Self {
            running: 1,
            walking: 0,
            swimming: 0,
        }
    }
}

/// Configuration for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of packages to generate.
    pub count: usize,

    /// Seed for reproducible output. Entropy-seeded when `None`.
    pub seed: Option<u64>,

    pub mix: WorkoutMix,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: 10,
            seed: None,
            mix: WorkoutMix::default(),
        }
    }
}
