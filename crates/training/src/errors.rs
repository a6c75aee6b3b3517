use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainingError {
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("{workout_type} expects {expected} arguments, got {actual}")]
    InvalidArgumentArity {
        workout_type: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidArgumentValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrainingError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        TrainingError::InvalidArgumentValue {
            field,
            value,
            reason,
        }
    }
}
