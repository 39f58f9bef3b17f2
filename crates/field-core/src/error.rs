use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("world size must be positive, got {0}")]
    InvalidSize(u32),
    #[error("obstacle count range [{low}, {high}) is empty")]
    EmptyObstacleRange { low: u32, high: u32 },
    #[error("obstacle extent range [{min}, {max}] is invalid")]
    InvalidExtentRange { min: f64, max: f64 },
    #[error("obstacle {index} has invalid extent {extent}")]
    InvalidObstacle { index: usize, extent: f64 },
    #[error("trajectory step size must be finite and positive, got {0}")]
    InvalidStepSize(f64),
    #[error("trajectory delta_t must be finite, got {0}")]
    InvalidDeltaT(f64),
    #[error("agent half extent must be finite and non-negative, got {0}")]
    InvalidAgentHalfExtent(f64),
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = FieldError> = std::result::Result<T, E>;
