use std::fmt;

/// Construction-time failures. All of them are caller mistakes; a running
/// field never produces one.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldError {
    EmptyPalette,
    ZeroParticleCount,
    InvalidSpeed(f64),
    InvalidConfig(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::EmptyPalette => write!(f, "colour palette must not be empty"),
            FieldError::ZeroParticleCount => write!(f, "particle count must be at least 1"),
            FieldError::InvalidSpeed(speed) => {
                write!(f, "speed must be a finite non-negative number, got {}", speed)
            }
            FieldError::InvalidConfig(msg) => write!(f, "invalid field config: {}", msg),
        }
    }
}

impl std::error::Error for FieldError {}

impl From<serde_json::Error> for FieldError {
    fn from(err: serde_json::Error) -> Self {
        FieldError::InvalidConfig(err.to_string())
    }
}
