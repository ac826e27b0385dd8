use std::fmt;

/// Conversion failures at the host boundary.
///
/// Logging itself never fails; these only describe input that could not be
/// turned into options, data or styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugError {
    InvalidOptions(String),
    SerializationError(String),
}

impl fmt::Display for DebugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugError::InvalidOptions(msg) => write!(f, "Invalid options: {msg}"),
            DebugError::SerializationError(msg) => write!(f, "Serialization Error: {msg}"),
        }
    }
}

impl std::error::Error for DebugError {}

impl DebugError {
    pub fn invalid_options(message: impl Into<String>) -> Self {
        DebugError::InvalidOptions(message.into())
    }

    pub fn serialization_error(message: impl Into<String>) -> Self {
        DebugError::SerializationError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            DebugError::invalid_options("expected an object").to_string(),
            "Invalid options: expected an object"
        );
        assert_eq!(
            DebugError::serialization_error("bad map").to_string(),
            "Serialization Error: bad map"
        );
    }
}
