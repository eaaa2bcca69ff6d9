use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrunchError {
    #[error("Invalid number '{input}': {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Verification failed: got {got}, want {want}")]
    VerificationFailed { got: f64, want: f64 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CrunchError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CrunchError::InvalidNumber { input, .. } => {
                format!("'{}' is not a number", input)
            }
            CrunchError::InvalidValue { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
            CrunchError::VerificationFailed { got, want } => {
                format!("Result {} was not accepted for expected value {}", got, want)
            }
            CrunchError::SerializationError(_) => "Could not format the result".to_string(),
            CrunchError::IoError(e) => format!("Could not write output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, CrunchError>;
