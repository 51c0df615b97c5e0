use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Observation envelope has an unexpected shape")]
    Shape(#[source] serde_json::Error),

    #[error("Required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("Field '{field}' has an unusable value: {value}")]
    InvalidField { field: &'static str, value: Value },
}
