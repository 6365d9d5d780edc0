use thiserror::Error;

use crate::timestamp;

#[derive(Debug, Error)]
pub enum TempoError {
    #[error("Timestamp format error: {0}")]
    Format(String),

    #[error("Structural error: {0}")]
    Structural(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TempoError {
    pub fn is_format(&self) -> bool {
        matches!(self, TempoError::Format(_))
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, TempoError::Structural(_))
    }
}

/// serde_json renders type and value errors as
/// `<unexpected>, expected <visitor expectation>[ at line L column C]`.
/// Document text only appears in `<unexpected>`, so the tail identifies
/// the visitor that failed.
fn failed_on_timestamp(err: &serde_json::Error, message: &str) -> bool {
    if !err.is_data() {
        return false;
    }

    let position = format!(" at line {} column {}", err.line(), err.column());
    let message = message.strip_suffix(position.as_str()).unwrap_or(message);
    message.ends_with(&format!(", expected {}", timestamp::EXPECTING))
}

impl From<serde_json::Error> for TempoError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        if failed_on_timestamp(&err, &message) {
            TempoError::Format(message)
        } else {
            TempoError::Structural(message)
        }
    }
}

impl From<std::io::Error> for TempoError {
    fn from(err: std::io::Error) -> Self {
        TempoError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TempoError>;
