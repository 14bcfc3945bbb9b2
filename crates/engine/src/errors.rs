use thiserror::Error;

/// Engine-level error type.
///
/// The three kinds are deliberately distinct so the calling layer can tell
/// "score is genuinely low" apart from "score unavailable": a zero is a real
/// result, an `InsufficientData` is not. None of these are retried here —
/// re-fetching a profile is the collaborator's job.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed or empty required input, e.g. a job posting with no skills
    /// at all, or a raw source record of an unrecognized shape.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Footprint aggregation was asked to score a user with zero connected
    /// sources. Semantically different from a present-but-zero signal.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Calibration table failed to load or validate. Fatal at process
    /// start, never recoverable per-call.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl EngineError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        EngineError::InvalidInput(msg.into())
    }

    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        EngineError::InsufficientData(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        EngineError::Configuration(msg.into())
    }
}
