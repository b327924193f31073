//! Error types for pitch conversions

use thiserror::Error;

/// Pitch conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    /// Pitch-class spelling not found in the enharmonic table
    #[error("Invalid note name: {0}")]
    InvalidNoteName(String),
}

/// Result type for pitch operations
pub type PitchResult<T> = Result<T, PitchError>;
