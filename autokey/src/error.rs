//! Error types for autokey operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutokeyError {
    #[error("Invalid minimum key length (must be >= 1)")]
    InvalidMinKeyLength,

    #[error("Invalid key length range: maximum {max} is smaller than minimum {min}")]
    InvalidKeyLengthRange { min: usize, max: usize },

    #[error("Maximum key length {max} exceeds ciphertext length {len}")]
    KeyLengthExceedsText { max: usize, len: usize },

    #[error("Text contains no letters to analyze")]
    EmptyText,

    #[error("Invalid character {0:?} (expected a-z)")]
    InvalidCharacter(char),

    #[error("Key cannot be empty")]
    EmptyKey,
}

pub type Result<T> = std::result::Result<T, AutokeyError>;
