//! Codec error types

use thiserror::Error;

/// Errors that can occur while encoding or decoding a share token
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Flashcard set too large for URL encoding: token is {length} characters, limit is {limit}")]
    PayloadTooLarge { length: usize, limit: usize },

    #[error("Invalid token format: {0}")]
    InvalidTokenFormat(String),

    #[error("Decompression failed: {0}")]
    DecompressionFailure(String),

    #[error("Token content is not valid JSON: {0}")]
    ParseFailure(String),

    #[error("Invalid flashcard set structure: {0}")]
    StructuralInvalid(String),

    #[error("Failed to encode flashcard set: {0}")]
    EncodeFailure(String),
}

/// Fieldless classification of a [`CodecError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PayloadTooLarge,
    InvalidTokenFormat,
    DecompressionFailure,
    ParseFailure,
    StructuralInvalid,
    EncodeFailure,
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            Self::InvalidTokenFormat(_) => ErrorKind::InvalidTokenFormat,
            Self::DecompressionFailure(_) => ErrorKind::DecompressionFailure,
            Self::ParseFailure(_) => ErrorKind::ParseFailure,
            Self::StructuralInvalid(_) => ErrorKind::StructuralInvalid,
            Self::EncodeFailure(_) => ErrorKind::EncodeFailure,
        }
    }

    /// True for every failure produced by the decode path
    pub fn is_invalid_token(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidTokenFormat
                | ErrorKind::DecompressionFailure
                | ErrorKind::ParseFailure
                | ErrorKind::StructuralInvalid
        )
    }
}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
