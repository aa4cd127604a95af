//! Extraction Error Types
//!
//! Core error types for document tokenization and filtered extraction.

use std::error::Error;
use std::fmt;

/// Extraction error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid JSON syntax reported by the token source
    InvalidJson,
    /// Byte input was not valid UTF-8
    InvalidUtf8,
    /// Document nesting exceeded the configured maximum
    NestingTooDeep,
    /// Rendering filtered output failed
    Serialization,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidJson => "invalid JSON",
            ErrorKind::InvalidUtf8 => "invalid UTF-8",
            ErrorKind::NestingTooDeep => "nesting too deep",
            ErrorKind::Serialization => "serialization failed",
        }
    }
}

/// Main extraction error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractError {
    pub kind: ErrorKind,
    pub message: String,
    /// Byte offset into the document where the failure was detected
    pub offset: Option<usize>,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(
                f,
                "{} at offset {}: {}",
                self.kind.as_str(),
                offset,
                self.message
            ),
            None => write!(f, "{}: {}", self.kind.as_str(), self.message),
        }
    }
}

impl Error for ExtractError {}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

impl ExtractError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>, offset: Option<usize>) -> Self {
        Self {
            kind,
            message: message.into(),
            offset,
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}
