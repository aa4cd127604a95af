//! Conversions from library error types

use super::types::{ErrorKind, ExtractError};

impl From<serde_json::Error> for ExtractError {
    fn from(error: serde_json::Error) -> Self {
        ExtractError::new(ErrorKind::Serialization, error.to_string(), None)
    }
}

impl From<simdutf8::compat::Utf8Error> for ExtractError {
    fn from(error: simdutf8::compat::Utf8Error) -> Self {
        ExtractError::invalid_utf8(error.valid_up_to())
    }
}
