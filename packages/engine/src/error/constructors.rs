//! Error constructor functions
//!
//! Factory methods used by the tokenizer and the extraction façade.

use super::types::{ErrorKind, ExtractError};

impl ExtractError {
    /// Creates a syntax error with a free-form description
    pub fn syntax(message: impl Into<String>, offset: usize) -> Self {
        Self::new(ErrorKind::InvalidJson, message, Some(offset))
    }

    /// Unexpected character where a specific structural element was required
    ///
    /// # Examples
    /// ```
    /// use jsonsift_engine::error::{ErrorKind, ExtractError};
    ///
    /// let error = ExtractError::unexpected_byte(b'}', 7, "object key");
    /// assert_eq!(error.kind(), ErrorKind::InvalidJson);
    /// assert_eq!(error.offset(), Some(7));
    /// ```
    #[must_use]
    pub fn unexpected_byte(byte: u8, offset: usize, expected: &str) -> Self {
        let found = if byte.is_ascii_graphic() {
            format!("'{}'", byte as char)
        } else {
            format!("0x{byte:02x}")
        };
        Self::syntax(format!("unexpected {found}, expected {expected}"), offset)
    }

    #[must_use]
    pub fn unexpected_end_of_input(offset: usize, expected: &str) -> Self {
        Self::syntax(format!("unexpected end of input, expected {expected}"), offset)
    }

    #[must_use]
    pub fn invalid_number(offset: usize, reason: &str) -> Self {
        Self::syntax(format!("invalid number: {reason}"), offset)
    }

    #[must_use]
    pub fn invalid_escape(offset: usize, reason: &str) -> Self {
        Self::syntax(format!("invalid string escape: {reason}"), offset)
    }

    #[must_use]
    pub fn invalid_literal(offset: usize) -> Self {
        Self::syntax("invalid literal, expected true, false or null", offset)
    }

    #[must_use]
    pub fn trailing_characters(offset: usize) -> Self {
        Self::syntax("trailing characters after root value", offset)
    }

    #[must_use]
    pub fn invalid_utf8(offset: usize) -> Self {
        Self::new(
            ErrorKind::InvalidUtf8,
            "document is not valid UTF-8",
            Some(offset),
        )
    }

    #[must_use]
    pub fn nesting_too_deep(max_depth: usize, offset: usize) -> Self {
        Self::new(
            ErrorKind::NestingTooDeep,
            format!("document nesting exceeds maximum depth of {max_depth}"),
            Some(offset),
        )
    }
}
