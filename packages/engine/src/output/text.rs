//! Scalar text accumulation

use super::sink::TokenSink;
use crate::{error::ExtractResult, tokens::JsonToken};

/// Collects the text of every scalar, each followed by a separator.
///
/// Strings are written unquoted, numbers as they appear in the document and
/// booleans as `true`/`false`. `null` and structural tokens add nothing.
#[derive(Debug, Clone)]
pub struct TextCollector {
    buffer: String,
    separator: char,
    scalars: usize,
}

impl TextCollector {
    #[must_use]
    pub fn with_capacity(capacity: usize, separator: char) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
            separator,
            scalars: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, token: &JsonToken<'_>) {
        if let Some(text) = token.scalar_text() {
            self.buffer.push_str(text);
            self.buffer.push(self.separator);
            self.scalars += 1;
        }
    }

    /// Number of scalars written so far
    #[must_use]
    pub fn scalar_count(&self) -> usize {
        self.scalars
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.buffer
    }
}

impl TokenSink for TextCollector {
    fn accept(&mut self, token: JsonToken<'_>) -> ExtractResult<()> {
        self.push(&token);
        Ok(())
    }
}
