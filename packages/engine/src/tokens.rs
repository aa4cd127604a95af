//! Token definitions for document streams
//!
//! Events produced by a token source and passed through the filter engine.
//! Strings borrow from the document when they contain no escapes; numbers
//! always keep their source lexeme.

use std::borrow::Cow;

use crate::error::ExtractResult;

/// Structural and scalar events of a JSON document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonToken<'a> {
    /// Start of an object (`{`)
    StartObject,
    /// End of an object (`}`)
    EndObject,
    /// Start of an array (`[`)
    StartArray,
    /// End of an array (`]`)
    EndArray,
    /// Object property name
    FieldName(Cow<'a, str>),
    /// String scalar, unescaped
    String(Cow<'a, str>),
    /// Integer number scalar
    NumberInt(&'a str),
    /// Number scalar with a fraction or exponent
    NumberFloat(&'a str),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
}

impl<'a> JsonToken<'a> {
    #[inline]
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            JsonToken::String(_)
                | JsonToken::NumberInt(_)
                | JsonToken::NumberFloat(_)
                | JsonToken::True
                | JsonToken::False
                | JsonToken::Null
        )
    }

    #[inline]
    #[must_use]
    pub fn is_container_start(&self) -> bool {
        matches!(self, JsonToken::StartObject | JsonToken::StartArray)
    }

    #[inline]
    #[must_use]
    pub fn is_container_end(&self) -> bool {
        matches!(self, JsonToken::EndObject | JsonToken::EndArray)
    }

    /// Textual form used for text extraction, `None` for non-textual tokens.
    ///
    /// `null` has no textual form.
    #[must_use]
    pub fn scalar_text(&self) -> Option<&str> {
        match self {
            JsonToken::String(value) => Some(value.as_ref()),
            JsonToken::NumberInt(lexeme) | JsonToken::NumberFloat(lexeme) => Some(*lexeme),
            JsonToken::True => Some("true"),
            JsonToken::False => Some("false"),
            _ => None,
        }
    }

    /// Detach the token from the document it was read from
    #[must_use]
    pub fn into_owned(self) -> OwnedJsonToken {
        match self {
            JsonToken::StartObject => OwnedJsonToken::StartObject,
            JsonToken::EndObject => OwnedJsonToken::EndObject,
            JsonToken::StartArray => OwnedJsonToken::StartArray,
            JsonToken::EndArray => OwnedJsonToken::EndArray,
            JsonToken::FieldName(name) => OwnedJsonToken::FieldName(name.into_owned()),
            JsonToken::String(value) => OwnedJsonToken::String(value.into_owned()),
            JsonToken::NumberInt(lexeme) => OwnedJsonToken::NumberInt(lexeme.to_owned()),
            JsonToken::NumberFloat(lexeme) => OwnedJsonToken::NumberFloat(lexeme.to_owned()),
            JsonToken::True => OwnedJsonToken::True,
            JsonToken::False => OwnedJsonToken::False,
            JsonToken::Null => OwnedJsonToken::Null,
        }
    }
}

/// `JsonToken` that owns its text, for collecting filtered streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedJsonToken {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    FieldName(String),
    String(String),
    NumberInt(String),
    NumberFloat(String),
    True,
    False,
    Null,
}

/// Lazy, forward-only, single-pass producer of document tokens.
///
/// Any iterator over `ExtractResult<JsonToken>` qualifies. A source reports a
/// syntax error by yielding `Err` and should yield nothing afterwards.
pub trait TokenSource<'a>: Iterator<Item = ExtractResult<JsonToken<'a>>> {}

impl<'a, I> TokenSource<'a> for I where I: Iterator<Item = ExtractResult<JsonToken<'a>>> {}
