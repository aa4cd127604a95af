//! Tokenizer state machine
//!
//! Tracks the open containers and what the grammar allows next, so that
//! missing commas, stray colons and mismatched brackets surface as errors at
//! the offset where they occur.

use std::iter::FusedIterator;

use crate::{
    error::{ExtractError, ExtractResult},
    tokens::JsonToken,
};

/// Nesting limit applied by `JsonTokenizer::new`
pub const DEFAULT_MAX_DEPTH: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Object,
    Array,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    RootValue,
    Value,
    FirstValueOrEnd,
    FirstKeyOrEnd,
    Key,
    Colon,
    CommaOrEnd,
    Finished,
}

impl Expect {
    fn describe(self) -> &'static str {
        match self {
            Expect::RootValue | Expect::Value => "a value",
            Expect::FirstValueOrEnd => "a value or ']'",
            Expect::FirstKeyOrEnd => "an object key or '}'",
            Expect::Key => "an object key",
            Expect::Colon => "':'",
            Expect::CommaOrEnd => "',' or a closing bracket",
            Expect::Finished => "end of input",
        }
    }
}

/// Pull tokenizer over a single JSON document
#[derive(Debug)]
pub struct JsonTokenizer<'a> {
    pub(super) input: &'a str,
    pub(super) bytes: &'a [u8],
    pub(super) position: usize,
    stack: Vec<Container>,
    expect: Expect,
    max_depth: usize,
    failed: bool,
}

impl<'a> JsonTokenizer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_max_depth(input, DEFAULT_MAX_DEPTH)
    }

    #[must_use]
    pub fn with_max_depth(input: &'a str, max_depth: usize) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            position: 0,
            stack: Vec::new(),
            expect: Expect::RootValue,
            max_depth,
            failed: false,
        }
    }

    /// Byte offset of the next unread character
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of currently open objects and arrays
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.bytes.get(self.position) {
            self.position += 1;
        }
    }

    fn next_token(&mut self) -> ExtractResult<Option<JsonToken<'a>>> {
        loop {
            self.skip_whitespace();
            let Some(&byte) = self.bytes.get(self.position) else {
                return match self.expect {
                    Expect::Finished => Ok(None),
                    expect => Err(ExtractError::unexpected_end_of_input(
                        self.position,
                        expect.describe(),
                    )),
                };
            };

            match self.expect {
                Expect::Finished => return Err(ExtractError::trailing_characters(self.position)),
                Expect::Colon => {
                    if byte != b':' {
                        return Err(ExtractError::unexpected_byte(
                            byte,
                            self.position,
                            Expect::Colon.describe(),
                        ));
                    }
                    self.position += 1;
                    self.expect = Expect::Value;
                }
                Expect::CommaOrEnd => match (byte, self.stack.last()) {
                    (b',', Some(Container::Object)) => {
                        self.position += 1;
                        self.expect = Expect::Key;
                    }
                    (b',', Some(Container::Array)) => {
                        self.position += 1;
                        self.expect = Expect::Value;
                    }
                    (b'}', Some(Container::Object)) => {
                        return Ok(Some(self.close(JsonToken::EndObject)));
                    }
                    (b']', Some(Container::Array)) => {
                        return Ok(Some(self.close(JsonToken::EndArray)));
                    }
                    _ => {
                        return Err(ExtractError::unexpected_byte(
                            byte,
                            self.position,
                            Expect::CommaOrEnd.describe(),
                        ));
                    }
                },
                Expect::FirstKeyOrEnd if byte == b'}' => {
                    return Ok(Some(self.close(JsonToken::EndObject)));
                }
                Expect::FirstKeyOrEnd | Expect::Key => {
                    if byte != b'"' {
                        return Err(ExtractError::unexpected_byte(
                            byte,
                            self.position,
                            self.expect.describe(),
                        ));
                    }
                    let name = self.read_string()?;
                    self.expect = Expect::Colon;
                    return Ok(Some(JsonToken::FieldName(name)));
                }
                Expect::FirstValueOrEnd if byte == b']' => {
                    return Ok(Some(self.close(JsonToken::EndArray)));
                }
                Expect::RootValue | Expect::Value | Expect::FirstValueOrEnd => {
                    return self.read_value(byte).map(Some);
                }
            }
        }
    }

    fn read_value(&mut self, byte: u8) -> ExtractResult<JsonToken<'a>> {
        let token = match byte {
            b'{' => return self.open(Container::Object),
            b'[' => return self.open(Container::Array),
            b'"' => JsonToken::String(self.read_string()?),
            b'-' | b'0'..=b'9' => self.read_number()?,
            b't' => self.read_literal(b"true", JsonToken::True)?,
            b'f' => self.read_literal(b"false", JsonToken::False)?,
            b'n' => self.read_literal(b"null", JsonToken::Null)?,
            _ => {
                return Err(ExtractError::unexpected_byte(
                    byte,
                    self.position,
                    self.expect.describe(),
                ));
            }
        };
        self.after_value();
        Ok(token)
    }

    fn read_literal(
        &mut self,
        literal: &'static [u8],
        token: JsonToken<'a>,
    ) -> ExtractResult<JsonToken<'a>> {
        if !self.bytes[self.position..].starts_with(literal) {
            return Err(ExtractError::invalid_literal(self.position));
        }
        self.position += literal.len();
        Ok(token)
    }

    fn open(&mut self, container: Container) -> ExtractResult<JsonToken<'a>> {
        if self.stack.len() >= self.max_depth {
            return Err(ExtractError::nesting_too_deep(self.max_depth, self.position));
        }
        self.position += 1;
        self.stack.push(container);
        Ok(match container {
            Container::Object => {
                self.expect = Expect::FirstKeyOrEnd;
                JsonToken::StartObject
            }
            Container::Array => {
                self.expect = Expect::FirstValueOrEnd;
                JsonToken::StartArray
            }
        })
    }

    fn close(&mut self, token: JsonToken<'a>) -> JsonToken<'a> {
        self.position += 1;
        self.stack.pop();
        self.after_value();
        token
    }

    fn after_value(&mut self) {
        self.expect = if self.stack.is_empty() {
            Expect::Finished
        } else {
            Expect::CommaOrEnd
        };
    }
}

impl<'a> Iterator for JsonTokenizer<'a> {
    type Item = ExtractResult<JsonToken<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for JsonTokenizer<'_> {}
