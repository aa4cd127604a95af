//! Compact JSON text output
//!
//! Replays tokens as JSON without insignificant whitespace. Successive root
//! values are separated by a single space.

use super::sink::TokenSink;
use crate::{error::ExtractResult, tokens::JsonToken};

#[derive(Debug, Default, Clone)]
pub struct JsonTextSink {
    out: String,
    /// One entry per open container: true until its first member is written
    first_member: Vec<bool>,
    after_name: bool,
}

impl JsonTextSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    fn separate(&mut self) {
        if self.after_name {
            self.after_name = false;
            return;
        }
        match self.first_member.last_mut() {
            Some(first) if *first => *first = false,
            Some(_) => self.out.push(','),
            None if !self.out.is_empty() => self.out.push(' '),
            None => {}
        }
    }

    fn write_string(&mut self, value: &str) -> ExtractResult<()> {
        self.out.push_str(&serde_json::to_string(value)?);
        Ok(())
    }
}

impl TokenSink for JsonTextSink {
    fn accept(&mut self, token: JsonToken<'_>) -> ExtractResult<()> {
        match token {
            JsonToken::EndObject => {
                self.first_member.pop();
                self.out.push('}');
            }
            JsonToken::EndArray => {
                self.first_member.pop();
                self.out.push(']');
            }
            JsonToken::FieldName(name) => {
                self.separate();
                self.write_string(&name)?;
                self.out.push(':');
                self.after_name = true;
            }
            value => {
                self.separate();
                match value {
                    JsonToken::StartObject => {
                        self.out.push('{');
                        self.first_member.push(true);
                    }
                    JsonToken::StartArray => {
                        self.out.push('[');
                        self.first_member.push(true);
                    }
                    JsonToken::String(text) => self.write_string(&text)?,
                    JsonToken::NumberInt(lexeme) | JsonToken::NumberFloat(lexeme) => {
                        self.out.push_str(lexeme);
                    }
                    JsonToken::True => self.out.push_str("true"),
                    JsonToken::False => self.out.push_str("false"),
                    JsonToken::Null => self.out.push_str("null"),
                    JsonToken::EndObject | JsonToken::EndArray | JsonToken::FieldName(_) => {}
                }
            }
        }
        Ok(())
    }
}
