//! `serde_json::Value` construction from tokens

use serde_json::{Map, Number, Value};

use super::sink::TokenSink;
use crate::{error::ExtractResult, tokens::JsonToken};

#[derive(Debug)]
enum Building {
    Object {
        members: Map<String, Value>,
        key: Option<String>,
    },
    Array {
        items: Vec<Value>,
        key: Option<String>,
    },
}

/// Builds the first root value of a token stream
#[derive(Debug, Default)]
pub struct ValueSink {
    stack: Vec<Building>,
    pending_key: Option<String>,
    root: Option<Value>,
}

impl ValueSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The completed root value, `None` if the stream held no value
    #[must_use]
    pub fn finish(self) -> Option<Value> {
        self.root
    }

    fn attach(&mut self, key: Option<String>, value: Value) {
        match self.stack.last_mut() {
            Some(Building::Object { members, .. }) => {
                members.insert(key.unwrap_or_default(), value);
            }
            Some(Building::Array { items, .. }) => items.push(value),
            None => {
                if self.root.is_none() {
                    self.root = Some(value);
                }
            }
        }
    }
}

impl TokenSink for ValueSink {
    fn accept(&mut self, token: JsonToken<'_>) -> ExtractResult<()> {
        let scalar = match token {
            JsonToken::StartObject => {
                let key = self.pending_key.take();
                self.stack.push(Building::Object {
                    members: Map::new(),
                    key,
                });
                return Ok(());
            }
            JsonToken::StartArray => {
                let key = self.pending_key.take();
                self.stack.push(Building::Array {
                    items: Vec::new(),
                    key,
                });
                return Ok(());
            }
            JsonToken::EndObject | JsonToken::EndArray => {
                let (key, value) = match self.stack.pop() {
                    Some(Building::Object { members, key }) => (key, Value::Object(members)),
                    Some(Building::Array { items, key }) => (key, Value::Array(items)),
                    None => return Ok(()),
                };
                self.attach(key, value);
                return Ok(());
            }
            JsonToken::FieldName(name) => {
                self.pending_key = Some(name.into_owned());
                return Ok(());
            }
            JsonToken::String(text) => Value::String(text.into_owned()),
            // Out of range for f64, e.g. 1e400; the lexeme is still valid JSON
            JsonToken::NumberInt(lexeme) | JsonToken::NumberFloat(lexeme) => lexeme
                .parse::<Number>()
                .map_or_else(|_| Value::String(lexeme.to_owned()), Value::Number),
            JsonToken::True => Value::Bool(true),
            JsonToken::False => Value::Bool(false),
            JsonToken::Null => Value::Null,
        };
        let key = self.pending_key.take();
        self.attach(key, scalar);
        Ok(())
    }
}
