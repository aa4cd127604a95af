//! Number scanning
//!
//! Validates the RFC 8259 number grammar and classifies the lexeme as an
//! integer or a float. The lexeme itself is kept as written.

use super::core::JsonTokenizer;
use crate::{
    error::{ExtractError, ExtractResult},
    tokens::JsonToken,
};

#[inline]
fn skip_digits(bytes: &[u8], pos: usize) -> usize {
    pos + bytes[pos..].iter().take_while(|byte| byte.is_ascii_digit()).count()
}

impl<'a> JsonTokenizer<'a> {
    pub(super) fn read_number(&mut self) -> ExtractResult<JsonToken<'a>> {
        let bytes = self.bytes;
        let start = self.position;
        let mut pos = start;

        if bytes.get(pos) == Some(&b'-') {
            pos += 1;
        }
        match bytes.get(pos) {
            Some(b'0') => {
                pos += 1;
                if bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                    return Err(ExtractError::invalid_number(
                        start,
                        "leading zeros are not allowed",
                    ));
                }
            }
            Some(b'1'..=b'9') => pos = skip_digits(bytes, pos),
            _ => return Err(ExtractError::invalid_number(start, "expected digit")),
        }

        let mut is_float = false;
        if bytes.get(pos) == Some(&b'.') {
            let after = skip_digits(bytes, pos + 1);
            if after == pos + 1 {
                return Err(ExtractError::invalid_number(
                    start,
                    "expected digit after decimal point",
                ));
            }
            pos = after;
            is_float = true;
        }
        if let Some(b'e' | b'E') = bytes.get(pos) {
            pos += 1;
            if let Some(b'+' | b'-') = bytes.get(pos) {
                pos += 1;
            }
            let after = skip_digits(bytes, pos);
            if after == pos {
                return Err(ExtractError::invalid_number(
                    start,
                    "expected digit in exponent",
                ));
            }
            pos = after;
            is_float = true;
        }

        self.position = pos;
        let lexeme = &self.input[start..pos];
        Ok(if is_float {
            JsonToken::NumberFloat(lexeme)
        } else {
            JsonToken::NumberInt(lexeme)
        })
    }
}
