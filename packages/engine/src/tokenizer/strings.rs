//! String scanning with escape sequence handling
//!
//! Escape-free strings are returned as borrowed slices of the document.
//! Anything containing a backslash is decoded into an owned `String`,
//! including UTF-16 surrogate pairs written as two `\uXXXX` escapes.

use std::borrow::Cow;

use memchr::memchr2;

use super::core::JsonTokenizer;
use crate::error::{ExtractError, ExtractResult};

impl<'a> JsonTokenizer<'a> {
    /// Read the string starting at the opening quote under `self.position`
    pub(super) fn read_string(&mut self) -> ExtractResult<Cow<'a, str>> {
        let start = self.position + 1;
        let Some(stop) = memchr2(b'"', b'\\', &self.bytes[start..]) else {
            return Err(ExtractError::unexpected_end_of_input(
                self.bytes.len(),
                "closing '\"'",
            ));
        };
        self.check_control_characters(start, start + stop)?;

        if self.bytes[start + stop] == b'"' {
            self.position = start + stop + 1;
            return Ok(Cow::Borrowed(&self.input[start..start + stop]));
        }

        let mut value = String::with_capacity(stop + 16);
        let mut pos = start;
        loop {
            let Some(stop) = memchr2(b'"', b'\\', &self.bytes[pos..]) else {
                return Err(ExtractError::unexpected_end_of_input(
                    self.bytes.len(),
                    "closing '\"'",
                ));
            };
            self.check_control_characters(pos, pos + stop)?;
            value.push_str(&self.input[pos..pos + stop]);
            pos += stop;
            if self.bytes[pos] == b'"' {
                self.position = pos + 1;
                return Ok(Cow::Owned(value));
            }
            pos = self.decode_escape(pos, &mut value)?;
        }
    }

    fn check_control_characters(&self, from: usize, to: usize) -> ExtractResult<()> {
        match self.bytes[from..to].iter().position(|&byte| byte < 0x20) {
            Some(index) => Err(ExtractError::syntax(
                "unescaped control character in string",
                from + index,
            )),
            None => Ok(()),
        }
    }

    /// Decode the escape whose backslash is at `pos`, returning the offset
    /// just past it
    fn decode_escape(&self, pos: usize, value: &mut String) -> ExtractResult<usize> {
        let Some(&code) = self.bytes.get(pos + 1) else {
            return Err(ExtractError::unexpected_end_of_input(
                pos + 1,
                "escape character",
            ));
        };
        let decoded = match code {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{0008}',
            b'f' => '\u{000C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => return self.decode_unicode_escape(pos, value),
            _ => return Err(ExtractError::invalid_escape(pos, "unknown escape character")),
        };
        value.push(decoded);
        Ok(pos + 2)
    }

    fn decode_unicode_escape(&self, pos: usize, value: &mut String) -> ExtractResult<usize> {
        let code_point = self.read_hex4(pos + 2)?;

        if (0xDC00..=0xDFFF).contains(&code_point) {
            return Err(ExtractError::invalid_escape(
                pos,
                "low surrogate without preceding high surrogate",
            ));
        }

        if !(0xD800..=0xDBFF).contains(&code_point) {
            let decoded = char::from_u32(code_point)
                .ok_or_else(|| ExtractError::invalid_escape(pos, "invalid unicode code point"))?;
            value.push(decoded);
            return Ok(pos + 6);
        }

        if self.bytes.get(pos + 6..pos + 8) != Some(b"\\u".as_slice()) {
            return Err(ExtractError::invalid_escape(
                pos,
                "high surrogate not followed by low surrogate escape sequence",
            ));
        }
        let low = self.read_hex4(pos + 8)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(ExtractError::invalid_escape(
                pos,
                "high surrogate not followed by valid low surrogate",
            ));
        }
        let scalar = 0x10000 + ((code_point - 0xD800) << 10) + (low - 0xDC00);
        let decoded = char::from_u32(scalar)
            .ok_or_else(|| ExtractError::invalid_escape(pos, "invalid surrogate pair result"))?;
        value.push(decoded);
        Ok(pos + 12)
    }

    fn read_hex4(&self, at: usize) -> ExtractResult<u32> {
        let Some(digits) = self.bytes.get(at..at + 4) else {
            return Err(ExtractError::unexpected_end_of_input(
                self.bytes.len(),
                "four hex digits",
            ));
        };
        digits.iter().try_fold(0u32, |acc, &digit| {
            (digit as char)
                .to_digit(16)
                .map(|nibble| (acc << 4) | nibble)
                .ok_or_else(|| ExtractError::invalid_escape(at, "invalid unicode escape sequence"))
        })
    }
}
