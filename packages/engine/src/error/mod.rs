//! Extraction error handling
//!
//! Error types raised while tokenizing and filtering documents. A document that
//! fails the leading-character sniff is not an error; it is reported as
//! `Ok(None)` by the extraction entry points.

mod constructors;
mod conversions;
mod types;

pub use types::{ErrorKind, ExtractError, ExtractResult};
