//! Default JSON token source
//!
//! Strict pull tokenizer turning a UTF-8 document into `JsonToken` events.
//!
//! - `core`: `JsonTokenizer`, structural state and the `Iterator` impl
//! - `strings`: string scanning and escape decoding
//! - `numbers`: number grammar and int/float classification

mod core;
mod numbers;
mod strings;

pub use self::core::{DEFAULT_MAX_DEPTH, JsonTokenizer};
