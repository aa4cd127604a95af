//! Streaming filter engine
//!
//! Applies a compiled `FilterNode` to a token source one token at a time.
//! Excluded subtrees are skipped by depth counting only; enclosing objects,
//! arrays and property names are held back until something beneath them is
//! included, so the filtered stream is always a minimal well-formed document.
//!
//! - `types`: per-container frames and pending-field state
//! - `engine`: `FilteringTokens`, the filtering iterator

mod engine;
mod types;

pub use engine::FilteringTokens;
