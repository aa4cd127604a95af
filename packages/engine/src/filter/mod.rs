//! Compiled path filters
//!
//! - `node`: the `FilterNode` sum type and its per-field dispatch
//! - `tree`: `FilterTree`, the immutable shareable compiled form
//! - `compiler`: inclusion trie → filter tree

pub mod compiler;
pub mod node;
pub mod tree;

pub use compiler::{FilterCompiler, compile, compile_paths};
pub use node::FilterNode;
pub use tree::FilterTree;
