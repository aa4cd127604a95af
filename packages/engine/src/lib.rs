//! # jsonsift engine
//!
//! Path-based field extraction from JSON documents without building a
//! document tree.
//!
//! A spec such as `"a.b, d"` is compiled once into an immutable
//! [`FilterTree`]; the tree is then streamed against the tokens of each
//! document, deciding token by token what is included.
//!
//! ```rust
//! use jsonsift_engine::{ExtractorConfig, compile, extract};
//!
//! let tree = compile("d, a.b");
//! let config = ExtractorConfig::default();
//! let doc = r#"{"a":{"b":1,"c":true,"x":false},"d":"xyz"}"#;
//!
//! let text = extract::extract_text(&tree, doc, &config).expect("valid JSON");
//! assert_eq!(text.as_deref(), Some("1 xyz "));
//!
//! let json = extract::extract_json(&tree, doc, &config).expect("valid JSON");
//! assert_eq!(json.as_deref(), Some(r#"{"a":{"b":1},"d":"xyz"}"#));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod output;
pub mod paths;
pub mod stats;
pub mod stream;
pub mod tokenizer;
pub mod tokens;
pub mod trie;

pub use self::{
    config::{ConfigurationError, ExtractorConfig, Validator},
    error::{ErrorKind, ExtractError, ExtractResult},
    extract::{FilteredTokens, has_json_content},
    filter::{FilterCompiler, FilterNode, FilterTree, compile, compile_paths},
    output::{JsonTextSink, TextCollector, TokenSink, ValueSink, replay},
    paths::PathSpec,
    stats::{ExtractionStats, StatsSnapshot},
    stream::FilteringTokens,
    tokenizer::JsonTokenizer,
    tokens::{JsonToken, OwnedJsonToken, TokenSource},
    trie::InclusionTrie,
};
