//! # jsonsift
//!
//! Extract selected scalar fields from JSON documents, identified by dotted
//! inclusion paths, without building a document tree. Produces compact,
//! text-searchable projections of large documents for indexing.
//!
//! ```rust
//! use jsonsift::FieldExtractor;
//!
//! let extractor = FieldExtractor::new("arr.name");
//! let doc = r#"{"arr":[{"name":"Bob","age":20},{"name":"Jack","age":30}]}"#;
//!
//! assert_eq!(
//!     extractor.extract_text(doc).expect("valid JSON").as_deref(),
//!     Some("Bob Jack ")
//! );
//! assert_eq!(
//!     extractor.extract_json(doc).expect("valid JSON").as_deref(),
//!     Some(r#"{"arr":[{"name":"Bob"},{"name":"Jack"}]}"#)
//! );
//!
//! // Non-JSON input is reported as "no content", not as an error
//! assert_eq!(extractor.extract_text("not json").expect("no error"), None);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod extractor;
pub mod factory;

pub use builder::ExtractorBuilder;
pub use extractor::FieldExtractor;
pub use factory::{ExtractorFactory, FILTER_CACHE_CAPACITY};

// Re-export important types from the engine package
pub use jsonsift_engine::{
    ConfigurationError, ErrorKind, ExtractError, ExtractResult, ExtractorConfig, FilterNode,
    FilterTree, FilteredTokens, JsonTextSink, JsonToken, JsonTokenizer, OwnedJsonToken,
    StatsSnapshot, TextCollector, TokenSink, TokenSource, ValueSink, compile, compile_paths,
    replay,
};

/// Extractor for a comma-separated spec
///
/// Shorthand for `FieldExtractor::new(spec)`
#[must_use]
pub fn extractor(spec: &str) -> FieldExtractor {
    FieldExtractor::new(spec)
}

/// Start building an extractor
///
/// Shorthand for `ExtractorBuilder::new()`
#[must_use]
pub fn builder() -> ExtractorBuilder {
    ExtractorBuilder::new()
}
