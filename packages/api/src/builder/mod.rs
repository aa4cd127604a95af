//! Fluent extractor construction
//!
//! Collects paths and configuration, then compiles the filter once in
//! `build`.

pub mod core;

pub use self::core::ExtractorBuilder;
