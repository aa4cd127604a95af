//! Extraction configuration
//!
//! - `extractor`: `ExtractorConfig` with defaults and fluent setters
//! - `validation`: configuration errors and the `Validator` trait

pub mod extractor;
pub mod validation;

pub use extractor::ExtractorConfig;
pub use validation::{ConfigResult, ConfigurationError, Validator};
