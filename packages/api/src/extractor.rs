//! Reusable field extractor
//!
//! A `FieldExtractor` holds one compiled filter and applies it to any number
//! of documents. Clones share the filter, configuration and statistics, so an
//! extractor can be handed to several threads.

use std::sync::Arc;

use bytes::Bytes;
use jsonsift_engine::{
    ExtractResult, ExtractionStats, ExtractorConfig, FilterTree, FilteredTokens, StatsSnapshot,
    compile, compile_paths, extract,
};
use serde_json::Value;

use crate::builder::ExtractorBuilder;

#[derive(Debug, Clone)]
pub struct FieldExtractor {
    filter: FilterTree,
    config: Arc<ExtractorConfig>,
    stats: Arc<ExtractionStats>,
}

impl FieldExtractor {
    /// Extractor for a comma-separated spec with the default configuration
    ///
    /// # Examples
    /// ```
    /// use jsonsift::FieldExtractor;
    ///
    /// let extractor = FieldExtractor::new("a.b, a.x");
    /// let text = extractor
    ///     .extract_text(r#"{"a":{"b":1,"c":true,"x":false},"d":"xyz"}"#)
    ///     .expect("valid JSON");
    /// assert_eq!(text.as_deref(), Some("1 false "));
    /// ```
    #[must_use]
    pub fn new(spec: &str) -> Self {
        Self::from_parts(compile(spec), ExtractorConfig::default())
    }

    /// Extractor for an explicit list of dotted paths
    pub fn for_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_parts(compile_paths(paths), ExtractorConfig::default())
    }

    #[must_use]
    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    pub(crate) fn from_parts(filter: FilterTree, config: ExtractorConfig) -> Self {
        Self::with_shared_config(filter, Arc::new(config))
    }

    pub(crate) fn with_shared_config(filter: FilterTree, config: Arc<ExtractorConfig>) -> Self {
        Self {
            filter,
            config,
            stats: Arc::new(ExtractionStats::new()),
        }
    }

    /// True when the filter can never include anything
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filter.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn filter(&self) -> &FilterTree {
        &self.filter
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Space-separated text of every included scalar.
    ///
    /// `Ok(None)` when the input does not start with `{` or `[`.
    ///
    /// # Errors
    ///
    /// Returns the tokenizer error for malformed JSON.
    pub fn extract_text(&self, json: &str) -> ExtractResult<Option<String>> {
        self.observe(
            json.len(),
            extract::extract_text(&self.filter, json, &self.config),
        )
    }

    /// `extract_text` over a UTF-8 byte buffer
    ///
    /// # Errors
    ///
    /// Returns an `InvalidUtf8` error or the tokenizer error.
    pub fn extract_text_from_slice(&self, json: &[u8]) -> ExtractResult<Option<String>> {
        self.observe(
            json.len(),
            extract::extract_text_from_slice(&self.filter, json, &self.config),
        )
    }

    /// UTF-8 encoding of `extract_text`
    ///
    /// # Errors
    ///
    /// Same as `extract_text`.
    pub fn extract_bytes(&self, json: &str) -> ExtractResult<Option<Bytes>> {
        self.observe(
            json.len(),
            extract::extract_bytes(&self.filter, json, &self.config),
        )
    }

    /// UTF-8 encoding of `extract_text_from_slice`
    ///
    /// # Errors
    ///
    /// Same as `extract_text_from_slice`.
    pub fn extract_bytes_from_slice(&self, json: &[u8]) -> ExtractResult<Option<Bytes>> {
        self.observe(
            json.len(),
            extract::extract_bytes_from_slice(&self.filter, json, &self.config),
        )
    }

    /// Filtered document as compact JSON, `Some("")` when nothing matched
    ///
    /// # Errors
    ///
    /// Same as `extract_text`.
    pub fn extract_json(&self, json: &str) -> ExtractResult<Option<String>> {
        self.observe(
            json.len(),
            extract::extract_json(&self.filter, json, &self.config),
        )
    }

    /// `extract_json` over a UTF-8 byte buffer
    ///
    /// # Errors
    ///
    /// Same as `extract_text_from_slice`.
    pub fn extract_json_from_slice(&self, json: &[u8]) -> ExtractResult<Option<String>> {
        self.observe(
            json.len(),
            extract::extract_json_from_slice(&self.filter, json, &self.config),
        )
    }

    /// Filtered document as a `serde_json::Value`; the inner `None` means
    /// nothing matched
    ///
    /// # Errors
    ///
    /// Same as `extract_text`.
    pub fn extract_value(&self, json: &str) -> ExtractResult<Option<Option<Value>>> {
        self.observe(
            json.len(),
            extract::extract_value(&self.filter, json, &self.config),
        )
    }

    /// Filtered token stream for replay into a custom `TokenSink`.
    ///
    /// Statistics are not recorded for streams handed to the caller.
    #[must_use]
    pub fn filtered_tokens<'a>(&'a self, json: &'a str) -> Option<FilteredTokens<'a, 'a>> {
        extract::filtered_tokens(&self.filter, json, &self.config)
    }

    fn observe<T>(
        &self,
        input_len: usize,
        result: ExtractResult<Option<T>>,
    ) -> ExtractResult<Option<T>> {
        match &result {
            Ok(Some(_)) => self.stats.record_document(input_len),
            Ok(None) => self.stats.record_skipped(),
            Err(error) => {
                self.stats.record_document(input_len);
                self.stats.record_failure();
                log::debug!("extraction failed for {input_len} byte document: {error}");
            }
        }
        result
    }
}
