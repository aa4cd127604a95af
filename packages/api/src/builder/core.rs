//! Core `ExtractorBuilder` structure

use jsonsift_engine::{
    ExtractorConfig, FilterCompiler, InclusionTrie, PathSpec, Validator, config::ConfigResult,
    paths,
};

use crate::extractor::FieldExtractor;

/// Builder for `FieldExtractor` with fluent path and configuration setters
///
/// # Examples
/// ```
/// use jsonsift::ExtractorBuilder;
///
/// let extractor = ExtractorBuilder::new()
///     .spec("products.food.Pear")
///     .path("products.food.Apple")
///     .max_nesting_depth(64)
///     .build()
///     .expect("valid configuration");
/// assert!(!extractor.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractorBuilder {
    paths: Vec<PathSpec>,
    config: ExtractorConfig,
}

impl ExtractorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every path of a comma-separated spec
    ///
    /// # Arguments
    /// * `spec` - Paths such as `"a.b, c"`; empty entries are ignored
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn spec(mut self, spec: &str) -> Self {
        self.paths.extend(paths::parse_spec(spec));
        self
    }

    /// Add a single dotted path; commas in it are not separators
    #[must_use]
    pub fn path(mut self, path: &str) -> Self {
        self.paths.extend(PathSpec::parse(path));
        self
    }

    /// Add an explicit list of dotted paths
    #[must_use]
    pub fn paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.paths.extend(paths::parse_paths(paths));
        self
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.config.max_nesting_depth = depth;
        self
    }

    /// Character written after each scalar in text output
    #[must_use]
    pub fn separator(mut self, separator: char) -> Self {
        self.config.separator = separator;
        self
    }

    /// Compile the collected paths into an extractor
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the configuration fails validation.
    /// An empty path set is not an error; it yields an extractor that
    /// includes nothing.
    pub fn build(self) -> ConfigResult<FieldExtractor> {
        self.config.validate()?;
        let mut trie = InclusionTrie::new();
        for path in &self.paths {
            trie.insert(path);
        }
        Ok(FieldExtractor::from_parts(
            FilterCompiler::compile(trie),
            self.config,
        ))
    }
}
