//! Extractor factory with a bounded filter cache
//!
//! Compiling a spec is cheap but not free; services that build extractors
//! per request for a small set of specs reuse compiled filters from here.

use std::sync::{Arc, RwLock};

use hashbrown::HashMap;
use jsonsift_engine::{
    ExtractorConfig, FilterTree, Validator, compile, compile_paths, config::ConfigResult,
};

use crate::extractor::FieldExtractor;

/// Maximum number of compiled filters kept per factory
pub const FILTER_CACHE_CAPACITY: usize = 64;

/// Builds `FieldExtractor`s sharing one configuration
#[derive(Debug)]
pub struct ExtractorFactory {
    config: Arc<ExtractorConfig>,
    cache: RwLock<HashMap<String, FilterTree>>,
}

impl Default for ExtractorFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Arc::new(ExtractorConfig::default()),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Factory using `config` for every extractor it builds
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if `config` fails validation.
    pub fn with_config(config: ExtractorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            cache: RwLock::new(HashMap::new()),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extractor for a comma-separated spec, reusing a cached filter when the
    /// same spec text was seen before
    #[must_use]
    pub fn build_extractor(&self, spec: &str) -> FieldExtractor {
        FieldExtractor::with_shared_config(self.filter_for(spec), Arc::clone(&self.config))
    }

    /// Extractor for an explicit list of dotted paths; not cached
    pub fn build_extractor_for_paths<I, S>(&self, paths: I) -> FieldExtractor
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        FieldExtractor::with_shared_config(compile_paths(paths), Arc::clone(&self.config))
    }

    /// Number of compiled filters currently cached
    #[must_use]
    pub fn cached_filters(&self) -> usize {
        self.cache.read().map_or(0, |cache| cache.len())
    }

    fn filter_for(&self, spec: &str) -> FilterTree {
        if let Ok(cache) = self.cache.read()
            && let Some(filter) = cache.get(spec)
        {
            return filter.clone();
        }

        let filter = compile(spec);

        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < FILTER_CACHE_CAPACITY {
                cache.insert(spec.to_owned(), filter.clone());
            } else {
                log::debug!(
                    "filter cache full ({FILTER_CACHE_CAPACITY} entries), not caching spec {spec:?}"
                );
            }
        }

        filter
    }
}
