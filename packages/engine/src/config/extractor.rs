//! Extractor configuration
//!
//! Output buffer sizing, tokenizer limits and the text separator.

use serde::{Deserialize, Serialize};

use super::validation::{ConfigResult, ConfigurationError, Validator};

/// Runtime configuration shared by every extraction made with one extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Smallest initial capacity of the text output buffer
    pub min_output_capacity: usize,
    /// Largest initial capacity of the text output buffer
    pub max_output_capacity: usize,
    /// Input length is divided by this to estimate the output size
    pub output_capacity_divisor: usize,
    /// Deepest object/array nesting the tokenizer accepts
    pub max_nesting_depth: usize,
    /// Appended after every scalar in text output
    pub separator: char,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_output_capacity: 100,
            max_output_capacity: 50_000,
            output_capacity_divisor: 4,
            max_nesting_depth: 1000,
            separator: ' ',
        }
    }
}

impl ExtractorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output_capacity(mut self, min: usize, max: usize) -> Self {
        self.min_output_capacity = min;
        self.max_output_capacity = max;
        self
    }

    #[must_use]
    pub fn with_output_capacity_divisor(mut self, divisor: usize) -> Self {
        self.output_capacity_divisor = divisor;
        self
    }

    #[must_use]
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Rough size of the text output for a document of `input_len` bytes.
    ///
    /// Large enough to avoid most reallocations, small enough not to
    /// over-allocate for big documents that contribute only a few fields.
    #[must_use]
    pub fn estimate_result_length(&self, input_len: usize) -> usize {
        let estimate = input_len / self.output_capacity_divisor.max(1);
        estimate.clamp(
            self.min_output_capacity,
            self.max_output_capacity.max(self.min_output_capacity),
        )
    }
}

impl Validator for ExtractorConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.output_capacity_divisor == 0 {
            return Err(ConfigurationError::InvalidBufferSize(
                "output_capacity_divisor cannot be zero".to_string(),
            ));
        }
        if self.min_output_capacity > self.max_output_capacity {
            return Err(ConfigurationError::Conflict(format!(
                "min_output_capacity ({}) exceeds max_output_capacity ({})",
                self.min_output_capacity, self.max_output_capacity
            )));
        }
        if self.max_nesting_depth == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "max_nesting_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
