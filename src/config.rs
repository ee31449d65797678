//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CrocusError, Result};
use crate::weight::TermWeight;

/// Configuration for a [`TermStatsEngine`](crate::engine::TermStatsEngine).
///
/// Defaults are permissive: no word lists, no character or number
/// filtering, the full frequency range, and no term weighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Path of the index this engine reads. Must be non-empty.
    pub index_path: String,

    /// Path of a newline-delimited stopword file, if any.
    pub stoplist_file: Option<String>,

    /// Path of a newline-delimited startword file, if any.
    pub startlist_file: Option<String>,

    /// Fields considered for term statistics and filtering.
    pub content_fields: Vec<String>,

    /// Term-weighting scheme used by the statistics cache.
    pub term_weight: TermWeight,

    /// Minimum accepted global term frequency.
    pub min_frequency: u64,

    /// Maximum accepted global term frequency.
    pub max_frequency: u64,

    /// Maximum number of non-alphabetic characters tolerated per token.
    /// `-1` disables character filtering (and the minimum-length check).
    pub max_non_alphabet_chars: i32,

    /// Reject tokens that parse as numbers.
    pub filter_numbers: bool,

    /// Minimum token length, enforced while character filtering is active.
    pub min_term_length: usize,

    /// Stored field holding the external document identifier. `None`
    /// uses the internal numeric id.
    pub doc_id_field: Option<String>,

    /// Memoize global term frequencies in the statistics cache.
    pub term_freq_caching: bool,
}

impl EngineConfig {
    pub fn new() -> Self {
        EngineConfig {
            index_path: String::new(),
            stoplist_file: None,
            startlist_file: None,
            content_fields: vec!["contents".to_string()],
            term_weight: TermWeight::None,
            min_frequency: 0,
            max_frequency: u64::MAX,
            max_non_alphabet_chars: -1,
            filter_numbers: false,
            min_term_length: 0,
            doc_id_field: None,
            term_freq_caching: true,
        }
    }

    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Check the configuration for construction-time errors.
    pub fn validate(&self) -> Result<()> {
        if self.index_path.is_empty() {
            return Err(CrocusError::invalid_config(
                "index_path is a required setting for initializing a term statistics engine",
            ));
        }
        if self.min_frequency > self.max_frequency {
            return Err(CrocusError::invalid_config(format!(
                "min_frequency ({}) exceeds max_frequency ({})",
                self.min_frequency, self.max_frequency
            )));
        }
        if self.max_non_alphabet_chars < -1 {
            return Err(CrocusError::invalid_config(format!(
                "max_non_alphabet_chars must be -1 (disabled) or non-negative, got {}",
                self.max_non_alphabet_chars
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`EngineConfig`].
#[derive(Debug)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        EngineConfigBuilder {
            config: EngineConfig::new(),
        }
    }
}

impl EngineConfigBuilder {
    pub fn index_path(mut self, path: impl Into<String>) -> Self {
        self.config.index_path = path.into();
        self
    }

    pub fn stoplist_file(mut self, path: impl Into<String>) -> Self {
        self.config.stoplist_file = Some(path.into());
        self
    }

    pub fn startlist_file(mut self, path: impl Into<String>) -> Self {
        self.config.startlist_file = Some(path.into());
        self
    }

    pub fn content_fields(
        mut self,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.config.content_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn term_weight(mut self, scheme: TermWeight) -> Self {
        self.config.term_weight = scheme;
        self
    }

    pub fn frequency_bounds(mut self, min: u64, max: u64) -> Self {
        self.config.min_frequency = min;
        self.config.max_frequency = max;
        self
    }

    pub fn max_non_alphabet_chars(mut self, max: i32) -> Self {
        self.config.max_non_alphabet_chars = max;
        self
    }

    pub fn filter_numbers(mut self, filter: bool) -> Self {
        self.config.filter_numbers = filter;
        self
    }

    pub fn min_term_length(mut self, length: usize) -> Self {
        self.config.min_term_length = length;
        self
    }

    pub fn doc_id_field(mut self, field: impl Into<String>) -> Self {
        self.config.doc_id_field = Some(field.into());
        self
    }

    pub fn term_freq_caching(mut self, caching: bool) -> Self {
        self.config.term_freq_caching = caching;
        self
    }

    pub fn build(self) -> EngineConfig {
        self.config
    }
}
