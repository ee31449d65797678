//! Engine construction and composite term filtering.

use std::sync::Arc;

use log::{error, info};

use crate::config::EngineConfig;
use crate::error::{CrocusError, Result};
use crate::index::{IndexReader, StoredDocument, Term};
use crate::lexicon::Lexicon;
use crate::stats::TermStats;

/// Corpus term-statistics and filtering engine.
///
/// Combines the [`Lexicon`] gate and the [`TermStats`] cache over a
/// single [`IndexReader`], which is held for the engine's entire
/// lifetime and assumed to be a frozen snapshot. The engine is
/// read-only with respect to the corpus and safe to share across
/// worker threads.
pub struct TermStatsEngine {
    reader: Arc<dyn IndexReader>,
    config: EngineConfig,
    lexicon: Lexicon,
    stats: TermStats,
}

impl TermStatsEngine {
    /// Construct an engine over `reader`, loading any configured word
    /// lists.
    ///
    /// Fails when the configuration is invalid or a word list cannot
    /// be read. Word-list failures are fatal rather than degraded: an
    /// engine missing its stoplist would silently filter wrongly.
    pub fn new(reader: Arc<dyn IndexReader>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let lexicon = Lexicon::from_config(&config)?;
        let stats = TermStats::new(reader.clone(), &config);

        info!(
            "initialized term statistics engine over index at '{}'",
            config.index_path
        );
        info!("fields in index are: {}", reader.field_names().join(", "));

        Ok(TermStatsEngine {
            reader,
            config,
            lexicon,
            stats,
        })
    }

    /// Number of documents in the underlying index.
    pub fn num_docs(&self) -> u64 {
        self.reader.num_docs()
    }

    /// Names of the fields present in the underlying index.
    pub fn field_names(&self) -> Vec<String> {
        self.reader.field_names()
    }

    /// The statistics cache.
    pub fn stats(&self) -> &TermStats {
        &self.stats
    }

    /// The stoplist/startlist gate.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decide whether `term` participates in statistics and vector
    /// construction, drawing every filter setting from the engine's
    /// configuration.
    ///
    /// External callers should normally use this method, so that new
    /// filters become available to every codepath carrying an
    /// [`EngineConfig`].
    pub fn term_filter(&self, term: &Term) -> bool {
        self.term_filter_with(
            term,
            &self.config.content_fields,
            self.config.min_frequency,
            self.config.max_frequency,
            self.config.max_non_alphabet_chars,
            self.config.filter_numbers,
            self.config.min_term_length,
        )
    }

    /// Composite term filter with explicit settings.
    ///
    /// Cheap checks run first; the frequency bound runs last because it
    /// may have to hit the index through the statistics cache.
    #[allow(clippy::too_many_arguments)]
    pub fn term_filter_with(
        &self,
        term: &Term,
        fields: &[String],
        min_freq: u64,
        max_freq: u64,
        max_non_alphabet_chars: i32,
        filter_numbers: bool,
        min_term_length: usize,
    ) -> bool {
        // Field filter (case-insensitive, matching index conventions).
        if !fields.iter().any(|f| f.eq_ignore_ascii_case(term.field())) {
            return false;
        }

        // Stoplist and startlist (each a no-op when not loaded).
        if self.lexicon.stoplist_contains(term.text()) {
            return false;
        }
        if !self.lexicon.startlist_contains(term.text()) {
            return false;
        }

        // Character filter.
        if max_non_alphabet_chars != -1 {
            let text = term.text();
            if text.chars().count() < min_term_length {
                return false;
            }
            let mut non_alphabet = 0;
            for c in text.chars() {
                if !c.is_alphabetic() {
                    non_alphabet += 1;
                    if non_alphabet > max_non_alphabet_chars as i64 {
                        return false;
                    }
                }
            }
        }

        // Number filter: anything that parses as a float counts.
        // Suffixed forms like "1f" or "1.0d" are not caught.
        if filter_numbers && term.text().parse::<f64>().is_ok() {
            return false;
        }

        // Frequency filter.
        let freq = self.stats.global_term_freq(term);
        freq >= min_freq && freq <= max_freq
    }

    /// All terms indexed under `field`.
    ///
    /// A field unknown to the index is a distinct error naming the
    /// fields that do exist, to aid diagnosis.
    pub fn terms_for_field(&self, field: &str) -> Result<Vec<String>> {
        match self.reader.terms(field)? {
            Some(terms) => Ok(terms),
            None => Err(CrocusError::field_not_found(
                field,
                &self.reader.field_names(),
            )),
        }
    }

    /// The stored document for `doc_id`.
    pub fn document(&self, doc_id: u64) -> Result<StoredDocument> {
        self.reader.document(doc_id)
    }

    /// External identifier of a document: the configured id field's
    /// stored value, or the internal numeric id when no field is set.
    pub fn external_doc_id(&self, doc_id: u64) -> Result<String> {
        let Some(field) = &self.config.doc_id_field else {
            return Ok(doc_id.to_string());
        };
        let doc = self.reader.document(doc_id)?;
        match doc.get(field) {
            Some(value) => Ok(value.to_string()),
            None => {
                error!(
                    "failed to get external doc id from doc no. {doc_id}: \
                     check that doc_id_field ('{field}') was set correctly and exists in the index"
                );
                Err(CrocusError::document(format!(
                    "document {doc_id} has no stored field '{field}'"
                )))
            }
        }
    }
}

impl std::fmt::Debug for TermStatsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermStatsEngine")
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish()
    }
}
