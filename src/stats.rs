//! Per-term corpus statistics with concurrent memoization.
//!
//! Statistics are pure functions of a frozen index, so the caches here
//! are append-only and tolerate fill races: two callers computing the
//! same missing key both arrive at the same value, and the last write
//! wins harmlessly.

use std::sync::Arc;

use ahash::AHashMap;
use log::{error, warn};
use parking_lot::RwLock;

use crate::config::EngineConfig;
use crate::index::{IndexReader, Posting, Term};
use crate::weight::TermWeight;

/// IDF of a present term: `log10(num_docs / doc_freq)`.
fn idf_score(num_docs: u64, doc_freq: u64) -> f32 {
    (num_docs as f32 / doc_freq as f32).log10()
}

/// Log-entropy score over a term's posting distribution.
///
/// `1 + (Σ p·log2(p)) / log2(n)` with `p = freq_in_doc / global_freq`
/// and `n` the document count, per Martin and Berry (2007). The metric
/// favors focally distributed terms: occurrences concentrated in few
/// documents score near 1, a uniform spread over the whole corpus
/// scores near 0.
///
/// With no occurrence mass (`global_freq == 0`) or a degenerate
/// denominator (`num_docs <= 1`, where `log2(n)` is 0 or undefined) the
/// score is defined as 1 by convention.
fn entropy_score(global_freq: u64, num_docs: u64, postings: &[Posting]) -> f32 {
    if global_freq == 0 || num_docs <= 1 {
        return 1.0;
    }
    let mut entropy = 0.0f64;
    for posting in postings {
        let p = posting.freq as f64 / global_freq as f64;
        entropy += p * p.log2();
    }
    (1.0 + entropy / (num_docs as f64).log2()) as f32
}

/// Computes and memoizes per-term corpus statistics, and derives term
/// weights under a configured [`TermWeight`] scheme.
///
/// Index I/O failures during a lookup are absorbed locally: the failure
/// is logged and a conservative default substituted, because a single
/// bad term must never abort a corpus-wide computation.
pub struct TermStats {
    reader: Arc<dyn IndexReader>,
    scheme: TermWeight,
    content_fields: Vec<String>,
    term_freq_caching: bool,
    term_freq: RwLock<AHashMap<Term, u64>>,
    term_idf: RwLock<AHashMap<Term, f32>>,
    term_entropy: RwLock<AHashMap<Term, f32>>,
}

impl TermStats {
    pub fn new(reader: Arc<dyn IndexReader>, config: &EngineConfig) -> Self {
        TermStats {
            reader,
            scheme: config.term_weight,
            content_fields: config.content_fields.clone(),
            term_freq_caching: config.term_freq_caching,
            term_freq: RwLock::new(AHashMap::new()),
            term_idf: RwLock::new(AHashMap::new()),
            term_entropy: RwLock::new(AHashMap::new()),
        }
    }

    /// The weighting scheme this cache was configured with.
    pub fn scheme(&self) -> TermWeight {
        self.scheme
    }

    /// Global term frequency: how many times `term` occurs across the
    /// whole corpus. Memoized. Returns 1 if the index cannot be read.
    ///
    /// A negative sentinel from the reader (seen with index backends
    /// that cannot answer the query for a given term-vector
    /// configuration) is normalized to 0 before caching.
    pub fn global_term_freq(&self, term: &Term) -> u64 {
        if self.term_freq_caching
            && let Some(&tf) = self.term_freq.read().get(term)
        {
            return tf;
        }
        let tf = match self.reader.total_term_freq(term) {
            Ok(tf) => tf,
            Err(e) => {
                warn!("couldn't get term frequency for term '{term}': {e}");
                return 1;
            }
        };
        let tf = if tf < 0 {
            warn!("index reader returned {tf} for term '{term}'; treating as 0");
            0
        } else {
            tf as u64
        };
        if self.term_freq_caching {
            self.term_freq.write().insert(term.clone(), tf);
        }
        tf
    }

    /// Global document frequency: how many documents contain `term` at
    /// least once. Passthrough to the reader, which is assumed to
    /// already be efficient. Returns 1 if the index cannot be read.
    pub fn doc_freq(&self, term: &Term) -> u64 {
        match self.reader.doc_freq(term) {
            Ok(df) => df,
            Err(e) => {
                warn!("couldn't get document frequency for term '{term}': {e}");
                1
            }
        }
    }

    /// IDF of `term`: `log10(num_docs / doc_freq)`. Memoized.
    ///
    /// An absent term (document frequency 0) scores exactly 0 rather
    /// than dividing by zero. Returns 1 if the index cannot be read.
    pub fn idf(&self, term: &Term) -> f32 {
        if let Some(&idf) = self.term_idf.read().get(term) {
            return idf;
        }
        let df = match self.reader.doc_freq(term) {
            Ok(df) => df,
            Err(e) => {
                warn!("couldn't get document frequency for term '{term}': {e}");
                return 1.0;
            }
        };
        if df == 0 {
            return 0.0;
        }
        let idf = idf_score(self.reader.num_docs(), df);
        self.term_idf.write().insert(term.clone(), idf);
        idf
    }

    /// Log-entropy of `term`: see [`entropy_score`] for the definition
    /// and boundary conventions. Memoized.
    ///
    /// If the postings cannot be read, the partial (possibly empty)
    /// accumulation is used rather than retried.
    pub fn entropy(&self, term: &Term) -> f32 {
        if let Some(&entropy) = self.term_entropy.read().get(term) {
            return entropy;
        }
        let gf = self.global_term_freq(term);
        let postings = match self.reader.postings(term) {
            Ok(postings) => postings,
            Err(e) => {
                warn!("couldn't get postings for term '{term}': {e}");
                Vec::new()
            }
        };
        let entropy = entropy_score(gf, self.reader.num_docs(), &postings);
        self.term_entropy.write().insert(term.clone(), entropy);
        entropy
    }

    /// Global weight of `term` under the configured scheme.
    ///
    /// Precondition for [`TermWeight::LogFreq`]: the term must occur in
    /// the corpus; the natural log of a zero frequency is `-inf`.
    pub fn global_weight(&self, term: &Term) -> f32 {
        match self.scheme {
            TermWeight::None => 1.0,
            TermWeight::Sqrt => (self.global_term_freq(term) as f32).sqrt(),
            TermWeight::Idf => self.idf(term),
            TermWeight::LogEntropy => self.entropy(term),
            TermWeight::Freq => self.global_term_freq(term) as f32,
            TermWeight::LogFreq => (self.global_term_freq(term) as f32).ln(),
        }
    }

    /// Local weight for a single document's occurrence count.
    ///
    /// The idf branch returns the raw count unchanged; downstream
    /// vector construction depends on that exact behavior. The pure
    /// frequency schemes have no local form and fall back to 1 with a
    /// severe diagnostic.
    pub fn local_weight(&self, freq_in_doc: u64) -> f32 {
        match self.scheme {
            TermWeight::None => 1.0,
            TermWeight::Idf => freq_in_doc as f32,
            TermWeight::LogEntropy => (1.0 + freq_in_doc as f32).log10(),
            TermWeight::Sqrt => (freq_in_doc as f32).sqrt(),
            TermWeight::Freq | TermWeight::LogFreq => {
                error!(
                    "termweight option '{}' has no local weighting; returning 1",
                    self.scheme
                );
                1.0
            }
        }
    }

    /// Global weight of a bare token, summed over every content field.
    /// A token occurring in several fields (say title and body)
    /// contributes additively.
    pub fn global_weight_for_text(&self, text: &str) -> f32 {
        self.content_fields
            .iter()
            .map(|field| self.global_weight(&Term::new(field.as_str(), text)))
            .sum()
    }
}

impl std::fmt::Debug for TermStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermStats")
            .field("scheme", &self.scheme)
            .field("content_fields", &self.content_fields)
            .field("cached_freqs", &self.term_freq.read().len())
            .field("cached_idfs", &self.term_idf.read().len())
            .field("cached_entropies", &self.term_entropy.read().len())
            .finish()
    }
}
