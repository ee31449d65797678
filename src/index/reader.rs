//! The index reader contract and its core value types.

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A term identity: an ordered (field, text) pair.
///
/// Two terms with the same text in different fields are distinct
/// entities, and all cached statistics are keyed by the full pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    field: String,
    text: String,
}

impl Term {
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Self {
        Term {
            field: field.into(),
            text: text.into(),
        }
    }

    /// The field this term belongs to.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The term text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.text)
    }
}

/// One document's occurrence record for a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    /// Internal document id.
    pub doc_id: u64,
    /// Number of occurrences of the term in this document.
    pub freq: u64,
}

/// A stored document handle with named-field string accessors.
#[derive(Debug, Clone, Default)]
pub struct StoredDocument {
    fields: AHashMap<String, String>,
}

impl StoredDocument {
    pub fn new() -> Self {
        StoredDocument::default()
    }

    /// Add a stored field value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The stored value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Read-only view over an inverted index.
///
/// The engine acquires one reader at construction and holds it for its
/// whole lifetime. The underlying index is assumed to be a frozen
/// snapshot; if it changes while the engine is alive, results are
/// undefined.
pub trait IndexReader: Send + Sync {
    /// Number of documents in the index.
    fn num_docs(&self) -> u64;

    /// Number of documents containing `term` at least once.
    fn doc_freq(&self, term: &Term) -> Result<u64>;

    /// Total occurrence count of `term` across the whole corpus.
    ///
    /// May return a negative sentinel when the index configuration
    /// cannot answer the query; callers normalize it to zero.
    fn total_term_freq(&self, term: &Term) -> Result<i64>;

    /// Per-document postings for `term`, empty when the term is absent.
    fn postings(&self, term: &Term) -> Result<Vec<Posting>>;

    /// Names of the fields present in the index, in index order.
    fn field_names(&self) -> Vec<String>;

    /// All terms indexed under `field`, or `None` when the field does
    /// not exist in the index.
    fn terms(&self, field: &str) -> Result<Option<Vec<String>>>;

    /// The stored document for `doc_id`.
    fn document(&self, doc_id: u64) -> Result<StoredDocument>;
}
