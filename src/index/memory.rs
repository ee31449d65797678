//! In-memory index reader for tests and small frozen corpora.
//!
//! Documents are supplied pre-tokenized; this module performs no
//! tokenization of its own.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::error::{CrocusError, Result};
use crate::index::reader::{IndexReader, Posting, StoredDocument, Term};

/// A pre-tokenized document: token lists per field, plus stored values.
#[derive(Debug, Clone, Default)]
pub struct IndexedDocument {
    tokens: Vec<(String, Vec<String>)>,
    stored: Vec<(String, String)>,
}

impl IndexedDocument {
    pub fn new() -> Self {
        IndexedDocument::default()
    }

    /// Add the tokens of `field`. Duplicate tokens raise the
    /// within-document frequency.
    pub fn add_tokens(
        mut self,
        field: impl Into<String>,
        tokens: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.tokens
            .push((field.into(), tokens.into_iter().map(Into::into).collect()));
        self
    }

    /// Add a stored (non-inverted) field value.
    pub fn add_stored(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.stored.push((field.into(), value.into()));
        self
    }
}

/// Builder accumulating documents for a [`MemoryIndex`].
///
/// Document ids are assigned in insertion order, starting at 0.
#[derive(Debug, Default)]
pub struct MemoryIndexBuilder {
    docs: Vec<IndexedDocument>,
}

impl MemoryIndexBuilder {
    pub fn new() -> Self {
        MemoryIndexBuilder::default()
    }

    pub fn add_document(mut self, doc: IndexedDocument) -> Self {
        self.docs.push(doc);
        self
    }

    pub fn build(self) -> MemoryIndex {
        let mut field_order: Vec<String> = Vec::new();
        let mut postings: AHashMap<String, BTreeMap<String, Vec<Posting>>> = AHashMap::new();
        let mut docs: AHashMap<u64, StoredDocument> = AHashMap::new();

        for (doc_id, doc) in self.docs.into_iter().enumerate() {
            let doc_id = doc_id as u64;

            for (field, tokens) in doc.tokens {
                if !field_order.contains(&field) {
                    field_order.push(field.clone());
                }
                let mut counts: BTreeMap<String, u64> = BTreeMap::new();
                for token in tokens {
                    *counts.entry(token).or_insert(0) += 1;
                }
                let terms = postings.entry(field).or_default();
                for (token, freq) in counts {
                    terms.entry(token).or_default().push(Posting { doc_id, freq });
                }
            }

            let mut stored = StoredDocument::new();
            for (field, value) in doc.stored {
                if !field_order.contains(&field) {
                    field_order.push(field.clone());
                }
                stored = stored.with_field(field, value);
            }
            docs.insert(doc_id, stored);
        }

        MemoryIndex {
            num_docs: docs.len() as u64,
            postings,
            docs,
            field_order,
        }
    }
}

/// An immutable in-memory inverted index.
#[derive(Debug)]
pub struct MemoryIndex {
    num_docs: u64,
    /// field name -> term text -> postings ordered by document id.
    postings: AHashMap<String, BTreeMap<String, Vec<Posting>>>,
    docs: AHashMap<u64, StoredDocument>,
    field_order: Vec<String>,
}

impl MemoryIndex {
    pub fn builder() -> MemoryIndexBuilder {
        MemoryIndexBuilder::new()
    }

    fn term_postings(&self, term: &Term) -> Option<&Vec<Posting>> {
        self.postings.get(term.field())?.get(term.text())
    }
}

impl IndexReader for MemoryIndex {
    fn num_docs(&self) -> u64 {
        self.num_docs
    }

    fn doc_freq(&self, term: &Term) -> Result<u64> {
        Ok(self.term_postings(term).map_or(0, |p| p.len() as u64))
    }

    fn total_term_freq(&self, term: &Term) -> Result<i64> {
        Ok(self
            .term_postings(term)
            .map_or(0, |p| p.iter().map(|p| p.freq).sum::<u64>() as i64))
    }

    fn postings(&self, term: &Term) -> Result<Vec<Posting>> {
        Ok(self.term_postings(term).cloned().unwrap_or_default())
    }

    fn field_names(&self) -> Vec<String> {
        self.field_order.clone()
    }

    fn terms(&self, field: &str) -> Result<Option<Vec<String>>> {
        if let Some(terms) = self.postings.get(field) {
            return Ok(Some(terms.keys().cloned().collect()));
        }
        // A stored-only field exists but indexes no terms.
        if self.field_order.iter().any(|f| f == field) {
            return Ok(Some(Vec::new()));
        }
        Ok(None)
    }

    fn document(&self, doc_id: u64) -> Result<StoredDocument> {
        self.docs
            .get(&doc_id)
            .cloned()
            .ok_or_else(|| CrocusError::document(format!("no stored document with id {doc_id}")))
    }
}
