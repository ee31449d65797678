//! Read-only inverted-index collaborator interface.
//!
//! The engine does not build or mutate an index; it consumes one
//! through the narrow [`IndexReader`] contract defined here. The
//! [`memory`] module provides an in-memory implementation over
//! pre-tokenized documents.

pub mod memory;
mod reader;

pub use reader::{IndexReader, Posting, StoredDocument, Term};
