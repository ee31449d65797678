//! # Crocus
//!
//! Corpus term statistics and filtering for vector-space model
//! construction.
//!
//! Given read access to an inverted index, crocus computes and caches
//! per-term statistics (global frequency, document frequency, IDF,
//! log-entropy), derives term weights under a selectable weighting
//! scheme, and decides whether a term should participate in downstream
//! vector construction.
//!
//! ## Features
//!
//! - Concurrent, append-only statistics caches over a frozen index
//! - Six term-weighting schemes, at global and per-document granularity
//! - Stoplist/startlist, character, numeric, and frequency filtering
//! - Narrow read-only index contract with an in-memory implementation
//!
//! The engine never builds or mutates an index, performs no
//! tokenization, and keeps no state across process runs.

// Core modules
pub mod config;
mod engine;
mod error;
pub mod index;
pub mod lexicon;
pub mod stats;
pub mod weight;

// Re-exports for the public API
pub use config::{EngineConfig, EngineConfigBuilder};
pub use engine::TermStatsEngine;
pub use error::{CrocusError, Result};
pub use index::memory::{IndexedDocument, MemoryIndex, MemoryIndexBuilder};
pub use index::{IndexReader, Posting, StoredDocument, Term};
pub use lexicon::Lexicon;
pub use stats::TermStats;
pub use weight::TermWeight;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
