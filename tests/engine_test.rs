use std::sync::Arc;

use crocus::{
    CrocusError, EngineConfig, IndexedDocument, MemoryIndex, TermStatsEngine, TermWeight,
};

fn index_with_ids() -> Arc<MemoryIndex> {
    Arc::new(
        MemoryIndex::builder()
            .add_document(
                IndexedDocument::new()
                    .add_tokens("body", ["rust", "search"])
                    .add_stored("docid", "doc-a"),
            )
            .add_document(
                IndexedDocument::new()
                    .add_tokens("body", ["vector", "model"])
                    .add_stored("docid", "doc-b"),
            )
            .build(),
    )
}

#[test]
fn test_construction_requires_index_path() {
    let config = EngineConfig::builder().content_fields(["body"]).build();
    let err = TermStatsEngine::new(index_with_ids(), config).unwrap_err();
    assert!(matches!(err, CrocusError::InvalidConfig(_)));
}

#[test]
fn test_construction_fails_on_missing_stoplist() {
    let config = EngineConfig::builder()
        .index_path("/tmp/index")
        .content_fields(["body"])
        .stoplist_file("/nonexistent/stopwords.txt")
        .build();
    let err = TermStatsEngine::new(index_with_ids(), config).unwrap_err();
    assert!(matches!(err, CrocusError::WordList { .. }));
}

#[test]
fn test_construction_fails_on_missing_startlist() {
    let config = EngineConfig::builder()
        .index_path("/tmp/index")
        .content_fields(["body"])
        .startlist_file("/nonexistent/startwords.txt")
        .build();
    assert!(TermStatsEngine::new(index_with_ids(), config).is_err());
}

#[test]
fn test_terms_for_field() {
    let config = EngineConfig::builder()
        .index_path("/tmp/index")
        .content_fields(["body"])
        .build();
    let engine = TermStatsEngine::new(index_with_ids(), config).unwrap();

    let terms = engine.terms_for_field("body").unwrap();
    assert_eq!(terms, vec!["model", "rust", "search", "vector"]);
}

#[test]
fn test_unknown_field_error_names_known_fields() {
    let config = EngineConfig::builder()
        .index_path("/tmp/index")
        .content_fields(["body"])
        .build();
    let engine = TermStatsEngine::new(index_with_ids(), config).unwrap();

    let err = engine.terms_for_field("headline").unwrap_err();
    assert!(matches!(err, CrocusError::FieldNotFound { .. }));
    let message = err.to_string();
    assert!(message.contains("headline"));
    assert!(message.contains("body"));
    assert!(message.contains("docid"));
}

#[test]
fn test_external_doc_id_defaults_to_internal_id() {
    let config = EngineConfig::builder()
        .index_path("/tmp/index")
        .content_fields(["body"])
        .build();
    let engine = TermStatsEngine::new(index_with_ids(), config).unwrap();

    assert_eq!(engine.external_doc_id(1).unwrap(), "1");
}

#[test]
fn test_external_doc_id_from_stored_field() {
    let config = EngineConfig::builder()
        .index_path("/tmp/index")
        .content_fields(["body"])
        .doc_id_field("docid")
        .build();
    let engine = TermStatsEngine::new(index_with_ids(), config).unwrap();

    assert_eq!(engine.external_doc_id(0).unwrap(), "doc-a");
    assert_eq!(engine.external_doc_id(1).unwrap(), "doc-b");
}

#[test]
fn test_external_doc_id_missing_field_is_an_error() {
    let config = EngineConfig::builder()
        .index_path("/tmp/index")
        .content_fields(["body"])
        .doc_id_field("uuid")
        .build();
    let engine = TermStatsEngine::new(index_with_ids(), config).unwrap();

    assert!(engine.external_doc_id(0).is_err());
    // An out-of-range internal id fails before the field lookup.
    assert!(engine.external_doc_id(99).is_err());
}

#[test]
fn test_document_accessor() {
    let config = EngineConfig::builder()
        .index_path("/tmp/index")
        .content_fields(["body"])
        .build();
    let engine = TermStatsEngine::new(index_with_ids(), config).unwrap();

    assert_eq!(engine.document(0).unwrap().get("docid"), Some("doc-a"));
    assert_eq!(engine.field_names(), vec!["body", "docid"]);
}

#[test]
fn test_weight_scheme_survives_config_serialization() {
    let config = EngineConfig::builder()
        .index_path("/tmp/index")
        .content_fields(["body"])
        .term_weight(TermWeight::Sqrt)
        .build();
    let json = serde_json::to_string(&config).unwrap();
    let config: EngineConfig = serde_json::from_str(&json).unwrap();

    let engine = TermStatsEngine::new(index_with_ids(), config).unwrap();
    assert_eq!(engine.stats().scheme(), TermWeight::Sqrt);
}

#[test]
fn test_unrecognized_weight_scheme_degrades_to_weight_one() {
    // Scheme names from untrusted configuration degrade instead of
    // aborting: the fallback is no weighting at all.
    let scheme = TermWeight::parse_or_default("quadratic");
    assert_eq!(scheme, TermWeight::None);

    let config = EngineConfig::builder()
        .index_path("/tmp/index")
        .content_fields(["body"])
        .term_weight(scheme)
        .build();
    let engine = TermStatsEngine::new(index_with_ids(), config).unwrap();
    assert_eq!(
        engine
            .stats()
            .global_weight(&crocus::Term::new("body", "rust")),
        1.0
    );
}
