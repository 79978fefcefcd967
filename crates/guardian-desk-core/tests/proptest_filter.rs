// crates/guardian-desk-core/tests/proptest_filter.rs
// ============================================================================
// Module: Document Filter Property-Based Tests
// Description: Property tests for filter stability and totality.
// Purpose: Detect panics and order/idempotence violations across wide inputs.
// ============================================================================

//! Property-based tests for filter invariants: idempotence, order
//! preservation, subset selection, and identity on empty terms.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use guardian_desk_core::Document;
use guardian_desk_core::DocumentId;
use guardian_desk_core::DocumentStatus;
use guardian_desk_core::SearchQuery;
use guardian_desk_core::Tag;
use guardian_desk_core::filter_documents;
use proptest::prelude::*;

/// Strategy for scan statuses.
fn status_strategy() -> impl Strategy<Value = DocumentStatus> {
    prop_oneof![
        Just(DocumentStatus::Processed),
        Just(DocumentStatus::Pending),
        Just(DocumentStatus::Flagged),
    ]
}

/// Strategy for documents with short printable names and tags.
fn document_strategy() -> impl Strategy<Value = Document> {
    (
        1_u64 ..= u64::MAX,
        "[ -~]{0,16}",
        status_strategy(),
        0_u64 .. 1_000,
        prop::collection::vec("[a-zA-Z]{0,8}", 0 .. 4),
    )
        .prop_map(|(raw_id, name, status, pii_count, tags)| Document {
            id: DocumentId::from_raw(raw_id).unwrap_or_else(|| {
                DocumentId::new(std::num::NonZeroU64::MIN)
            }),
            name,
            status,
            pii_count,
            last_scanned: None,
            tags: tags.into_iter().map(Tag::new).collect(),
        })
}

/// Strategy for search terms, biased toward empty and short ASCII.
fn term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-zA-Z .]{1,8}"]
}

proptest! {
    #[test]
    fn filter_is_idempotent(
        documents in prop::collection::vec(document_strategy(), 0 .. 16),
        name_term in term_strategy(),
        tag_term in term_strategy(),
    ) {
        let query = SearchQuery::new(name_term, tag_term);
        let once: Vec<Document> =
            filter_documents(&documents, &query).into_iter().cloned().collect();
        let twice: Vec<Document> =
            filter_documents(&once, &query).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_preserves_relative_order(
        documents in prop::collection::vec(document_strategy(), 0 .. 16),
        name_term in term_strategy(),
        tag_term in term_strategy(),
    ) {
        let query = SearchQuery::new(name_term, tag_term);
        let selected = filter_documents(&documents, &query);
        let mut cursor = documents.iter();
        for kept in selected {
            // Each selected document must appear later in the original
            // sequence than the previously selected one.
            prop_assert!(cursor.any(|original| std::ptr::eq(original, kept)));
        }
    }

    #[test]
    fn filter_selects_a_subset(
        documents in prop::collection::vec(document_strategy(), 0 .. 16),
        name_term in term_strategy(),
        tag_term in term_strategy(),
    ) {
        let query = SearchQuery::new(name_term, tag_term);
        let selected = filter_documents(&documents, &query);
        prop_assert!(selected.len() <= documents.len());
        for kept in selected {
            prop_assert!(documents.iter().any(|original| original == kept));
        }
    }

    #[test]
    fn empty_terms_are_the_identity(
        documents in prop::collection::vec(document_strategy(), 0 .. 16),
    ) {
        let selected = filter_documents(&documents, &SearchQuery::default());
        prop_assert_eq!(selected.len(), documents.len());
        for (kept, original) in selected.iter().zip(documents.iter()) {
            prop_assert_eq!(*kept, original);
        }
    }

    #[test]
    fn nonempty_name_term_ignores_tag_term(
        documents in prop::collection::vec(document_strategy(), 0 .. 16),
        name_term in "[a-zA-Z .]{1,8}",
        tag_term in term_strategy(),
    ) {
        let with_tag = SearchQuery::new(name_term.clone(), tag_term);
        let without_tag = SearchQuery::new(name_term, "");
        prop_assert_eq!(
            filter_documents(&documents, &with_tag),
            filter_documents(&documents, &without_tag)
        );
    }
}
