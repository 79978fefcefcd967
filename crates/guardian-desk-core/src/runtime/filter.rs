// crates/guardian-desk-core/src/runtime/filter.rs
// ============================================================================
// Module: Guardian Desk Document Filter
// Description: Search-term evaluation over the document inventory.
// Purpose: Reproduce the dashboard's exact selection policy for search terms.
// Dependencies: crate::core::document, serde
// ============================================================================

//! ## Overview
//! The filter is a pure, total, stable selection over the document sequence:
//! it preserves relative order, never sorts, and has no error paths. An
//! empty result set is a normal outcome.
//!
//! The selection policy is a priority order, not a combination of both
//! terms: a non-empty name term selects on name containment alone and the
//! tag term is ignored entirely, even when it is also non-empty. This
//! matches the shipped dashboard behavior; most filter UIs AND all active
//! filters, so product owners should treat the precedence as a likely UX
//! defect rather than an intentional choice.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::document::Document;

// ============================================================================
// SECTION: Search Query
// ============================================================================

/// Search terms entered in the dashboard's two search fields.
///
/// # Invariants
/// - Terms are opaque text; an empty term means "no constraint", not
///   "matches everywhere".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Name-search term, matched against the document name.
    pub name_term: String,
    /// Tag-search term, matched against each document tag.
    pub tag_term: String,
}

impl SearchQuery {
    /// Creates a query from the two search terms.
    #[must_use]
    pub fn new(name_term: impl Into<String>, tag_term: impl Into<String>) -> Self {
        Self {
            name_term: name_term.into(),
            tag_term: tag_term.into(),
        }
    }

    /// Returns true when both terms are empty and the query selects everything.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.name_term.is_empty() && self.tag_term.is_empty()
    }

    /// Evaluates the selection policy for a single document.
    ///
    /// Priority order: a non-empty name term decides on name containment
    /// alone; otherwise a non-empty tag term decides on tag containment;
    /// otherwise every document is selected.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        if !self.name_term.is_empty() {
            return contains_ignore_case(&document.name, &self.name_term);
        }
        if !self.tag_term.is_empty() {
            return document
                .tags
                .iter()
                .any(|tag| contains_ignore_case(tag.as_str(), &self.tag_term));
        }
        true
    }
}

// ============================================================================
// SECTION: Filter
// ============================================================================

/// Filters documents by the query, preserving original relative order.
#[must_use]
pub fn filter_documents<'a>(documents: &'a [Document], query: &SearchQuery) -> Vec<&'a Document> {
    documents.iter().filter(|document| query.matches(document)).collect()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Case-insensitive substring containment (both sides lower-cased).
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
