// crates/guardian-desk-core/src/core/stats.rs
// ============================================================================
// Module: Guardian Desk Scan Statistics
// Description: Aggregate counters derived from the document inventory.
// Purpose: Provide the four dashboard stat cards as a pure derivation.
// Dependencies: crate::core::document, serde
// ============================================================================

//! ## Overview
//! Statistics are a pure function of the document set and are recomputed on
//! every read. The original dashboard cached them once at startup, which
//! would go stale under mutation; deriving on read keeps the counters
//! correct if the inventory ever stops being static.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::document::Document;

// ============================================================================
// SECTION: Scan Statistics
// ============================================================================

/// Aggregate counters for the dashboard stat cards.
///
/// # Invariants
/// - All counters are derived from the same document snapshot.
/// - `documents_with_pii <= total_documents` and `recent_alerts <= total_documents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total number of documents in the inventory.
    pub total_documents: u64,
    /// Number of documents with at least one PII finding.
    pub documents_with_pii: u64,
    /// Sum of PII findings across all documents.
    pub total_pii_found: u64,
    /// Number of documents currently flagged for review.
    pub recent_alerts: u64,
}

impl ScanStats {
    /// Derives the aggregate counters from a document snapshot.
    #[must_use]
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut stats = Self {
            total_documents: 0,
            documents_with_pii: 0,
            total_pii_found: 0,
            recent_alerts: 0,
        };
        for document in documents {
            stats.total_documents = stats.total_documents.saturating_add(1);
            if document.has_pii() {
                stats.documents_with_pii = stats.documents_with_pii.saturating_add(1);
            }
            stats.total_pii_found = stats.total_pii_found.saturating_add(document.pii_count);
            if document.is_flagged() {
                stats.recent_alerts = stats.recent_alerts.saturating_add(1);
            }
        }
        stats
    }
}
