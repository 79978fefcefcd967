// crates/guardian-desk-core/src/core/document.rs
// ============================================================================
// Module: Guardian Desk Document Model
// Description: Document records, scan status, and free-text tags.
// Purpose: Capture the scanned-document inventory backing the dashboard.
// Dependencies: crate::core::identifiers, serde, time
// ============================================================================

//! ## Overview
//! Documents are seeded at process start and never mutated or deleted in this
//! scope; upload, redact, share, and download remain presentational actions
//! with no wired behavior. Tag matching is performed by the filter rule in
//! [`crate::runtime::filter`], never by the types themselves.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use time::Date;

use crate::core::identifiers::DocumentId;

// ============================================================================
// SECTION: Scan Status
// ============================================================================

/// Scan lifecycle status for a document.
///
/// # Invariants
/// - Variants are stable for serialization and API matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Document has been scanned and processed.
    Processed,
    /// Document is awaiting its first scan.
    Pending,
    /// Document was flagged during scanning and needs review.
    Flagged,
}

impl DocumentStatus {
    /// Returns a stable label for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Pending => "pending",
            Self::Flagged => "flagged",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Tags
// ============================================================================

/// Free-text label attached to a document for categorical search.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Creates a new tag.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// SECTION: Documents
// ============================================================================

/// Scanned-document record in the dashboard inventory.
///
/// # Invariants
/// - `pii_count` is the non-negative number of PII findings from the last scan.
/// - `last_scanned` is `None` for documents that have never been scanned.
/// - `tags` preserve seed order; duplicates are not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier.
    pub id: DocumentId,
    /// Document file name, including extension.
    pub name: String,
    /// Scan lifecycle status.
    pub status: DocumentStatus,
    /// Number of PII findings from the last scan.
    pub pii_count: u64,
    /// Calendar date of the last completed scan.
    pub last_scanned: Option<Date>,
    /// Free-text labels used for categorical search.
    pub tags: Vec<Tag>,
}

impl Document {
    /// Returns true when the last scan found at least one PII item.
    #[must_use]
    pub const fn has_pii(&self) -> bool {
        self.pii_count > 0
    }

    /// Returns true when the document is flagged for review.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.status == DocumentStatus::Flagged
    }
}
