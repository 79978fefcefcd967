// crates/guardian-desk-core/src/core/activity.rs
// ============================================================================
// Module: Guardian Desk Activity Feed
// Description: Activity records shown in the dashboard feed.
// Purpose: Capture the static, immutable audit trail seeded at start.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! The activity feed is seeded once and immutable. `file` is a free-text
//! label, not a foreign key into the document inventory; no referential
//! integrity is enforced or required.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ActivityId;

// ============================================================================
// SECTION: Activity Kinds
// ============================================================================

/// Activity kinds recorded in the dashboard feed.
///
/// # Invariants
/// - Variants are stable for serialization and API matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A document was uploaded.
    Upload,
    /// PII was redacted from a document.
    Redact,
    /// A document was shared.
    Share,
    /// A document was downloaded.
    Download,
}

impl ActivityKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Redact => "redact",
            Self::Share => "share",
            Self::Download => "download",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Activities
// ============================================================================

/// Activity record in the dashboard feed.
///
/// # Invariants
/// - `file` is a free-text label, not a foreign key.
/// - `timestamp` is opaque display text recorded at seed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity identifier.
    pub id: ActivityId,
    /// Kind of action performed.
    pub kind: ActivityKind,
    /// Display name of the user who performed the action.
    pub user: String,
    /// Display name of the file acted upon.
    pub file: String,
    /// Display timestamp recorded at seed time.
    pub timestamp: String,
}
