// crates/guardian-desk-core/src/core/display.rs
// ============================================================================
// Module: Guardian Desk Display Derivations
// Description: Deterministic icon lookups for documents and activities.
// Purpose: Centralize presentational metadata so API surfaces agree on categories.
// Dependencies: crate::core::activity
// ============================================================================

//! ## Overview
//! Icon selection is a pure lookup from a fixed finite mapping with a default
//! fallback. It carries no invariants beyond being a deterministic function
//! of the type tag or file suffix.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::activity::ActivityKind;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fallback icon for documents with no recognized suffix.
pub const DEFAULT_DOCUMENT_ICON: &str = "description";

// ============================================================================
// SECTION: Lookups
// ============================================================================

/// Returns the icon name for a document based on its file-name suffix.
#[must_use]
pub fn document_icon(name: &str) -> &'static str {
    if name.ends_with(".pdf") {
        "picture_as_pdf"
    } else if name.ends_with(".xlsx") {
        "table_chart"
    } else {
        DEFAULT_DOCUMENT_ICON
    }
}

/// Returns the icon name for an activity kind.
#[must_use]
pub const fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Upload => "upload_file",
        ActivityKind::Redact => "security",
        ActivityKind::Share => "share",
        ActivityKind::Download => "download",
    }
}
