// crates/guardian-desk-core/src/core/seed.rs
// ============================================================================
// Module: Guardian Desk Seed Data
// Description: Fixed initial documents and activities.
// Purpose: Provide the in-memory records used in place of a real data source.
// Dependencies: crate::core::{activity, document, identifiers}, time
// ============================================================================

//! ## Overview
//! Seed data is the fixed initial in-memory record set created at process
//! start. Documents and activities are never mutated or deleted afterwards
//! in this scope.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::num::NonZeroU64;

use time::macros::date;

use crate::core::activity::Activity;
use crate::core::activity::ActivityKind;
use crate::core::document::Document;
use crate::core::document::DocumentStatus;
use crate::core::document::Tag;
use crate::core::identifiers::ActivityId;
use crate::core::identifiers::DocumentId;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a non-zero identifier value from a static seed constant.
///
/// Seed identifiers are 1-based literals; a zero (which cannot occur in the
/// seed tables below) falls back to the minimum identifier.
fn nz(raw: u64) -> NonZeroU64 {
    NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN)
}

/// Builds the tag list for a seed document.
fn tags(labels: &[&str]) -> Vec<Tag> {
    labels.iter().copied().map(Tag::new).collect()
}

// ============================================================================
// SECTION: Seed Tables
// ============================================================================

/// Returns the fixed initial document inventory.
#[must_use]
pub fn seed_documents() -> Vec<Document> {
    vec![
        Document {
            id: DocumentId::new(nz(1)),
            name: "Employee Records.pdf".to_string(),
            status: DocumentStatus::Processed,
            pii_count: 15,
            last_scanned: Some(date!(2024 - 03 - 20)),
            tags: tags(&["hr", "confidential", "employee"]),
        },
        Document {
            id: DocumentId::new(nz(2)),
            name: "Customer Data.xlsx".to_string(),
            status: DocumentStatus::Pending,
            pii_count: 0,
            last_scanned: None,
            tags: tags(&["customers", "sales"]),
        },
        Document {
            id: DocumentId::new(nz(3)),
            name: "Medical Records.doc".to_string(),
            status: DocumentStatus::Flagged,
            pii_count: 47,
            last_scanned: Some(date!(2024 - 03 - 19)),
            tags: tags(&["medical", "confidential"]),
        },
    ]
}

/// Returns the fixed initial activity feed.
#[must_use]
pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: ActivityId::new(nz(1)),
            kind: ActivityKind::Upload,
            user: "Admin".to_string(),
            file: "Financial Report.pdf".to_string(),
            timestamp: "2024-03-21 14:30".to_string(),
        },
        Activity {
            id: ActivityId::new(nz(2)),
            kind: ActivityKind::Redact,
            user: "John".to_string(),
            file: "Customer Data.xlsx".to_string(),
            timestamp: "2024-03-21 13:15".to_string(),
        },
        Activity {
            id: ActivityId::new(nz(3)),
            kind: ActivityKind::Share,
            user: "Sarah".to_string(),
            file: "Employee Records.pdf".to_string(),
            timestamp: "2024-03-21 11:45".to_string(),
        },
        Activity {
            id: ActivityId::new(nz(4)),
            kind: ActivityKind::Download,
            user: "Mike".to_string(),
            file: "Medical Records.doc".to_string(),
            timestamp: "2024-03-21 10:20".to_string(),
        },
    ]
}
