// crates/guardian-desk-core/src/runtime/dashboard.rs
// ============================================================================
// Module: Guardian Desk Dashboard Aggregate
// Description: Seeded, immutable record sets behind the dashboard reads.
// Purpose: Answer document, statistics, and activity queries from one snapshot.
// Dependencies: crate::core, crate::runtime::filter
// ============================================================================

//! ## Overview
//! The dashboard aggregate owns the seeded document inventory and activity
//! feed and answers the three read operations. Reads are synchronous and
//! the record sets never mutate after construction, so the aggregate can be
//! shared across threads without locking.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::activity::Activity;
use crate::core::document::Document;
use crate::core::seed::seed_activities;
use crate::core::seed::seed_documents;
use crate::core::stats::ScanStats;
use crate::runtime::filter::SearchQuery;
use crate::runtime::filter::filter_documents;

// ============================================================================
// SECTION: Dashboard
// ============================================================================

/// Immutable dashboard data answering document, stats, and activity reads.
///
/// # Invariants
/// - Record sets are fixed at construction; every read sees the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    /// Document inventory in seed order.
    documents: Vec<Document>,
    /// Activity feed in seed order.
    activities: Vec<Activity>,
}

impl Dashboard {
    /// Builds a dashboard over explicit record sets.
    #[must_use]
    pub const fn new(documents: Vec<Document>, activities: Vec<Activity>) -> Self {
        Self {
            documents,
            activities,
        }
    }

    /// Builds a dashboard over the fixed seed data.
    #[must_use]
    pub fn from_seed() -> Self {
        Self::new(seed_documents(), seed_activities())
    }

    /// Returns the documents selected by the query, in inventory order.
    #[must_use]
    pub fn documents(&self, query: &SearchQuery) -> Vec<&Document> {
        filter_documents(&self.documents, query)
    }

    /// Derives the aggregate scan statistics from the current inventory.
    #[must_use]
    pub fn stats(&self) -> ScanStats {
        ScanStats::from_documents(&self.documents)
    }

    /// Returns the activity feed in seed order.
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }
}
