// crates/guardian-desk-core/tests/stats.rs
// ============================================================================
// Module: Scan Statistics Tests
// Description: Tests for the derived dashboard counters.
// Purpose: Ensure statistics are a pure derivation of the document snapshot.
// Dependencies: guardian-desk-core, serde_json
// ============================================================================

//! ## Overview
//! Validates the four stat-card counters against the seed inventory and edge
//! snapshots, and pins the serialized wire form consumed by API surfaces.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

use guardian_desk_core::Dashboard;
use guardian_desk_core::Document;
use guardian_desk_core::ScanStats;
use guardian_desk_core::seed_documents;
use serde_json::json;

/// Seed inventory yields the original dashboard's stat-card values.
#[test]
fn seed_inventory_counters_match_the_dashboard() {
    let stats = ScanStats::from_documents(&seed_documents());
    assert_eq!(stats.total_documents, 3);
    assert_eq!(stats.documents_with_pii, 2);
    assert_eq!(stats.total_pii_found, 62);
    assert_eq!(stats.recent_alerts, 1);
}

/// An empty inventory derives all-zero counters.
#[test]
fn empty_inventory_counters_are_zero() {
    let documents: Vec<Document> = Vec::new();
    let stats = ScanStats::from_documents(&documents);
    assert_eq!(stats.total_documents, 0);
    assert_eq!(stats.documents_with_pii, 0);
    assert_eq!(stats.total_pii_found, 0);
    assert_eq!(stats.recent_alerts, 0);
}

/// Statistics derive fresh on every read instead of caching a snapshot.
#[test]
fn dashboard_stats_recompute_per_read() {
    let dashboard = Dashboard::from_seed();
    assert_eq!(dashboard.stats(), dashboard.stats());
    assert_eq!(dashboard.stats(), ScanStats::from_documents(&seed_documents()));
}

/// Counters serialize with stable snake_case field names.
#[test]
fn stats_wire_form_is_stable() {
    let stats = ScanStats::from_documents(&seed_documents());
    let value = serde_json::to_value(stats).expect("serialize stats");
    assert_eq!(
        value,
        json!({
            "total_documents": 3,
            "documents_with_pii": 2,
            "total_pii_found": 62,
            "recent_alerts": 1,
        })
    );
}
