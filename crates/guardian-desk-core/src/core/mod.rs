// crates/guardian-desk-core/src/core/mod.rs
// ============================================================================
// Module: Guardian Desk Core Types
// Description: Canonical dashboard domain structures.
// Purpose: Provide stable, serializable types for documents, activities, and view state.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Guardian Desk core types define the document inventory, the activity feed,
//! derived scan statistics, and the dashboard view state. These types are the
//! canonical source of truth for any derived API surfaces (HTTP or CLI).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod activity;
pub mod display;
pub mod document;
pub mod identifiers;
pub mod seed;
pub mod state;
pub mod stats;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use activity::Activity;
pub use activity::ActivityKind;
pub use display::DEFAULT_DOCUMENT_ICON;
pub use display::activity_icon;
pub use display::document_icon;
pub use document::Document;
pub use document::DocumentStatus;
pub use document::Tag;
pub use identifiers::ActivityId;
pub use identifiers::DocumentId;
pub use seed::seed_activities;
pub use seed::seed_documents;
pub use state::DashboardTab;
pub use state::ViewAction;
pub use state::ViewState;
pub use state::reduce;
pub use stats::ScanStats;
