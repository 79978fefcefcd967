// crates/guardian-desk-config/src/lib.rs
// ============================================================================
// Module: Guardian Desk Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for guardian-desk.toml semantics.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! `guardian-desk-config` defines the canonical configuration model for
//! Guardian Desk. It provides strict, fail-closed validation for the server
//! bind address and the search-term limits shared by the HTTP and CLI
//! surfaces. Config inputs are untrusted.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
