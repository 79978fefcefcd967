// crates/guardian-desk-cli/src/lib.rs
// ============================================================================
// Module: Guardian Desk CLI Library
// Description: Shared CLI helpers for localization and serve policy.
// Purpose: Keep user-facing strings and bind policy testable outside the binary.
// Dependencies: guardian-desk-config
// ============================================================================

//! ## Overview
//! The CLI library hosts the message catalog and the loopback-only serve
//! policy so both the binary and the test suites exercise the same logic.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;
pub mod serve_policy;
