// crates/guardian-desk-cli/tests/i18n.rs
// ============================================================================
// Module: CLI Localization Tests
// Description: Tests for catalog lookup and placeholder substitution.
// Purpose: Keep user-facing messaging stable and panic-free.
// Dependencies: guardian-desk-cli
// ============================================================================

//! ## Overview
//! Validates catalog lookups, unknown-key fallback, and the `t!` macro's
//! named-argument substitution.

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

use guardian_desk_cli::i18n::MessageArg;
use guardian_desk_cli::i18n::translate;
use guardian_desk_cli::t;

/// Known keys resolve to their catalog templates.
#[test]
fn known_keys_resolve_from_the_catalog() {
    assert_eq!(translate("config.validate.ok", Vec::new()), "Config valid.");
    assert_eq!(translate("output.stream.stdout", Vec::new()), "stdout");
}

/// Unknown keys fall back to the key itself instead of panicking.
#[test]
fn unknown_keys_fall_back_to_the_key() {
    assert_eq!(translate("no.such.key", Vec::new()), "no.such.key");
}

/// Placeholders substitute in deterministic order.
#[test]
fn placeholders_substitute_named_arguments() {
    let message = translate("main.version", vec![MessageArg::new("version", "1.2.3")]);
    assert_eq!(message, "guardian-desk 1.2.3");
}

/// The macro forwards named arguments to the catalog template.
#[test]
fn t_macro_substitutes_named_arguments() {
    let message = t!("documents.term_too_long", limit = 256);
    assert_eq!(message, "Search term exceeds 256 characters.");

    let message = t!(
        "documents.entry",
        name = "Employee Records.pdf",
        status = "processed",
        pii = 15,
        icon = "picture_as_pdf"
    );
    assert_eq!(message, "Employee Records.pdf [processed] pii=15 icon=picture_as_pdf");
}
