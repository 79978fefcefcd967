// crates/guardian-desk-cli/tests/serve_policy.rs
// ============================================================================
// Module: Serve Policy Tests
// Description: Tests for loopback-only bind enforcement.
// Purpose: Ensure network exposure requires an explicit opt-in.
// Dependencies: guardian-desk-cli, guardian-desk-config
// ============================================================================

//! ## Overview
//! Exercises the bind policy against loopback and non-loopback addresses,
//! with and without the explicit opt-in paths.

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

use guardian_desk_cli::serve_policy::BindOutcome;
use guardian_desk_cli::serve_policy::ServePolicyError;
use guardian_desk_cli::serve_policy::enforce_local_only;
use guardian_desk_config::GuardianDeskConfig;
use guardian_desk_config::LimitsConfig;
use guardian_desk_config::ServerConfig;

/// Builds a config with the given bind and config-file opt-in.
fn config_with_bind(bind: Option<&str>, allow_non_loopback: bool) -> GuardianDeskConfig {
    GuardianDeskConfig {
        server: ServerConfig {
            bind: bind.map(str::to_string),
            allow_non_loopback,
        },
        limits: LimitsConfig::default(),
    }
}

/// The default loopback bind is always permitted.
#[test]
fn loopback_bind_is_permitted_without_opt_in() {
    let config = config_with_bind(None, false);
    match enforce_local_only(&config, false) {
        Ok(BindOutcome::Loopback(addr)) => assert!(addr.ip().is_loopback()),
        other => panic!("expected loopback outcome, got {other:?}"),
    }
}

/// A non-loopback bind without opt-in fails closed.
#[test]
fn non_loopback_bind_is_refused_without_opt_in() {
    let config = config_with_bind(Some("0.0.0.0:8471"), false);
    match enforce_local_only(&config, false) {
        Err(ServePolicyError::Refused(addr)) => {
            assert_eq!(addr.to_string(), "0.0.0.0:8471");
        }
        other => panic!("expected refusal, got {other:?}"),
    }
}

/// The CLI flag grants a non-loopback bind.
#[test]
fn cli_flag_grants_non_loopback_bind() {
    let config = config_with_bind(Some("0.0.0.0:8471"), false);
    match enforce_local_only(&config, true) {
        Ok(BindOutcome::NonLoopback(addr)) => assert!(!addr.ip().is_loopback()),
        other => panic!("expected non-loopback outcome, got {other:?}"),
    }
}

/// The config-file opt-in grants a non-loopback bind.
#[test]
fn config_opt_in_grants_non_loopback_bind() {
    let config = config_with_bind(Some("0.0.0.0:8471"), true);
    match enforce_local_only(&config, false) {
        Ok(BindOutcome::NonLoopback(_)) => (),
        other => panic!("expected non-loopback outcome, got {other:?}"),
    }
}

/// A malformed bind surfaces as a config error, not a panic.
#[test]
fn malformed_bind_surfaces_a_config_error() {
    let config = config_with_bind(Some("not-an-address"), false);
    match enforce_local_only(&config, false) {
        Err(ServePolicyError::Config(message)) => {
            assert!(message.contains("server.bind"));
        }
        other => panic!("expected config error, got {other:?}"),
    }
}
