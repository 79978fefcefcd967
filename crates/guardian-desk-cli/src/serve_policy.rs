// crates/guardian-desk-cli/src/serve_policy.rs
// ============================================================================
// Module: CLI Serve Policy
// Description: Loopback-only bind enforcement for the serve command.
// Purpose: Refuse network exposure unless the operator opts in explicitly.
// Dependencies: guardian-desk-config
// ============================================================================

//! ## Overview
//! The dashboard binds to loopback by default. Binding to a non-loopback
//! address requires an explicit opt-in via the CLI flag, the config file, or
//! the environment variable; anything else fails closed before a socket is
//! opened.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::net::SocketAddr;

use guardian_desk_config::GuardianDeskConfig;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable granting non-loopback bind opt-in.
pub const ALLOW_NON_LOOPBACK_ENV: &str = "GUARDIAN_DESK_ALLOW_NON_LOOPBACK";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Outcome of bind policy enforcement.
///
/// # Invariants
/// - `NonLoopback` is only produced after an explicit opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    /// Bind address is loopback; always permitted.
    Loopback(SocketAddr),
    /// Bind address is non-loopback and was explicitly permitted.
    NonLoopback(SocketAddr),
}

impl BindOutcome {
    /// Returns the bind address regardless of outcome.
    #[must_use]
    pub const fn addr(self) -> SocketAddr {
        match self {
            Self::Loopback(addr) | Self::NonLoopback(addr) => addr,
        }
    }
}

/// Serve policy errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ServePolicyError {
    /// Configuration was rejected while resolving the bind address.
    #[error("serve policy config error: {0}")]
    Config(String),
    /// Environment opt-in value was not a recognized boolean.
    #[error("invalid opt-in value: {0}")]
    InvalidOptIn(String),
    /// Non-loopback bind refused without explicit opt-in.
    #[error("non-loopback bind refused: {0}")]
    Refused(SocketAddr),
}

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Resolves the effective non-loopback opt-in from the flag and environment.
///
/// # Errors
///
/// Returns [`ServePolicyError::InvalidOptIn`] when the environment variable
/// holds an unrecognized value.
pub fn resolve_allow_non_loopback(flag: bool) -> Result<bool, ServePolicyError> {
    if flag {
        return Ok(true);
    }
    match env::var(ALLOW_NON_LOOPBACK_ENV) {
        Ok(value) => parse_opt_in(&value),
        Err(_) => Ok(false),
    }
}

/// Enforces the loopback-only policy against the configured bind address.
///
/// # Errors
///
/// Returns [`ServePolicyError`] when the bind address is invalid or a
/// non-loopback bind lacks opt-in.
pub fn enforce_local_only(
    config: &GuardianDeskConfig,
    allow_non_loopback: bool,
) -> Result<BindOutcome, ServePolicyError> {
    let addr = config
        .server
        .effective_bind()
        .map_err(|err| ServePolicyError::Config(err.to_string()))?;
    if addr.ip().is_loopback() {
        return Ok(BindOutcome::Loopback(addr));
    }
    if allow_non_loopback || config.server.allow_non_loopback {
        return Ok(BindOutcome::NonLoopback(addr));
    }
    Err(ServePolicyError::Refused(addr))
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses a boolean opt-in value from the environment.
fn parse_opt_in(value: &str) -> Result<bool, ServePolicyError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ServePolicyError::InvalidOptIn(value.to_string())),
    }
}
