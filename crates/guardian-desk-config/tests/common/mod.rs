// crates/guardian-desk-config/tests/common/mod.rs
// ============================================================================
// Module: Config Test Fixtures
// Description: Shared helpers for config validation suites.
// Purpose: Build minimal configs from TOML the way deployments do.
// ============================================================================

//! Shared fixtures for the config test suites.

use guardian_desk_config::ConfigError;
use guardian_desk_config::GuardianDeskConfig;

/// Parses a minimal (empty) TOML document into a config.
///
/// # Errors
///
/// Returns [`ConfigError`] when parsing fails.
pub fn minimal_config() -> Result<GuardianDeskConfig, ConfigError> {
    toml::from_str("").map_err(|err| ConfigError::Parse(err.to_string()))
}
