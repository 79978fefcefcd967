//! Config defaults and core validation tests for guardian-desk-config.
// crates/guardian-desk-config/tests/config_defaults.rs
// =============================================================================
// Module: Config Defaults and Core Validation Tests
// Description: Validate default behavior and core config invariants.
// Purpose: Ensure minimal config is valid and critical invariants are enforced.
// =============================================================================

use guardian_desk_config::ConfigError;
use guardian_desk_config::DEFAULT_BIND;
use guardian_desk_config::DEFAULT_MAX_TERM_CHARS;

mod common;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn default_config_validates() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn default_bind_is_loopback() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    let bind = config.server.effective_bind().map_err(|err| err.to_string())?;
    if !bind.ip().is_loopback() {
        return Err(format!("default bind {bind} should be loopback"));
    }
    if bind.to_string() != DEFAULT_BIND {
        return Err(format!("default bind {bind} should equal {DEFAULT_BIND}"));
    }
    Ok(())
}

#[test]
fn allow_non_loopback_defaults_to_false() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    if config.server.allow_non_loopback {
        return Err("server.allow_non_loopback should default to false".to_string());
    }
    Ok(())
}

#[test]
fn term_limit_defaults_apply() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    if config.limits.max_term_chars != DEFAULT_MAX_TERM_CHARS {
        return Err(format!(
            "limits.max_term_chars should default to {DEFAULT_MAX_TERM_CHARS}, got {}",
            config.limits.max_term_chars
        ));
    }
    Ok(())
}

#[test]
fn malformed_bind_is_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.server.bind = Some("not-an-address".to_string());
    assert_invalid(config.validate(), "server.bind is not a socket address")?;
    Ok(())
}
