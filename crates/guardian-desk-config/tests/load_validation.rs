//! Config file loading tests for guardian-desk-config.
// crates/guardian-desk-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate on-disk loading, size limits, and failure modes.
// Purpose: Ensure explicit config paths fail closed and defaults stay safe.
// =============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;

use guardian_desk_config::ConfigError;
use guardian_desk_config::GuardianDeskConfig;

type TestResult = Result<(), String>;

fn write_config(dir: &Path, name: &str, contents: &[u8]) -> Result<std::path::PathBuf, String> {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
    file.write_all(contents).map_err(|err| err.to_string())?;
    Ok(path)
}

#[test]
fn valid_file_loads_and_validates() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = write_config(
        dir.path(),
        "guardian-desk.toml",
        b"[server]\nbind = \"127.0.0.1:9000\"\n\n[limits]\nmax_term_chars = 64\n",
    )?;
    let config = GuardianDeskConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    let bind = config.server.effective_bind().map_err(|err| err.to_string())?;
    if bind.to_string() != "127.0.0.1:9000" {
        return Err(format!("unexpected bind {bind}"));
    }
    if config.limits.max_term_chars != 64 {
        return Err(format!("unexpected limit {}", config.limits.max_term_chars));
    }
    Ok(())
}

#[test]
fn missing_explicit_file_fails_closed() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    match GuardianDeskConfig::load(Some(&path)) {
        Err(ConfigError::Io(_)) => Ok(()),
        Err(other) => Err(format!("expected io error, got {other}")),
        Ok(_) => Err("expected missing file to fail".to_string()),
    }
}

#[test]
fn oversized_file_is_rejected() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let oversized = vec![b'#'; 1024 * 1024 + 1];
    let path = write_config(dir.path(), "big.toml", &oversized)?;
    match GuardianDeskConfig::load(Some(&path)) {
        Err(ConfigError::Invalid(message)) if message.contains("size limit") => Ok(()),
        Err(other) => Err(format!("expected size limit error, got {other}")),
        Ok(_) => Err("expected oversized file to fail".to_string()),
    }
}

#[test]
fn non_utf8_file_is_rejected() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = write_config(dir.path(), "binary.toml", &[0xFF, 0xFE, 0x00])?;
    match GuardianDeskConfig::load(Some(&path)) {
        Err(ConfigError::Invalid(message)) if message.contains("utf-8") => Ok(()),
        Err(other) => Err(format!("expected utf-8 error, got {other}")),
        Ok(_) => Err("expected non-utf-8 file to fail".to_string()),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = write_config(dir.path(), "broken.toml", b"[server\nbind = 3\n")?;
    match GuardianDeskConfig::load(Some(&path)) {
        Err(ConfigError::Parse(_)) => Ok(()),
        Err(other) => Err(format!("expected parse error, got {other}")),
        Ok(_) => Err("expected malformed toml to fail".to_string()),
    }
}

#[test]
fn invalid_values_fail_validation_on_load() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path =
        write_config(dir.path(), "limits.toml", b"[limits]\nmax_term_chars = 0\n")?;
    match GuardianDeskConfig::load(Some(&path)) {
        Err(ConfigError::Invalid(message)) if message.contains("max_term_chars") => Ok(()),
        Err(other) => Err(format!("expected limit error, got {other}")),
        Ok(_) => Err("expected zero limit to fail".to_string()),
    }
}
