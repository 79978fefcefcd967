// crates/guardian-desk-config/src/config.rs
// ============================================================================
// Module: Guardian Desk Configuration
// Description: Configuration loading and validation for Guardian Desk.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! An explicitly requested file that is missing or invalid fails closed; only
//! the implicit default path may fall back to built-in defaults. The default
//! bind address is loopback and non-loopback binds require explicit opt-in.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "guardian-desk.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "GUARDIAN_DESK_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default server bind address (loopback).
pub const DEFAULT_BIND: &str = "127.0.0.1:8471";
/// Default maximum accepted search-term length in characters.
pub const DEFAULT_MAX_TERM_CHARS: usize = 256;
/// Hard cap on the configurable search-term length.
pub(crate) const MAX_TERM_CHARS_CAP: usize = 4096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Guardian Desk configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuardianDeskConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Request limit configuration.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl GuardianDeskConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails, including
    /// when the resolved file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when only the implicit
    /// default path is requested and no file exists there.
    ///
    /// An explicit path (argument or environment variable) never falls back.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if path.is_none() && env::var(CONFIG_ENV_VAR).is_err() {
            let default_path = Path::new(DEFAULT_CONFIG_NAME);
            if !default_path.exists() {
                let config = Self::default();
                config.validate()?;
                return Ok(config);
            }
        }
        Self::load(path)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.limits.validate()?;
        Ok(())
    }
}

/// Server bind configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server (defaults to loopback).
    #[serde(default)]
    pub bind: Option<String>,
    /// Explicit opt-in for non-loopback bind addresses.
    #[serde(default)]
    pub allow_non_loopback: bool,
}

impl ServerConfig {
    /// Validates the server configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the bind address is malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.effective_bind().map(|_| ())
    }

    /// Returns the effective bind address, applying the loopback default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configured address fails to parse.
    pub fn effective_bind(&self) -> Result<SocketAddr, ConfigError> {
        let text = self.bind.as_deref().unwrap_or(DEFAULT_BIND);
        text.parse().map_err(|_| {
            ConfigError::Invalid(format!("server.bind is not a socket address: {text}"))
        })
    }
}

/// Request limit configuration shared by the HTTP and CLI surfaces.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum accepted search-term length in characters.
    #[serde(default = "default_max_term_chars")]
    pub max_term_chars: usize,
}

impl LimitsConfig {
    /// Validates the limit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a limit is zero or exceeds its hard cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_term_chars == 0 {
            return Err(ConfigError::Invalid("limits.max_term_chars must be non-zero".to_string()));
        }
        if self.max_term_chars > MAX_TERM_CHARS_CAP {
            return Err(ConfigError::Invalid(format!(
                "limits.max_term_chars exceeds cap of {MAX_TERM_CHARS_CAP}"
            )));
        }
        Ok(())
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_term_chars: DEFAULT_MAX_TERM_CHARS,
        }
    }
}

/// Returns the default search-term limit for serde defaults.
const fn default_max_term_chars() -> usize {
    DEFAULT_MAX_TERM_CHARS
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
