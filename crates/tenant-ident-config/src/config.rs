// crates/tenant-ident-config/src/config.rs
// ============================================================================
// Module: Tenant Ident Config
// Description: TOML configuration model and fail-closed loader.
// Purpose: Validate tenant policy and limits before any normalization runs.
// Dependencies: serde, tenant-ident-core, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is resolved from an explicit path, then the
//! [`CONFIG_ENV_VAR`] environment variable, then [`DEFAULT_CONFIG_NAME`] in
//! the working directory. Only the default location may be absent.
//!
//! ```toml
//! [tenant]
//! domain_suffix = ".onmicrosoft.com"
//! reserved = ["common", "organizations", "consumers"]
//!
//! [limits]
//! max_batch = 4096
//! max_input_bytes = 1048576
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use tenant_ident_core::COMMON_TENANT;
use tenant_ident_core::DEFAULT_DOMAIN_SUFFIX;
use tenant_ident_core::TenantPolicy;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default config filename.
pub const DEFAULT_CONFIG_NAME: &str = "tenant-ident.toml";
/// Environment variable override for config path.
pub const CONFIG_ENV_VAR: &str = "TENANT_IDENT_CONFIG";
/// Maximum allowed config file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum total path length for the config path.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum number of reserved tenant aliases.
const MAX_RESERVED_ALIASES: usize = 32;
/// Maximum length of a reserved alias or domain suffix.
const MAX_NAME_LENGTH: usize = 253;
/// Upper bound for `limits.max_batch`.
const MAX_BATCH_CEILING: usize = 1_000_000;
/// Default batch size limit.
const DEFAULT_MAX_BATCH: usize = 4096;
/// Default input size limit in bytes.
const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors emitted while loading or validating configuration.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("config io error: {0}")]
    Io(String),
    /// Config file is not valid TOML for the model.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Config content violates a constraint.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Model
// ============================================================================

/// Tenant Ident configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenantIdentConfig {
    /// Tenant normalization policy.
    pub tenant: TenantConfig,
    /// Input limits.
    pub limits: LimitsConfig,
}

/// Tenant normalization policy settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenantConfig {
    /// Suffix appended to short tenant names.
    pub domain_suffix: String,
    /// Aliases left unchanged by normalization.
    pub reserved: Vec<String>,
}

impl Default for TenantConfig {
    fn default() -> Self {
        Self {
            domain_suffix: DEFAULT_DOMAIN_SUFFIX.to_string(),
            reserved: vec![COMMON_TENANT.to_string()],
        }
    }
}

/// Input size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum number of identifiers in one batch.
    pub max_batch: usize,
    /// Maximum size of an input document in bytes.
    pub max_input_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_batch: DEFAULT_MAX_BATCH,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl TenantIdentConfig {
    /// Loads configuration from disk, falling back to defaults when the
    /// default config file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(resolved) = resolve_path(path)? else {
            return Ok(Self::default());
        };
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a constraint is violated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tenant.validate()?;
        self.limits.validate()
    }

    /// Builds the tenant policy described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the suffix is rejected.
    pub fn tenant_policy(&self) -> Result<TenantPolicy, ConfigError> {
        let policy = TenantPolicy::new(&self.tenant.domain_suffix)
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        Ok(self.tenant.reserved.iter().fold(policy, |policy, alias| policy.with_reserved(alias)))
    }
}

impl TenantConfig {
    /// Validates tenant policy settings.
    fn validate(&self) -> Result<(), ConfigError> {
        let suffix = &self.domain_suffix;
        if !suffix.starts_with('.') || suffix.len() < 2 {
            return Err(ConfigError::Invalid(
                "tenant.domain_suffix must start with '.' and name a domain".to_string(),
            ));
        }
        if suffix.len() > MAX_NAME_LENGTH {
            return Err(ConfigError::Invalid("tenant.domain_suffix too long".to_string()));
        }
        if suffix.chars().any(|ch| ch.is_whitespace() || ch == '/') {
            return Err(ConfigError::Invalid(
                "tenant.domain_suffix must not contain whitespace or '/'".to_string(),
            ));
        }
        if self.reserved.len() > MAX_RESERVED_ALIASES {
            return Err(ConfigError::Invalid(format!(
                "tenant.reserved exceeds {MAX_RESERVED_ALIASES} aliases"
            )));
        }
        for alias in &self.reserved {
            if alias.is_empty() || alias.len() > MAX_NAME_LENGTH {
                return Err(ConfigError::Invalid(format!(
                    "tenant.reserved alias length must be 1..={MAX_NAME_LENGTH}"
                )));
            }
            if alias.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "tenant.reserved alias must not contain whitespace: \"{alias}\""
                )));
            }
        }
        if !self.reserved.iter().any(|alias| alias.eq_ignore_ascii_case(COMMON_TENANT)) {
            return Err(ConfigError::Invalid(format!(
                "tenant.reserved must include \"{COMMON_TENANT}\""
            )));
        }
        Ok(())
    }
}

impl LimitsConfig {
    /// Validates limit settings.
    fn validate(self) -> Result<(), ConfigError> {
        if self.max_batch == 0 || self.max_batch > MAX_BATCH_CEILING {
            return Err(ConfigError::Invalid(format!(
                "limits.max_batch must be 1..={MAX_BATCH_CEILING}"
            )));
        }
        if self.max_input_bytes == 0 {
            return Err(ConfigError::Invalid("limits.max_input_bytes must be non-zero".to_string()));
        }
        Ok(())
    }
}

/// Resolves the config path from explicit input, environment, or default.
///
/// Returns `None` when only the default location applies and it is absent.
fn resolve_path(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = path {
        return Ok(Some(path.to_path_buf()));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(Some(PathBuf::from(env_path)));
    }
    let default_path = PathBuf::from(DEFAULT_CONFIG_NAME);
    Ok(default_path.is_file().then_some(default_path))
}

/// Validates the config file path length and components.
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
