//! Engine configuration from environment variables.
//!
//! Supported variables:
//! - `SERVER_HOST` (default `0.0.0.0`), `SERVER_PORT` or `PORT` (default `3000`)
//! - `SOULCORE_HP_POLICY`: `bodyOnly` | `bodyPlusEndurance` (required)
//! - `SOULCORE_RANGE_POLICY`: `lenient` (default) | `strict`
//! - `SOULCORE_STORE`: `memory` (default) | `file`
//! - `SOULCORE_STORE_PATH`: JSON file for the file store (default `characters.json`)

use std::path::PathBuf;

use soulcore_domain::{HitPointPolicy, RangePolicy, RuleSystemConfig};

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_STORE_PATH: &str = "characters.json";

pub const HP_POLICY_VAR: &str = "SOULCORE_HP_POLICY";
pub const RANGE_POLICY_VAR: &str = "SOULCORE_RANGE_POLICY";
pub const STORE_VAR: &str = "SOULCORE_STORE";
pub const STORE_PATH_VAR: &str = "SOULCORE_STORE_PATH";

/// Startup configuration problems. Any of these aborts the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("SOULCORE_HP_POLICY is not set (expected bodyOnly or bodyPlusEndurance)")]
    MissingHitPointPolicy,

    #[error("{var} has an invalid value '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigurationError {
    fn invalid(var: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Which `CharacterStore` adapter backs the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Memory,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    pub rules: RuleSystemConfig,
    pub store: StoreConfig,
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let hit_points = var(HP_POLICY_VAR)
            .ok_or(ConfigurationError::MissingHitPointPolicy)?;
        let hit_points = hit_points
            .parse::<HitPointPolicy>()
            .map_err(|e| ConfigurationError::invalid(HP_POLICY_VAR, &hit_points, e))?;

        let ranges = match var(RANGE_POLICY_VAR) {
            Some(value) => value
                .parse::<RangePolicy>()
                .map_err(|e| ConfigurationError::invalid(RANGE_POLICY_VAR, &value, e))?,
            None => RangePolicy::default(),
        };

        let store = match var(STORE_VAR).as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("memory") => StoreConfig::Memory,
            Some("file") => StoreConfig::File(PathBuf::from(
                var(STORE_PATH_VAR).unwrap_or_else(|| DEFAULT_STORE_PATH.to_string()),
            )),
            Some(other) => {
                return Err(ConfigurationError::invalid(
                    STORE_VAR,
                    other,
                    "expected memory or file",
                ))
            }
        };

        let server_host = var("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string());
        let server_port = match var("SERVER_PORT").or_else(|| var("PORT")) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigurationError::invalid("SERVER_PORT", &value, e))?,
            None => DEFAULT_SERVER_PORT,
        };

        Ok(Self {
            server_host,
            server_port,
            rules: RuleSystemConfig::new(hit_points).with_ranges(ranges),
            store,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
