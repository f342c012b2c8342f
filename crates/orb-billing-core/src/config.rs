//! Codec configuration.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Environment variable read by [`CodecConfig::from_env`].
///
/// Accepted values are `fallback` and `raise`, case-insensitive.
pub const UNION_POLICY_ENV: &str = "ORB_BILLING_UNION_POLICY";

static INSTALLED: OnceLock<CodecConfig> = OnceLock::new();
static DEFAULT: CodecConfig = CodecConfig {
    union_policy: UnionPolicy::FallbackUnknown,
};

/// What a union decode does when a payload names a known variant but does
/// not satisfy that variant's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnionPolicy {
    /// Keep the payload verbatim as the unknown variant.
    #[default]
    #[serde(rename = "fallback")]
    FallbackUnknown,

    /// Fail the decode with [`ModelError::UnionDispatch`].
    Raise,
}

impl UnionPolicy {
    /// Get the policy name as used in configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FallbackUnknown => "fallback",
            Self::Raise => "raise",
        }
    }
}

impl fmt::Display for UnionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnionPolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(Self::FallbackUnknown),
            "raise" => Ok(Self::Raise),
            other => Err(ModelError::Configuration(format!(
                "unknown union policy {other:?} (expected \"fallback\" or \"raise\")"
            ))),
        }
    }
}

/// Process-wide codec settings.
///
/// Decodes that go through field accessors or serde have no place to pass
/// settings, so they consult [`CodecConfig::current`]. Install a
/// configuration once at startup; until then the defaults apply.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Union materialization failure policy (default: fallback).
    pub union_policy: UnionPolicy,
}

impl CodecConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the union failure policy.
    #[must_use]
    pub fn with_union_policy(mut self, policy: UnionPolicy) -> Self {
        self.union_policy = policy;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Configuration`] if a variable is set to an
    /// unrecognized value.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(UNION_POLICY_ENV) {
            config.union_policy = raw.parse()?;
        }
        Ok(config)
    }

    /// Make this the process-wide configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Configuration`] if a configuration was already
    /// installed.
    pub fn install(self) -> Result<()> {
        tracing::debug!(union_policy = %self.union_policy, "installing codec configuration");
        INSTALLED
            .set(self)
            .map_err(|_| ModelError::Configuration("codec configuration already installed".into()))
    }

    /// The installed configuration, or the defaults.
    #[must_use]
    pub fn current() -> &'static Self {
        INSTALLED.get().unwrap_or(&DEFAULT)
    }
}
