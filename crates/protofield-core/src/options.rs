//! Generator configuration

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Process-wide generator options, constant for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Emit `internal` instead of `public` for generated members
    #[serde(default)]
    pub internal_access: bool,

    /// Log level used by drivers when no environment filter is set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            internal_access: false,
            log_level: default_log_level(),
        }
    }
}

impl GeneratorOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Access modifier applied to generated members
    pub fn access_level(&self) -> &'static str {
        if self.internal_access {
            "internal"
        } else {
            "public"
        }
    }

    /// Parse options from JSON bytes; empty input yields the defaults
    pub fn from_json(bytes: &[u8]) -> GenResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes).map_err(Into::into)
    }

    /// Parse options from TOML text
    pub fn from_toml(content: &str) -> GenResult<Self> {
        toml::from_str(content).map_err(Into::into)
    }

    /// Load options from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GenError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Parse a protoc-style plugin parameter, e.g. `internal_access,log_level=debug`
    pub fn from_parameter(parameter: &str) -> GenResult<Self> {
        let mut options = Self::default();
        options.apply_parameter(parameter)?;
        Ok(options)
    }

    /// Apply a protoc-style plugin parameter on top of these options
    pub fn apply_parameter(&mut self, parameter: &str) -> GenResult<()> {
        for item in parameter.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, value) = match item.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (item, None),
            };
            match (key, value) {
                ("internal_access", None) => self.internal_access = true,
                ("internal_access", Some(value)) => {
                    self.internal_access = value.parse().map_err(|_| {
                        GenError::Config(format!("invalid internal_access value: {value}"))
                    })?;
                }
                ("log_level", Some(value)) if !value.is_empty() => {
                    self.log_level = value.to_string();
                }
                _ => {
                    return Err(GenError::Config(format!("unknown option: {item}")));
                }
            }
        }
        Ok(())
    }

    /// Validate option values
    pub fn validate(&self) -> GenResult<()> {
        const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(GenError::Config(format!(
                "invalid log level: {}",
                self.log_level
            )));
        }
        Ok(())
    }
}
