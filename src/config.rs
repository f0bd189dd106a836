// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! API configuration.
//!
//! Settings are layered, later layers winning:
//!
//! 1. Built-in defaults (public endpoint, 60 second timeout)
//! 2. YAML config file (`--config`, or `~/.slcli.yaml` when present)
//! 3. Environment (`SL_USERNAME`, `SL_API_KEY`, `SL_API_ENDPOINT`, `SL_API_TIMEOUT`)
//! 4. Command-line flags
//!
//! Layers 3 and 4 are merged by clap before they reach [`ApiConfig::from_layers`].
//!
//! # Config file
//!
//! ```yaml
//! username: SL123456
//! api_key: 0123456789abcdef
//! endpoint: https://api.softlayer.com/rest/v3.1
//! timeout: 30
//! ```

use crate::cli::ApiArgs;
use crate::constants::{
    DEFAULT_API_ENDPOINT, DEFAULT_API_TIMEOUT_SECS, DEFAULT_CONFIG_FILE_NAME, ENV_API_KEY,
    ENV_USERNAME,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Contents of the YAML config file. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// API username
    pub username: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// REST endpoint
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl ConfigFile {
    /// Decode a config file from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::File` if the YAML is invalid or has unknown keys.
    pub fn from_yaml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| ConfigError::File {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::File` if the file cannot be read or decoded.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::File {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_yaml(path, &text)
    }

    /// `~/.slcli.yaml`, if `HOME` is set.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_FILE_NAME))
    }
}

/// Resolved settings for talking to the API.
#[derive(Clone)]
pub struct ApiConfig {
    /// API username
    pub username: String,
    /// API key
    pub api_key: String,
    /// REST endpoint
    pub endpoint: Url,
    /// Timeout applied to each request
    pub timeout: Duration,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    /// Resolve configuration from command-line arguments, loading the config file.
    ///
    /// An explicit `--config` must exist; the default `~/.slcli.yaml` is optional.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the config file is unusable, a credential is
    /// missing, or the endpoint is invalid.
    pub fn resolve(args: &ApiArgs) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => ConfigFile::load(path)?,
            None => match ConfigFile::default_path() {
                Some(path) if path.is_file() => {
                    debug!(path = %path.display(), "Loading default config file");
                    ConfigFile::load(&path)?
                }
                _ => ConfigFile::default(),
            },
        };
        Self::from_layers(file, args)
    }

    /// Merge a config file with command-line (and environment) values.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a credential is missing or the endpoint is invalid.
    pub fn from_layers(file: ConfigFile, args: &ApiArgs) -> Result<Self, ConfigError> {
        let username = args
            .username
            .clone()
            .or(file.username)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingCredential {
                name: "API username",
                flag: "username",
                env: ENV_USERNAME,
            })?;
        let api_key = args
            .api_key
            .clone()
            .or(file.api_key)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingCredential {
                name: "API key",
                flag: "api-key",
                env: ENV_API_KEY,
            })?;

        let endpoint = args
            .endpoint
            .clone()
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
        let endpoint = parse_endpoint(&endpoint)?;

        let timeout = args
            .timeout
            .or(file.timeout)
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);

        Ok(Self {
            username,
            api_key,
            endpoint,
            timeout: Duration::from_secs(timeout),
        })
    }
}

/// Parse and check an endpoint URL: it must be absolute http(s).
///
/// # Errors
///
/// Returns `ConfigError::InvalidEndpoint` for anything else.
pub fn parse_endpoint(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidEndpoint {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::InvalidEndpoint {
            value: value.to_string(),
            reason: format!("unsupported scheme '{scheme}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
