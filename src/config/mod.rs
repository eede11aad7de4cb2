//
//  powertoys-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Two layers of configuration live here:
//!
//! - [`ClientConfig`]: the immutable connection settings a
//!   [`PowertoysClient`](crate::api::PowertoysClient) is built from
//! - [`Config`]: the `powertoys` binary's TOML file, which supplies defaults
//!   for [`ClientConfig`] between invocations
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/powertoys/config.toml`
//! - **macOS**: `~/Library/Application Support/io.powertoys.powertoys/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\powertoys\powertoys\config\config.toml`
//!
//! The `POWERTOYS_CONFIG` environment variable (or `--config`) overrides it.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [client]
//! base_address = "https://powertoys.io/api"
//! api_version = 1
//! timeout_secs = 30
//! fail_on_error = true
//! legacy_json_content_type = false
//! ```
//!
//! The access token is never stored here; pass it with `--token` or
//! `POWERTOYS_TOKEN`.
//!
//! ## Submodules
//!
//! - [`client`]: [`ClientConfig`] and its builder
//! - [`file`]: Low-level configuration file I/O

mod client;
mod file;

pub use client::*;
pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "base_address",
    "api_version",
    "timeout_secs",
    "fail_on_error",
    "legacy_json_content_type",
];

/// The `powertoys` binary's configuration file.
///
/// # Examples
///
/// ```rust
/// use powertoys_client::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.client.api_version, 1);
/// assert_eq!(config.client.base_address, "https://powertoys.io/api");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Connection defaults.
    #[serde(default)]
    pub client: ClientSettings,
}

/// Connection defaults stored in the `[client]` table.
///
/// | Field | Default |
/// |-------|---------|
/// | `base_address` | `"https://powertoys.io/api"` |
/// | `api_version` | `1` |
/// | `timeout_secs` | `30` (`0` disables the timeout) |
/// | `fail_on_error` | `true` |
/// | `legacy_json_content_type` | `false` |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientSettings {
    #[serde(default = "default_base_address")]
    pub base_address: String,

    #[serde(default = "default_api_version")]
    pub api_version: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_true")]
    pub fail_on_error: bool,

    /// Label form-encoded bodies as `application/json`.
    #[serde(default)]
    pub legacy_json_content_type: bool,
}

fn default_base_address() -> String {
    DEFAULT_BASE_ADDRESS.to_string()
}

fn default_api_version() -> u32 {
    DEFAULT_API_VERSION
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_true() -> bool {
    true
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_address: default_base_address(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
            fail_on_error: true,
            legacy_json_content_type: false,
        }
    }
}

impl Config {
    /// Loads the configuration from an explicit path.
    ///
    /// A missing file yields [`Config::default`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }

        let content = read_config_file(path)?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))
    }

    /// Saves the configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the default configuration file path.
    ///
    /// `POWERTOYS_CONFIG` takes precedence over the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("POWERTOYS_CONFIG") {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let dirs = ProjectDirs::from("io", "powertoys", "powertoys")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Reads a setting by key.
    pub fn get(&self, key: &str) -> Option<String> {
        let client = &self.client;
        match key {
            "base_address" => Some(client.base_address.clone()),
            "api_version" => Some(client.api_version.to_string()),
            "timeout_secs" => Some(client.timeout_secs.to_string()),
            "fail_on_error" => Some(client.fail_on_error.to_string()),
            "legacy_json_content_type" => Some(client.legacy_json_content_type.to_string()),
            _ => None,
        }
    }

    /// Updates a setting by key.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys and for values that do not parse as
    /// the key's type, including base addresses that fail
    /// [`validate_base_address`].
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let client = &mut self.client;
        match key {
            "base_address" => {
                let address = value.trim_end_matches('/');
                validate_base_address(address)?;
                client.base_address = address.to_string();
            }
            "api_version" => match value.parse::<u32>() {
                Ok(v) if v > 0 => client.api_version = v,
                _ => bail!("api_version must be a positive integer, got '{}'", value),
            },
            "timeout_secs" => {
                client.timeout_secs = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("timeout_secs must be a number of seconds"))?
            }
            "fail_on_error" => client.fail_on_error = parse_bool(key, value)?,
            "legacy_json_content_type" => {
                client.legacy_json_content_type = parse_bool(key, value)?
            }
            _ => bail!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Builds a [`ClientConfig`] from these settings and a token.
    pub fn client_config(&self, access_token: &str) -> ClientConfig {
        let client = &self.client;
        let timeout = match client.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        let content_type = if client.legacy_json_content_type {
            BodyContentType::LegacyJson
        } else {
            BodyContentType::Form
        };

        ClientConfig::new(access_token)
            .api_version(client.api_version)
            .base_address(client.base_address.as_str())
            .timeout(timeout)
            .fail_on_error(client.fail_on_error)
            .body_content_type(content_type)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => bail!("{} must be true or false, got '{}'", key, value),
    }
}
