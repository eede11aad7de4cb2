//
//  powertoys-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod completion;
mod config;
mod customer;
mod licence;

pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use customer::CustomerCommand;
pub use licence::LicenceCommand;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

use crate::api::{ApiError, PowertoysClient};
use crate::config::{ClientConfig, Config};
use crate::output::OutputWriter;

/// PowerToys CLI - Manage licences and customers from the command line
#[derive(Parser, Debug)]
#[command(
    name = "powertoys",
    version,
    about = "Manage PowerToys licences and customers from the command line",
    long_about = "powertoys talks to the PowerToys licensing REST API.\n\n\
                  It creates, inspects and updates licences and customers, and \
                  verifies, activates or deactivates licence keys.",
    propagate_version = true,
    after_help = "Use 'powertoys <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// API access token
    #[arg(long, global = true, env = "POWERTOYS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API version (overrides the config file)
    #[arg(long, global = true, env = "POWERTOYS_API_VERSION")]
    pub api_version: Option<u32>,

    /// API base address (overrides the config file)
    #[arg(long, global = true, env = "POWERTOYS_BASE_ADDRESS")]
    pub base_address: Option<String>,

    /// Request timeout in seconds, 0 to disable (overrides the config file)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to the config file
    #[arg(long, global = true, env = "POWERTOYS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Returns the config file path in effect.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }

    /// Loads the config file in effect.
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from(&self.config_path()?)
    }

    /// Merges flags, environment and the config file into a [`ClientConfig`].
    pub fn client_config(&self) -> Result<ClientConfig> {
        let token = self.token.as_deref().unwrap_or_default();
        if token.trim().is_empty() {
            return Err(ApiError::Configuration(
                "no access token; pass --token or set POWERTOYS_TOKEN".to_string(),
            )
            .into());
        }

        let mut config = self.load_config()?.client_config(token);
        if let Some(version) = self.api_version {
            config = config.api_version(version);
        }
        if let Some(address) = &self.base_address {
            config = config.base_address(address.as_str());
        }
        if let Some(secs) = self.timeout {
            config = config.timeout((secs > 0).then(|| Duration::from_secs(secs)));
        }

        Ok(config)
    }

    /// Builds an API client from the effective configuration.
    pub fn client(&self) -> Result<PowertoysClient> {
        let config = self.client_config()?;
        tracing::debug!("using {:?}", config);
        Ok(PowertoysClient::from_config(config)?)
    }

    /// Returns the output writer for the selected format.
    pub fn output(&self) -> OutputWriter {
        if self.json {
            OutputWriter::json()
        } else {
            OutputWriter::table()
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage licences
    #[command(visible_alias = "license", visible_alias = "lic")]
    Licence(LicenceCommand),

    /// Manage customers
    #[command(visible_alias = "cust")]
    Customer(CustomerCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

/// Parses `-F key=value` fields into a request body mapping.
///
/// Dotted keys nest (`address.city=Cluj`). Values `true`, `false`, `null`
/// and numbers are typed; everything else is a string.
pub fn parse_fields(fields: &[String]) -> Result<Map<String, Value>> {
    let mut body = Map::new();
    for field in fields {
        let (key, value) = parse_field(field)?;
        set_nested_value(&mut body, &key, value);
    }
    Ok(body)
}

fn parse_field(field: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = field.split_once('=') else {
        bail!("Invalid field format: {}. Expected key=value", field);
    };

    if key.is_empty() {
        bail!("Invalid field format: {}. Key must not be empty", field);
    }

    let value = match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => match raw.parse::<i64>() {
            Ok(n) => Value::Number(n.into()),
            Err(_) => Value::String(raw.to_string()),
        },
    };

    Ok((key.to_string(), value))
}

fn set_nested_value(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_fields() {
        let body = parse_fields(&fields(&[
            "name=Jane Doe",
            "seats=3",
            "vip=true",
            "note=a=b",
        ]))
        .unwrap();
        assert_eq!(
            Value::Object(body),
            json!({"name": "Jane Doe", "seats": 3, "vip": true, "note": "a=b"})
        );
    }

    #[test]
    fn test_parse_nested_fields() {
        let body = parse_fields(&fields(&["address.city=Cluj", "address.zip=400000"])).unwrap();
        assert_eq!(
            Value::Object(body),
            json!({"address": {"city": "Cluj", "zip": 400000}})
        );
    }

    #[test]
    fn test_parse_fields_rejects_missing_equals() {
        assert!(parse_fields(&fields(&["name"])).is_err());
        assert!(parse_fields(&fields(&["=value"])).is_err());
    }

    #[test]
    fn test_missing_token_is_configuration_error() {
        let global = GlobalOptions::default();
        let err = global.client_config().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ApiError>(),
            Some(ApiError::Configuration(_))
        ));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        crate::config::write_config_file(
            &path,
            "[client]\napi_version = 2\nbase_address = \"http://file.example/api\"\n",
        )
        .unwrap();

        let global = GlobalOptions {
            token: Some("tok".to_string()),
            base_address: Some("http://flag.example/api".to_string()),
            timeout: Some(0),
            config: Some(path),
            ..Default::default()
        };

        let config = global.client_config().unwrap();
        assert_eq!(config.version(), 2);
        assert_eq!(config.address(), "http://flag.example/api");
        assert_eq!(config.request_timeout(), None);
    }
}
