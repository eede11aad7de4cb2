//
//  powertoys-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the `[client]` defaults in `config.toml`.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::CONFIG_KEYS;

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => {
                println!("{}", global.config_path()?.display());
                Ok(())
            }
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;

        let Some(value) = config.get(&args.key) else {
            bail!(
                "Unknown config key '{}'. Valid keys: {}",
                args.key,
                CONFIG_KEYS.join(", ")
            );
        };

        if global.json {
            let result = serde_json::json!({ "key": args.key, "value": value });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", value);
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;
        let mut config = global.load_config()?;
        config.set(&args.key, &args.value)?;
        config.save_to(&path)?;

        global
            .output()
            .write_success(&format!("Set {} = {}", args.key, args.value));
        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;

        if global.json {
            println!("{}", serde_json::to_string_pretty(&config.client)?);
            return Ok(());
        }

        for key in CONFIG_KEYS {
            let value = config.get(key).unwrap_or_default();
            println!("{} = {}", style(key).cyan(), value);
        }
        Ok(())
    }
}
