//
//  powertoys-client
//  cli/licence.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Licence commands
//!
//! ## Examples
//!
//! ```bash
//! # Inspect licences
//! powertoys licence list
//! powertoys licence find 42
//!
//! # Issue a licence for a customer's server
//! powertoys licence create --customer cus_81f2 --type yearly --server 203.0.113.7
//!
//! # Bind and release a key
//! powertoys licence activate PT-1234-ABCD 203.0.113.7
//! powertoys licence deactivate PT-1234-ABCD 203.0.113.7
//! ```

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::LicenceAction;

use super::{parse_fields, GlobalOptions};

/// Manage licences
#[derive(Args, Debug)]
pub struct LicenceCommand {
    #[command(subcommand)]
    pub command: LicenceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LicenceSubcommand {
    /// Show a licence
    #[command(visible_alias = "view")]
    Find(IdArgs),

    /// List all licences
    #[command(visible_alias = "ls")]
    List,

    /// Create a licence
    Create(CreateArgs),

    /// Update a licence
    Update(UpdateArgs),

    /// Delete a licence
    #[command(visible_alias = "rm")]
    Delete(IdArgs),

    /// Check a licence key against a server address
    Verify(KeyArgs),

    /// Activate a licence key on a server address
    Activate(KeyArgs),

    /// Deactivate a licence key on a server address
    Deactivate(KeyArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Licence ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Customer UID the licence belongs to
    #[arg(long)]
    pub customer: String,

    /// Licence type
    #[arg(long = "type")]
    pub licence_type: String,

    /// Server address the licence is issued for
    #[arg(long)]
    pub server: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Licence ID
    pub id: String,

    /// Fields to update (key=value, can be nested with dots)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Licence key
    pub key: String,

    /// Server IP address
    pub server_ip: String,
}

impl LicenceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let output = global.output();

        let result = match &self.command {
            LicenceSubcommand::Find(args) => client.find_licence(&args.id).await?,
            LicenceSubcommand::List => client.find_all_licences().await?,
            LicenceSubcommand::Create(args) => {
                client
                    .create_licence(&args.customer, &args.licence_type, &args.server)
                    .await?
            }
            LicenceSubcommand::Update(args) => {
                if args.field.is_empty() {
                    bail!("Nothing to update. Pass at least one -F key=value");
                }
                let data = parse_fields(&args.field)?;
                client.update_licence(&args.id, &data).await?
            }
            LicenceSubcommand::Delete(args) => {
                let result = client.delete_licence(&args.id).await?;
                output.write_success(&format!("Deleted licence {}", args.id));
                result
            }
            LicenceSubcommand::Verify(args) => {
                client
                    .licence_action(LicenceAction::Verify, &args.key, &args.server_ip)
                    .await?
            }
            LicenceSubcommand::Activate(args) => {
                client
                    .licence_action(LicenceAction::Activate, &args.key, &args.server_ip)
                    .await?
            }
            LicenceSubcommand::Deactivate(args) => {
                client
                    .licence_action(LicenceAction::Deactivate, &args.key, &args.server_ip)
                    .await?
            }
        };

        output.write_result(&result)
    }
}
