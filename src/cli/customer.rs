//
//  powertoys-client
//  cli/customer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Customer commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use super::{parse_fields, GlobalOptions};

/// Manage customers
#[derive(Args, Debug)]
pub struct CustomerCommand {
    #[command(subcommand)]
    pub command: CustomerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CustomerSubcommand {
    /// Show a customer
    #[command(visible_alias = "view")]
    Find(IdArgs),

    /// List all customers
    #[command(visible_alias = "ls")]
    List,

    /// Create a customer
    Create(FieldArgs),

    /// Update a customer
    Update(UpdateArgs),

    /// Delete a customer
    #[command(visible_alias = "rm")]
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Customer ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct FieldArgs {
    /// Customer fields (key=value, can be nested with dots)
    #[arg(long, short = 'F', action = clap::ArgAction::Append, required = true)]
    pub field: Vec<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Customer ID
    pub id: String,

    /// Fields to update (key=value, can be nested with dots)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,
}

impl CustomerCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let output = global.output();

        let result = match &self.command {
            CustomerSubcommand::Find(args) => client.find_customer(&args.id).await?,
            CustomerSubcommand::List => client.find_all_customers().await?,
            CustomerSubcommand::Create(args) => {
                let data = parse_fields(&args.field)?;
                client.create_customer(&data).await?
            }
            CustomerSubcommand::Update(args) => {
                if args.field.is_empty() {
                    bail!("Nothing to update. Pass at least one -F key=value");
                }
                let data = parse_fields(&args.field)?;
                client.update_customer(&args.id, &data).await?
            }
            CustomerSubcommand::Delete(args) => {
                let result = client.delete_customer(&args.id).await?;
                output.write_success(&format!("Deleted customer {}", args.id));
                result
            }
        };

        output.write_result(&result)
    }
}
