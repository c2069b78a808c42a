// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::*;
use clap::Subcommand;
use sealgate_config::{AppConfig, SecretString};

use crate::{helpers::parse_secret_key, keys_address, keys_generate};

#[derive(Subcommand, Debug)]
pub enum KeysCommands {
    /// Print the address of the admin secret key
    Address {
        /// Admin secret key, `suiprivkey1...` or base64. Defaults to the configured key.
        #[arg(long = "admin-key", value_parser = parse_secret_key)]
        admin_key: Option<SecretString>,
    },
    /// Generate a new Ed25519 key and print it with its address
    Generate,
}

pub fn execute(command: KeysCommands, config: &AppConfig) -> Result<()> {
    match command {
        KeysCommands::Address { .. } => keys_address::execute(config)?,
        KeysCommands::Generate => keys_generate::execute()?,
    };

    Ok(())
}
