// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::*;
use clap::Subcommand;
use sealgate_config::AppConfig;

use crate::{allowlist_add, cli::TxArgs};

#[derive(Subcommand, Debug)]
pub enum AllowlistCommands {
    /// Add a user address to the allowlist
    Add {
        #[command(flatten)]
        tx: TxArgs,
    },
}

pub async fn execute(command: AllowlistCommands, config: &AppConfig) -> Result<()> {
    match command {
        AllowlistCommands::Add { tx } => allowlist_add::execute(config, tx.dry_run).await?,
    };

    Ok(())
}
