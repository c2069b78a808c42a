// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use sealgate_config::AppConfig;
use sealgate_keys::SuiKeypair;

pub fn execute(config: &AppConfig) -> Result<()> {
    let keypair = SuiKeypair::from_secret_key(config.require_admin_secret_key()?.expose())
        .context("Invalid admin secret key")?;
    println!("{}", keypair.address());
    Ok(())
}
