// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use sealgate_keys::SuiKeypair;

pub fn execute() -> Result<()> {
    let keypair = SuiKeypair::generate();
    let secret = keypair.to_bech32()?;
    println!("Address:    {}", keypair.address());
    println!("Secret key: {}", secret.as_str());
    Ok(())
}
