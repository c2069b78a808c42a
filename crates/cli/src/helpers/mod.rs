// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use sealgate_config::SecretString;
use sealgate_keys::normalize_secret_key;
use zeroize::Zeroizing;

pub mod telemetry;

/// Parse to a Zeroizing String
pub fn parse_zeroizing(s: &str) -> Result<Zeroizing<String>> {
    Ok(Zeroizing::new(s.trim().to_string()))
}

/// Ensure the value decodes to a usable Ed25519 secret key before it reaches the config
pub fn parse_secret_key(s: &str) -> Result<SecretString> {
    let key = parse_zeroizing(s)?;
    normalize_secret_key(&key).context("Invalid secret key")?;
    Ok(SecretString::from(key))
}
