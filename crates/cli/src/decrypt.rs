// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use sealgate_config::AppConfig;
use sealgate_fhe::decrypt_file;

pub async fn execute(
    config: &AppConfig,
    ciphertext: Option<PathBuf>,
    secret_key: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let ciphertext = ciphertext.unwrap_or_else(|| config.output_file().clone());
    let secret_key = secret_key
        .or_else(|| config.secret_key_file().cloned())
        .ok_or_else(|| anyhow!("No secret key file given. Pass --secret-key"))?;

    let preset = config.fhe_preset();
    let params = preset
        .build_arc()
        .with_context(|| format!("Could not build {} parameters", preset))?;

    let text = decrypt_file(params, &ciphertext, &secret_key)
        .await
        .with_context(|| format!("Could not decrypt {}", ciphertext.display()))?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, text.as_bytes())
                .await
                .with_context(|| format!("Could not write {}", path.display()))?;
            println!("Decryption complete. Output written to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
