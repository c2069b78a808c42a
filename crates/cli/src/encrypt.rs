// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use sealgate_config::AppConfig;
use sealgate_fhe::{encrypt_file, EncryptFileOptions};
use tracing::warn;

pub async fn execute(config: &AppConfig) -> Result<()> {
    let preset = config.fhe_preset();
    let params = preset
        .build_arc()
        .with_context(|| format!("Could not build {} parameters", preset))?;

    if config.secret_key_file().is_none() {
        warn!("No secret_key_file configured. The ciphertext will not be decryptable.");
    }

    let opts = EncryptFileOptions {
        input: config.input_file().clone(),
        output: config.output_file().clone(),
        secret_key_out: config.secret_key_file().cloned(),
    };
    encrypt_file(params, &opts)
        .await
        .with_context(|| format!("Could not encrypt {}", opts.input.display()))?;

    println!("Encryption complete. Output written to {}", opts.output.display());
    Ok(())
}
