// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::encoding::codes_to_text;
use crate::{EncryptedText, FheError, FileDecryptor, FileEncryptor, Result, SecretKeySerializer};
use fhe::bfv::BfvParameters;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

/// Permissions of a persisted BFV secret key on unix
#[cfg(unix)]
pub const SECRET_KEY_FILE_MODE: u32 = 0o600;

#[derive(Debug, Clone)]
pub struct EncryptFileOptions {
    /// UTF-8 text file to encrypt
    pub input: PathBuf,
    /// Where the base64 ciphertext is written
    pub output: PathBuf,
    /// Optionally persist the BFV secret key so the output can be decrypted later
    pub secret_key_out: Option<PathBuf>,
}

/// Read the input file, encrypt it under a fresh key pair and write the base64 ciphertext.
/// Returns the encryptor holding the generated keys.
#[instrument(skip(params), fields(input = %opts.input.display(), output = %opts.output.display()))]
pub async fn encrypt_file(
    params: Arc<BfvParameters>,
    opts: &EncryptFileOptions,
) -> Result<FileEncryptor> {
    let input = fs::read_to_string(&opts.input)
        .await
        .map_err(|e| FheError::io(&opts.input, e))?;

    let encryptor = FileEncryptor::generate(params);
    let encrypted = encryptor.encrypt_text(&input)?;

    fs::write(&opts.output, encrypted.to_base64())
        .await
        .map_err(|e| FheError::io(&opts.output, e))?;

    if let Some(path) = &opts.secret_key_out {
        let encoded = SecretKeySerializer::to_base64(encryptor.secret_key())?;
        write_secret_file(path, encoded.as_bytes()).await?;
        info!("BFV secret key written to {}", path.display());
    }

    info!(
        chars = input.chars().count(),
        slots = encryptor.slot_count(),
        "Encryption complete. Output written to {}",
        opts.output.display()
    );
    Ok(encryptor)
}

/// Write key material readable by the owner only, tightening an existing file as well
async fn write_secret_file(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(SECRET_KEY_FILE_MODE);

    let mut file = options.open(path).await.map_err(|e| FheError::io(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, std::fs::Permissions::from_mode(SECRET_KEY_FILE_MODE))
            .await
            .map_err(|e| FheError::io(path, e))?;
    }

    file.write_all(contents)
        .await
        .map_err(|e| FheError::io(path, e))?;
    file.flush().await.map_err(|e| FheError::io(path, e))?;
    Ok(())
}

/// Decrypt a base64 ciphertext file with a persisted secret key and return the text with
/// the zero padding removed.
#[instrument(skip(params))]
pub async fn decrypt_file(
    params: Arc<BfvParameters>,
    ciphertext: &Path,
    secret_key: &Path,
) -> Result<String> {
    let encoded_ct = fs::read_to_string(ciphertext)
        .await
        .map_err(|e| FheError::io(ciphertext, e))?;
    let encoded_sk = zeroize::Zeroizing::new(
        fs::read_to_string(secret_key)
            .await
            .map_err(|e| FheError::io(secret_key, e))?,
    );

    let encrypted = EncryptedText::from_base64(&encoded_ct, &params)?;
    let sk = SecretKeySerializer::from_base64(&encoded_sk, &params)?;
    let codes = FileDecryptor::new(params, sk).decrypt(&encrypted)?;

    Ok(codes_to_text(&codes))
}
