// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use sealgate_fhe_params::ParamsError;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum FheError {
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error("Input has {len} characters but only {slots} slots are available")]
    InputTooLong { len: usize, slots: usize },
    #[error("Character code {code} does not fit the plaintext modulus {modulus}")]
    CodeOutOfRange { code: u64, modulus: u64 },
    #[error("Encoding failed: {0}")]
    Encode(String),
    #[error("Encryption failed: {0}")]
    Encrypt(String),
    #[error("Decryption failed: {0}")]
    Decrypt(String),
    #[error("Error deserializing ciphertext: {0}")]
    BadCiphertext(String),
    #[error("Error deserializing secret key: {0}")]
    BadSecretKey(String),
    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FheError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        FheError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
