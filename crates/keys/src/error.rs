// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Invalid bech32 private key: {0}")]
    Bech32(String),

    #[error("Invalid bech32 prefix: expected '{expected}', got '{actual}'")]
    WrongPrefix { expected: String, actual: String },

    #[error("Unsupported signature scheme flag 0x{0:02x}; only Ed25519 keys are supported")]
    UnsupportedScheme(u8),

    #[error("Invalid base64 private key: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid secret key length: expected 32 or 64 bytes, got {0}")]
    InvalidLength(usize),

    #[error("Secret key does not match its public key: {0}")]
    KeypairMismatch(String),

    #[error("Invalid Sui address '{0}'")]
    InvalidAddress(String),
}
