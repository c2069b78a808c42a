// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Sui Ed25519 key material: secret key decoding, address derivation and transaction
//! signing.

mod address;
mod error;
mod keypair;
mod secret;

pub use address::SuiAddress;
pub use error::KeyError;
pub use keypair::{intent_digest, SuiKeypair};
pub use secret::{decode_secret_key, normalize_secret_key};

/// Bech32 human readable part of an encoded Sui private key
pub const SUI_PRIVATE_KEY_PREFIX: &str = "suiprivkey";
/// Signature scheme flag for Ed25519
pub const ED25519_FLAG: u8 = 0x00;
/// Intent for a Sui transaction: scope TransactionData, version V0, app id Sui
pub const TRANSACTION_INTENT: [u8; 3] = [0, 0, 0];

pub const SEED_LENGTH: usize = 32;
pub const KEYPAIR_LENGTH: usize = 64;
