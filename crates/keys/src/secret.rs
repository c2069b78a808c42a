// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{KeyError, ED25519_FLAG, KEYPAIR_LENGTH, SEED_LENGTH, SUI_PRIVATE_KEY_PREFIX};
use base64::{engine::general_purpose::STANDARD, Engine};
use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

/// Decode a secret key given either as a bech32 `suiprivkey1...` string or as base64.
///
/// A bech32 payload is `flag || secret` and the Ed25519 flag is stripped. Base64 input is
/// returned as decoded.
pub fn decode_secret_key(input: &str) -> Result<Zeroizing<Vec<u8>>, KeyError> {
    let input = input.trim();

    if input
        .to_ascii_lowercase()
        .starts_with(SUI_PRIVATE_KEY_PREFIX)
    {
        return decode_bech32(input);
    }

    Ok(Zeroizing::new(STANDARD.decode(input)?))
}

fn decode_bech32(input: &str) -> Result<Zeroizing<Vec<u8>>, KeyError> {
    let (hrp, data) = bech32::decode(input).map_err(|e| KeyError::Bech32(e.to_string()))?;
    let data = Zeroizing::new(data);

    if !hrp.as_str().eq_ignore_ascii_case(SUI_PRIVATE_KEY_PREFIX) {
        return Err(KeyError::WrongPrefix {
            expected: SUI_PRIVATE_KEY_PREFIX.to_string(),
            actual: hrp.to_string(),
        });
    }

    let Some((flag, secret)) = data.split_first() else {
        return Err(KeyError::InvalidLength(0));
    };
    if *flag != ED25519_FLAG {
        return Err(KeyError::UnsupportedScheme(*flag));
    }

    Ok(Zeroizing::new(secret.to_vec()))
}

/// Normalize a secret key to the 64 byte `seed || public_key` form.
///
/// - a 32 byte seed is expanded by regenerating the keypair from it
/// - a 64 byte key is returned unchanged
/// - any other length fails
pub fn normalize_secret_key(input: &str) -> Result<Zeroizing<[u8; KEYPAIR_LENGTH]>, KeyError> {
    let decoded = decode_secret_key(input)?;

    match decoded.len() {
        SEED_LENGTH => {
            let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
            seed.copy_from_slice(&decoded);
            let signing_key = SigningKey::from_bytes(&seed);
            Ok(Zeroizing::new(signing_key.to_keypair_bytes()))
        }
        KEYPAIR_LENGTH => {
            let mut full = Zeroizing::new([0u8; KEYPAIR_LENGTH]);
            full.copy_from_slice(&decoded);
            Ok(full)
        }
        len => Err(KeyError::InvalidLength(len)),
    }
}
