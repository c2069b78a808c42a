// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{FheError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use fhe::bfv::{BfvParameters, SecretKey};
use std::sync::Arc;
use zeroize::Zeroizing;

/// The library does not serialize secret keys so we persist the raw coefficients.
pub struct SecretKeySerializer;

#[derive(serde::Serialize, serde::Deserialize)]
struct SecretKeyData {
    coeffs: Box<[i64]>,
}

impl SecretKeySerializer {
    pub fn to_bytes(secret_key: &SecretKey) -> Result<Zeroizing<Vec<u8>>> {
        let data = SecretKeyData {
            coeffs: secret_key.coeffs.clone(),
        };
        let bytes =
            bincode::serialize(&data).map_err(|e| FheError::BadSecretKey(e.to_string()))?;
        Ok(Zeroizing::new(bytes))
    }

    pub fn from_bytes(bytes: &[u8], params: &Arc<BfvParameters>) -> Result<SecretKey> {
        let SecretKeyData { coeffs } =
            bincode::deserialize(bytes).map_err(|e| FheError::BadSecretKey(e.to_string()))?;

        if coeffs.len() != params.degree() {
            return Err(FheError::BadSecretKey(format!(
                "expected {} coefficients, got {}",
                params.degree(),
                coeffs.len()
            )));
        }

        Ok(SecretKey::new(coeffs.to_vec(), params))
    }

    pub fn to_base64(secret_key: &SecretKey) -> Result<Zeroizing<String>> {
        let bytes = Self::to_bytes(secret_key)?;
        Ok(Zeroizing::new(STANDARD.encode(bytes.as_slice())))
    }

    pub fn from_base64(encoded: &str, params: &Arc<BfvParameters>) -> Result<SecretKey> {
        let bytes = Zeroizing::new(STANDARD.decode(encoded.trim())?);
        Self::from_bytes(&bytes, params)
    }
}
