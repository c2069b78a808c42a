// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::secret::normalize_secret_key;
use crate::{
    KeyError, SuiAddress, ED25519_FLAG, KEYPAIR_LENGTH, SUI_PRIVATE_KEY_PREFIX, TRANSACTION_INTENT,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use bech32::{Bech32, Hrp};
use blake2::{digest::consts::U32, Blake2b, Digest};
use ed25519_dalek::{Signer, SigningKey};
use rand::thread_rng;
use std::fmt;
use zeroize::Zeroizing;

/// Digest that gets signed for a transaction: `Blake2b-256(intent || tx_bytes)`
pub fn intent_digest(tx_bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b::<U32>::new();
    hasher.update(TRANSACTION_INTENT);
    hasher.update(tx_bytes);
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// An Ed25519 keypair together with the Sui address it controls
pub struct SuiKeypair {
    signing_key: SigningKey,
    address: SuiAddress,
}

impl SuiKeypair {
    /// Build a keypair from a bech32 or base64 encoded 32 or 64 byte secret key
    pub fn from_secret_key(input: &str) -> Result<Self, KeyError> {
        let bytes = normalize_secret_key(input)?;
        Self::from_keypair_bytes(&bytes)
    }

    /// Build from `seed || public_key`, rejecting a public key that does not belong to the
    /// seed
    pub fn from_keypair_bytes(bytes: &[u8; KEYPAIR_LENGTH]) -> Result<Self, KeyError> {
        let signing_key = SigningKey::from_keypair_bytes(bytes)
            .map_err(|e| KeyError::KeypairMismatch(e.to_string()))?;
        Ok(Self::from_signing_key(signing_key))
    }

    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::generate(&mut thread_rng()))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let public_key = signing_key.verifying_key().to_bytes();
        let address = SuiAddress::from_ed25519_public_key(&public_key);
        Self {
            signing_key,
            address,
        }
    }

    pub fn address(&self) -> SuiAddress {
        self.address
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Encode the seed as `suiprivkey1...`
    pub fn to_bech32(&self) -> Result<Zeroizing<String>, KeyError> {
        let mut payload = Zeroizing::new(Vec::with_capacity(33));
        payload.push(ED25519_FLAG);
        payload.extend_from_slice(self.signing_key.as_bytes());

        let hrp =
            Hrp::parse(SUI_PRIVATE_KEY_PREFIX).map_err(|e| KeyError::Bech32(e.to_string()))?;
        let encoded =
            bech32::encode::<Bech32>(hrp, &payload).map_err(|e| KeyError::Bech32(e.to_string()))?;
        Ok(Zeroizing::new(encoded))
    }

    /// Sign transaction bytes and return the serialized signature
    /// `flag || signature || public_key` as base64.
    pub fn sign_transaction(&self, tx_bytes: &[u8]) -> String {
        let digest = intent_digest(tx_bytes);
        let signature = self.signing_key.sign(&digest);

        let mut serialized = Vec::with_capacity(1 + 64 + 32);
        serialized.push(ED25519_FLAG);
        serialized.extend_from_slice(&signature.to_bytes());
        serialized.extend_from_slice(&self.public_key());
        STANDARD.encode(serialized)
    }
}

impl fmt::Debug for SuiKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiKeypair")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signature, Verifier, VerifyingKey};

    const SEED: [u8; 32] = [42u8; 32];

    #[test]
    fn seed_and_full_key_give_same_keypair() {
        let from_seed = SuiKeypair::from_secret_key(&STANDARD.encode(SEED)).unwrap();

        let mut full = [0u8; 64];
        full[..32].copy_from_slice(&SEED);
        full[32..].copy_from_slice(&from_seed.public_key());
        let from_full = SuiKeypair::from_secret_key(&STANDARD.encode(full)).unwrap();

        assert_eq!(from_seed.address(), from_full.address());
        assert_eq!(
            from_seed.address(),
            SuiAddress::from_ed25519_public_key(&from_seed.public_key())
        );
    }

    #[test]
    fn mismatched_public_key_is_rejected() {
        let mut full = [0u8; 64];
        full[..32].copy_from_slice(&SEED);
        full[32..].copy_from_slice(&[9u8; 32]);
        assert!(matches!(
            SuiKeypair::from_secret_key(&STANDARD.encode(full)),
            Err(KeyError::KeypairMismatch(_))
        ));
    }

    #[test]
    fn bech32_round_trip() {
        let keypair = SuiKeypair::generate();
        let encoded = keypair.to_bech32().unwrap();
        assert!(encoded.starts_with("suiprivkey1"));

        let restored = SuiKeypair::from_secret_key(&encoded).unwrap();
        assert_eq!(restored.address(), keypair.address());
    }

    #[test]
    fn signature_verifies_over_intent_digest() {
        let keypair = SuiKeypair::from_secret_key(&STANDARD.encode(SEED)).unwrap();
        let tx_bytes = b"transaction data";

        let serialized = STANDARD.decode(keypair.sign_transaction(tx_bytes)).unwrap();
        assert_eq!(serialized.len(), 97);
        assert_eq!(serialized[0], ED25519_FLAG);
        assert_eq!(&serialized[65..], &keypair.public_key());

        let signature = Signature::from_slice(&serialized[1..65]).unwrap();
        let verifying_key = VerifyingKey::from_bytes(&keypair.public_key()).unwrap();
        verifying_key
            .verify(&intent_digest(tx_bytes), &signature)
            .unwrap();
        assert!(verifying_key.verify(tx_bytes, &signature).is_err());
    }

    #[test]
    fn intent_digest_includes_prefix() {
        let mut hasher = Blake2b::<U32>::new();
        hasher.update(b"abc");
        let plain = hasher.finalize();
        assert_ne!(intent_digest(b"abc").as_slice(), plain.as_slice());
    }

    #[test]
    fn debug_does_not_print_secret() {
        let keypair = SuiKeypair::from_secret_key(&STANDARD.encode(SEED)).unwrap();
        let printed = format!("{keypair:?}");
        assert!(printed.contains(&keypair.address().to_string()));
        assert!(!printed.contains(&hex::encode(SEED)));
    }
}
