// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::encoding::{pad_to_slots, text_to_codes};
use crate::{FheError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use fhe::bfv::{BfvParameters, Ciphertext, Encoding, Plaintext, PublicKey, SecretKey};
use fhe_traits::{
    DeserializeParametrized, FheDecoder, FheDecrypter, FheEncoder, FheEncrypter, Serialize,
};
use rand::{thread_rng, CryptoRng, RngCore};
use std::sync::Arc;
use tracing::debug;

/// A serialized-on-demand BFV ciphertext
#[derive(Debug, Clone)]
pub struct EncryptedText {
    ciphertext: Ciphertext,
}

impl EncryptedText {
    pub fn to_bytes(&self) -> Vec<u8> {
        self.ciphertext.to_bytes()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn from_bytes(bytes: &[u8], params: &Arc<BfvParameters>) -> Result<Self> {
        let ciphertext = Ciphertext::from_bytes(bytes, params)
            .map_err(|e| FheError::BadCiphertext(e.to_string()))?;
        Ok(Self { ciphertext })
    }

    pub fn from_base64(encoded: &str, params: &Arc<BfvParameters>) -> Result<Self> {
        let bytes = STANDARD.decode(encoded.trim())?;
        Self::from_bytes(&bytes, params)
    }
}

/// Holds a freshly generated BFV key pair and encrypts batched text with the public key.
pub struct FileEncryptor {
    params: Arc<BfvParameters>,
    secret_key: SecretKey,
    public_key: PublicKey,
}

impl FileEncryptor {
    pub fn generate(params: Arc<BfvParameters>) -> Self {
        Self::generate_with_rng(params, &mut thread_rng())
    }

    pub fn generate_with_rng<R: RngCore + CryptoRng>(
        params: Arc<BfvParameters>,
        rng: &mut R,
    ) -> Self {
        let secret_key = SecretKey::random(&params, rng);
        let public_key = PublicKey::new(&secret_key, rng);
        Self {
            params,
            secret_key,
            public_key,
        }
    }

    pub fn params(&self) -> &Arc<BfvParameters> {
        &self.params
    }

    pub fn slot_count(&self) -> usize {
        self.params.degree()
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key.to_bytes()
    }

    /// Encode text one character per slot, zero padded to the slot count, and encrypt it
    pub fn encrypt_text(&self, text: &str) -> Result<EncryptedText> {
        let codes = pad_to_slots(text_to_codes(text), self.slot_count())?;
        self.encrypt_codes(&codes)
    }

    pub fn encrypt_codes(&self, codes: &[u64]) -> Result<EncryptedText> {
        if codes.len() > self.slot_count() {
            return Err(FheError::InputTooLong {
                len: codes.len(),
                slots: self.slot_count(),
            });
        }

        let modulus = self.params.plaintext();
        if let Some(code) = codes.iter().find(|c| **c >= modulus) {
            return Err(FheError::CodeOutOfRange {
                code: *code,
                modulus,
            });
        }

        let plaintext = Plaintext::try_encode(codes, Encoding::simd(), &self.params)
            .map_err(|e| FheError::Encode(e.to_string()))?;

        let ciphertext: Ciphertext = self
            .public_key
            .try_encrypt(&plaintext, &mut thread_rng())
            .map_err(|e| FheError::Encrypt(e.to_string()))?;

        debug!(slots = codes.len(), "encrypted plaintext");
        Ok(EncryptedText { ciphertext })
    }

    pub fn decrypt(&self, encrypted: &EncryptedText) -> Result<Vec<u64>> {
        decrypt_codes(&self.secret_key, encrypted)
    }
}

/// Decrypts ciphertexts given a previously persisted secret key
pub struct FileDecryptor {
    params: Arc<BfvParameters>,
    secret_key: SecretKey,
}

impl FileDecryptor {
    pub fn new(params: Arc<BfvParameters>, secret_key: SecretKey) -> Self {
        Self { params, secret_key }
    }

    pub fn params(&self) -> &Arc<BfvParameters> {
        &self.params
    }

    /// Decrypt to the padded slot values
    pub fn decrypt(&self, encrypted: &EncryptedText) -> Result<Vec<u64>> {
        decrypt_codes(&self.secret_key, encrypted)
    }
}

fn decrypt_codes(secret_key: &SecretKey, encrypted: &EncryptedText) -> Result<Vec<u64>> {
    let plaintext = secret_key
        .try_decrypt(&encrypted.ciphertext)
        .map_err(|e| FheError::Decrypt(e.to_string()))?;
    let codes = Vec::<u64>::try_decode(&plaintext, Encoding::simd())
        .map_err(|e| FheError::Decrypt(e.to_string()))?;
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::codes_to_text;
    use sealgate_fhe_params::BfvPreset;

    #[test]
    fn encrypts_and_decrypts_padded_codes() {
        let params = BfvPreset::SealBfv2048.build_arc().unwrap();
        let encryptor = FileEncryptor::generate(params.clone());
        assert_eq!(encryptor.slot_count(), 2048);

        let encrypted = encryptor.encrypt_text("Hello, allowlist!").unwrap();
        let restored = EncryptedText::from_base64(&encrypted.to_base64(), &params).unwrap();
        let codes = encryptor.decrypt(&restored).unwrap();

        let expected = pad_to_slots(text_to_codes("Hello, allowlist!"), 2048).unwrap();
        assert_eq!(codes, expected);
        assert_eq!(codes_to_text(&codes), "Hello, allowlist!");
    }

    #[test]
    fn fresh_keys_per_encryptor() {
        let params = BfvPreset::InsecureBfv512.build_arc().unwrap();
        let a = FileEncryptor::generate(params.clone());
        let b = FileEncryptor::generate(params);
        assert_ne!(a.public_key_bytes(), b.public_key_bytes());
    }

    #[test]
    fn seeded_rng_reproduces_secret_key() {
        use crate::SecretKeySerializer;
        use rand::{rngs::StdRng, SeedableRng};

        let params = BfvPreset::InsecureBfv512.build_arc().unwrap();
        let a = FileEncryptor::generate_with_rng(params.clone(), &mut StdRng::seed_from_u64(7));
        let b = FileEncryptor::generate_with_rng(params.clone(), &mut StdRng::seed_from_u64(7));
        let c = FileEncryptor::generate_with_rng(params, &mut StdRng::seed_from_u64(8));

        let bytes = |e: &FileEncryptor| SecretKeySerializer::to_bytes(e.secret_key()).unwrap();
        assert_eq!(bytes(&a).as_slice(), bytes(&b).as_slice());
        assert_ne!(bytes(&a).as_slice(), bytes(&c).as_slice());
    }

    #[test]
    fn rejects_text_exceeding_slots() {
        let params = BfvPreset::InsecureBfv512.build_arc().unwrap();
        let encryptor = FileEncryptor::generate(params);
        let text = "x".repeat(513);
        assert!(matches!(
            encryptor.encrypt_text(&text),
            Err(FheError::InputTooLong {
                len: 513,
                slots: 512
            })
        ));
    }

    #[test]
    fn rejects_codes_outside_plaintext_space() {
        let params = BfvPreset::InsecureBfv512.build_arc().unwrap();
        let encryptor = FileEncryptor::generate(params);
        assert!(matches!(
            encryptor.encrypt_codes(&[65537]),
            Err(FheError::CodeOutOfRange { code: 65537, .. })
        ));
    }

    #[test]
    fn rejects_garbage_ciphertext() {
        let params = BfvPreset::InsecureBfv512.build_arc().unwrap();
        assert!(matches!(
            EncryptedText::from_base64("not base64!", &params),
            Err(FheError::Base64(_))
        ));
        assert!(matches!(
            EncryptedText::from_bytes(&[1, 2, 3], &params),
            Err(FheError::BadCiphertext(_))
        ));
    }
}
