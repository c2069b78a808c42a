// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod encoding;
mod encryptor;
mod error;
mod file;
mod secret_key;

pub use encoding::{codes_to_text, pad_to_slots, text_to_codes};
pub use encryptor::{EncryptedText, FileDecryptor, FileEncryptor};
pub use error::FheError;
pub use file::{decrypt_file, encrypt_file, EncryptFileOptions};
pub use secret_key::SecretKeySerializer;

// Re-export params so dependents can use sealgate_fhe::BfvPreset without depending on
// sealgate-fhe-params.
pub use sealgate_fhe_params::{BfvParamSet, BfvPreset, ParamsError, DEFAULT_BFV_PRESET};

/// Result that returns a type T or a FheError
pub type Result<T> = std::result::Result<T, FheError>;
