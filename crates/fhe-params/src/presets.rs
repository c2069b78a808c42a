// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::builder::build_bfv_params_from_set_arc;
use crate::constants::{insecure_512, seal_2048};
use crate::validation::ParamsError;
use fhe::bfv::BfvParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error as ThisError;

pub const DEFAULT_BFV_PRESET: BfvPreset = BfvPreset::SealBfv2048;

/// BFV preset configurations used to encrypt files
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum BfvPreset {
    /// Degree 2048 with batching enabled - the parameters files are encrypted with
    ///
    /// A single 54-bit coefficient modulus and a 20-bit batching plaintext modulus which gives
    /// 2048 slots per plaintext.
    #[default]
    #[serde(rename = "SEAL_BFV_2048")]
    #[value(name = "SEAL_BFV_2048")]
    SealBfv2048,
    /// Insecure parameters (degree 512) - DO NOT USE IN PRODUCTION
    ///
    /// Useful for quick local runs and tests.
    #[serde(rename = "INSECURE_BFV_512")]
    #[value(name = "INSECURE_BFV_512")]
    InsecureBfv512,
}

#[derive(ThisError, Debug)]
pub enum PresetError {
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// A complete BFV parameter set definition
///
/// This struct contains all the values needed to construct a `BfvParameters`
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfvParamSet {
    /// Degree of the polynomial ring, must be a power of 2. Equal to the slot count when
    /// batching.
    pub degree: usize,
    /// Plaintext modulus, must be congruent to 1 mod 2 * degree for batching
    pub plaintext_modulus: u64,
    /// Ciphertext moduli (q_i) - NTT-friendly primes for the ciphertext space
    pub moduli: &'static [u64],
    /// Skip the 128-bit security bound when validating
    pub insecure: bool,
}

impl BfvParamSet {
    pub fn build_arc(self) -> Result<Arc<BfvParameters>, ParamsError> {
        build_bfv_params_from_set_arc(self)
    }

    /// Number of plaintext values packed into one batched plaintext
    pub fn slot_count(&self) -> usize {
        self.degree
    }
}

impl BfvPreset {
    pub const ALL: [BfvPreset; 2] = [BfvPreset::SealBfv2048, BfvPreset::InsecureBfv512];

    pub fn from_name(name: &str) -> Result<Self, PresetError> {
        let normalized = name.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "SEAL_BFV_2048" => Ok(Self::SealBfv2048),
            "INSECURE_BFV_512" => Ok(Self::InsecureBfv512),
            _ => Err(PresetError::UnknownPreset(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BfvPreset::SealBfv2048 => "SEAL_BFV_2048",
            BfvPreset::InsecureBfv512 => "INSECURE_BFV_512",
        }
    }

    pub fn build_arc(&self) -> Result<Arc<BfvParameters>, ParamsError> {
        BfvParamSet::from(*self).build_arc()
    }
}

impl fmt::Display for BfvPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BfvPreset {
    type Err = PresetError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl From<BfvPreset> for BfvParamSet {
    fn from(value: BfvPreset) -> Self {
        match value {
            BfvPreset::SealBfv2048 => BfvParamSet {
                degree: seal_2048::DEGREE,
                plaintext_modulus: seal_2048::PLAINTEXT_MODULUS,
                moduli: seal_2048::MODULI,
                insecure: false,
            },
            BfvPreset::InsecureBfv512 => BfvParamSet {
                degree: insecure_512::DEGREE,
                plaintext_modulus: insecure_512::PLAINTEXT_MODULUS,
                moduli: insecure_512::MODULI,
                insecure: true,
            },
        }
    }
}
