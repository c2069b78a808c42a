// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::constants::security_128::MAX_BITS;
use crate::presets::BfvParamSet;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ParamsError {
    #[error("Encryption parameters are not valid: degree {0} is not a power of two")]
    DegreeNotPowerOfTwo(usize),
    #[error("Encryption parameters are not valid: no 128-bit security bound for degree {0}")]
    UnsupportedDegree(usize),
    #[error("Encryption parameters are not valid: coefficient modulus has {bits} bits but degree {degree} allows at most {max}")]
    CoeffModulusTooLarge { bits: u32, max: u32, degree: usize },
    #[error("Encryption parameters are not valid: plaintext modulus {plaintext_modulus} does not enable batching for degree {degree}")]
    BatchingUnsupported {
        plaintext_modulus: u64,
        degree: usize,
    },
    #[error("Encryption parameters are not valid: {0}")]
    Build(#[from] fhe::Error),
}

/// Maximum total coefficient modulus bit count at 128-bit classical security
pub fn max_coeff_modulus_bits(degree: usize) -> Option<u32> {
    MAX_BITS
        .iter()
        .find(|(d, _)| *d == degree)
        .map(|(_, bits)| *bits)
}

fn coeff_modulus_bits(moduli: &[u64]) -> u32 {
    moduli.iter().map(|q| u64::BITS - q.leading_zeros()).sum()
}

/// Check a parameter set before handing it to the library
pub fn validate_param_set(set: &BfvParamSet) -> Result<(), ParamsError> {
    if !set.degree.is_power_of_two() {
        return Err(ParamsError::DegreeNotPowerOfTwo(set.degree));
    }

    // Batching needs a 2n-th root of unity mod t
    if set.plaintext_modulus % (2 * set.degree as u64) != 1 {
        return Err(ParamsError::BatchingUnsupported {
            plaintext_modulus: set.plaintext_modulus,
            degree: set.degree,
        });
    }

    if set.insecure {
        return Ok(());
    }

    let max = max_coeff_modulus_bits(set.degree)
        .ok_or(ParamsError::UnsupportedDegree(set.degree))?;
    let bits = coeff_modulus_bits(set.moduli);
    if bits > max {
        return Err(ParamsError::CoeffModulusTooLarge {
            bits,
            max,
            degree: set.degree,
        });
    }

    Ok(())
}
