//! Constants for BFV presets
//!
//! This module contains all hardcoded values used in preset definitions.

/// Batching-enabled parameters at degree 2048 - 128-bit classical security
pub mod seal_2048 {
    pub const DEGREE: usize = 2048;
    /// Largest 20-bit prime congruent to 1 mod 2 * DEGREE
    pub const PLAINTEXT_MODULUS: u64 = 1032193;
    /// The single 54-bit default coefficient modulus for this degree
    pub const MODULI: &[u64] = &[0x3fffffff000001];
}

/// Insecure preset constants (degree 512) - DO NOT USE IN PRODUCTION
pub mod insecure_512 {
    pub const DEGREE: usize = 512;
    pub const PLAINTEXT_MODULUS: u64 = 65537;
    pub const MODULI: &[u64] = &[0xffffee001, 0xffffc4001];
}

/// Maximum total coefficient modulus bit count per degree for 128-bit
/// classical security (HomomorphicEncryption.org standard).
pub mod security_128 {
    pub const MAX_BITS: &[(usize, u32)] = &[
        (1024, 27),
        (2048, 54),
        (4096, 109),
        (8192, 218),
        (16384, 438),
        (32768, 881),
    ];
}
