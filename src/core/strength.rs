//! HMAC key-strength tiers.

use std::fmt;

use crate::core::constants::{HS256_BYTES, HS384_BYTES, HS512_BYTES};

/// Named key sizes for HMAC-based token signing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    /// 32 bytes (256 bits).
    Hs256,
    /// 48 bytes (384 bits).
    Hs384,
    /// 64 bytes (512 bits), the recommended default.
    #[default]
    Hs512,
}

impl Strength {
    /// All tiers, weakest first.
    pub const ALL: [Strength; 3] = [Strength::Hs256, Strength::Hs384, Strength::Hs512];

    /// Number of raw key bytes for this tier.
    pub fn num_bytes(self) -> usize {
        match self {
            Strength::Hs256 => HS256_BYTES,
            Strength::Hs384 => HS384_BYTES,
            Strength::Hs512 => HS512_BYTES,
        }
    }

    /// Key size in bits.
    pub fn bits(self) -> usize {
        self.num_bytes() * 8
    }

    /// JWS algorithm name (e.g., `HS512`).
    pub fn algorithm(self) -> &'static str {
        match self {
            Strength::Hs256 => "HS256",
            Strength::Hs384 => "HS384",
            Strength::Hs512 => "HS512",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm())
    }
}
