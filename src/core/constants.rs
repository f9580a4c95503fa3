//! Constants used throughout keysmith.
//!
//! Centralizes magic strings and configuration values.

/// Default number of random bytes drawn for a secret (HS512 strength).
pub const DEFAULT_NUM_BYTES: usize = 64;

/// Key size for HMAC-SHA256 (256 bits).
pub const HS256_BYTES: usize = 32;

/// Key size for HMAC-SHA384 (384 bits).
pub const HS384_BYTES: usize = 48;

/// Key size for HMAC-SHA512 (512 bits).
pub const HS512_BYTES: usize = 64;

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "KEYSMITH_LOG";

/// Default log filter when `KEYSMITH_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "keysmith=warn";

/// Property the consuming service reads its signing key from.
pub const SIGNING_KEY_PROPERTY: &str = "jwt.secret";
