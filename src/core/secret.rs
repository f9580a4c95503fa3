//! Secret generation.
//!
//! Draws raw key material from an [`EntropySource`] and renders it as
//! standard padded Base64, ready to paste into a service's configuration.
//!
//! # Example
//!
//! ```
//! let key = keysmith::generate(64).unwrap();
//! assert_eq!(key.len(), 88);
//! ```

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::entropy::{EntropySource, OsEntropy};
use crate::core::strength::Strength;
use crate::core::types::EncodedSecret;
use crate::error::{Error, Result};

/// Random key bytes, wiped from memory on drop.
pub struct RawSecret {
    bytes: Zeroizing<Vec<u8>>,
}

impl RawSecret {
    /// Number of raw bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for secrets produced by [`generate_raw`].
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encode as standard Base64 with `=` padding.
    pub fn encode(&self) -> EncodedSecret {
        STANDARD.encode(self.bytes.as_slice())
    }

    /// Like [`encode`](Self::encode), but reports an output buffer that
    /// cannot be allocated as an error instead of aborting.
    pub fn try_encode(&self) -> Result<EncodedSecret> {
        let len = encoded_len(self.len()).ok_or_else(|| too_large(self.len()))?;
        let mut out = String::new();
        out.try_reserve_exact(len).map_err(|_| too_large(self.len()))?;
        STANDARD.encode_string(self.bytes.as_slice(), &mut out);
        Ok(out)
    }
}

impl fmt::Debug for RawSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSecret")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Expected Base64 length for `num_bytes` raw bytes.
///
/// Returns `None` if the padded length does not fit in `usize`.
pub fn encoded_len(num_bytes: usize) -> Option<usize> {
    base64::encoded_len(num_bytes, true)
}

fn too_large(n: usize) -> Error {
    Error::InvalidArgument(format!("byte count {} is too large to generate", n))
}

/// Validate a caller-supplied byte count.
fn byte_count<N>(num_bytes: N) -> Result<usize>
where
    N: TryInto<usize> + Copy + fmt::Display,
{
    match num_bytes.try_into() {
        Ok(n) if n > 0 => match encoded_len(n) {
            Some(_) => Ok(n),
            None => Err(too_large(n)),
        },
        _ => Err(Error::InvalidArgument(format!(
            "byte count must be a positive integer, got {}",
            num_bytes
        ))),
    }
}

/// Draw `num_bytes` of key material from `source`.
///
/// # Errors
///
/// - `Error::InvalidArgument` if `num_bytes` is zero, negative, or too large
///   to allocate
/// - `Error::EntropyUnavailable` if `source` cannot be read
pub fn generate_raw<S, N>(mut source: S, num_bytes: N) -> Result<RawSecret>
where
    S: EntropySource,
    N: TryInto<usize> + Copy + fmt::Display,
{
    let n = byte_count(num_bytes)?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(n).map_err(|_| too_large(n))?;
    buf.resize(n, 0u8);
    let mut bytes = Zeroizing::new(buf);
    source.fill(&mut bytes)?;
    debug!(bytes = n, "drew secret");
    Ok(RawSecret { bytes })
}

/// Generate a Base64-encoded secret from the supplied entropy source.
///
/// # Errors
///
/// Same as [`generate_raw`].
pub fn generate_with<S, N>(source: S, num_bytes: N) -> Result<EncodedSecret>
where
    S: EntropySource,
    N: TryInto<usize> + Copy + fmt::Display,
{
    generate_raw(source, num_bytes)?.try_encode()
}

/// Generate a Base64-encoded secret of `num_bytes` random bytes.
///
/// Bytes come from the operating system's secure random source. There is no
/// fallback: if it cannot be read the call fails.
///
/// # Errors
///
/// - `Error::InvalidArgument` if `num_bytes` is zero, negative, or too large
///   to allocate
/// - `Error::EntropyUnavailable` if the OS random source fails
pub fn generate<N>(num_bytes: N) -> Result<EncodedSecret>
where
    N: TryInto<usize> + Copy + fmt::Display,
{
    generate_with(OsEntropy, num_bytes)
}

/// Generate a secret sized for a named HMAC tier.
pub fn generate_for(strength: Strength) -> Result<EncodedSecret> {
    generate(strength.num_bytes())
}
