//! Secure entropy sources.
//!
//! Secrets are only ever drawn through [`EntropySource`]. The only
//! implementation shipped reads the operating system CSPRNG.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use crate::error::{Error, Result};

/// A source of cryptographically secure random bytes.
pub trait EntropySource {
    /// Fill `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntropyUnavailable` if the source cannot be read.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// The operating system's secure random source (getrandom, BCryptGenRandom, ...).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        debug!(bytes = buf.len(), "reading os entropy");
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| Error::EntropyUnavailable(e.to_string()))
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}
