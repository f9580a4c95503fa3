//! Keysmith - Generate cryptographically secure signing secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Demonstration run: print a fresh HS512 key
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── constants     # Key sizes, log env var
//!     ├── entropy       # EntropySource trait, OS CSPRNG
//!     ├── secret        # generate(), RawSecret
//!     ├── strength      # HS256/HS384/HS512 tiers
//!     └── types         # Domain type aliases
//! ```
//!
//! # Usage
//!
//! ```
//! let key = keysmith::generate(32)?;
//! assert_eq!(key.len(), 44);
//! # Ok::<(), keysmith::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::secret::{encoded_len, generate, generate_for, generate_with, RawSecret};
pub use crate::core::strength::Strength;
pub use crate::core::types::EncodedSecret;
pub use crate::error::{Error, Result};
