//! Test support utilities for keysmith integration tests.
//!
//! Provides a binary runner and reusable assertions.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use commands::*;

/// Characters allowed in standard padded Base64.
pub fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='
}
