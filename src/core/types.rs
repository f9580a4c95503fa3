//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret rendered as standard, padded Base64 text.
///
/// Always `ceil(n / 3) * 4` characters long for `n` raw bytes.
pub type EncodedSecret = String;
