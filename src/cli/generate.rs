//! Default run - generate an HS512 signing key and print it with guidance.

use std::io::{self, Write};

use tracing::info;

use crate::cli::output;
use crate::core::constants::{DEFAULT_NUM_BYTES, SIGNING_KEY_PROPERTY};
use crate::core::entropy::{EntropySource, OsEntropy};
use crate::core::secret::generate_with;
use crate::core::strength::Strength;
use crate::error::Result;

/// Operator reminders printed after the key.
fn guidance() -> [String; 4] {
    [
        "Store this key somewhere VERY secure.".to_string(),
        format!(
            "Configure it as the '{}' property of the service that signs tokens.",
            SIGNING_KEY_PROPERTY
        ),
        "Do NOT put this key in source code or version control unprotected \
         (use environment variables or a secrets vault in production)."
            .to_string(),
        "Generate a different key for each environment (development, staging, production)."
            .to_string(),
    ]
}

/// Generate a key from the OS random source and print it to stdout.
pub fn execute() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, OsEntropy)?;
    out.flush()?;
    Ok(())
}

/// Generate a key from `source` and write the report to `w`.
///
/// Nothing is written if generation fails.
pub fn render<W: Write, S: EntropySource>(w: &mut W, source: S) -> Result<()> {
    let strength = Strength::default();
    info!(%strength, bytes = DEFAULT_NUM_BYTES, "generating signing key");

    let key = generate_with(source, DEFAULT_NUM_BYTES)?;

    output::header(
        w,
        &format!("Your generated JWT secret key (Base64 encoded for {}):", strength),
    )?;
    output::data(w, &key)?;
    output::data(w, format_args!("Base64 key length: {} characters", key.len()))?;
    output::blank(w)?;
    output::header(w, "Remember:")?;
    for (i, line) in guidance().iter().enumerate() {
        output::numbered(w, i + 1, line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Broken;

    impl EntropySource for Broken {
        fn fill(&mut self, _buf: &mut [u8]) -> Result<()> {
            Err(Error::EntropyUnavailable("no entropy".to_string()))
        }
    }

    fn render_to_string() -> String {
        let mut buf = Vec::new();
        render(&mut buf, OsEntropy).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_prints_key_and_length() {
        let out = render_to_string();
        let lines: Vec<&str> = out.lines().collect();

        let key = lines[1];
        assert_eq!(key.len(), 88);
        assert_eq!(lines[2], "Base64 key length: 88 characters");
    }

    #[test]
    fn test_render_guidance() {
        let out = render_to_string();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[3], "");
        assert!(lines[4].contains("Remember:"));
        assert!(lines[5].starts_with("1. "));
        assert!(lines[6].starts_with("2. "));
        assert!(lines[6].contains("jwt.secret"));
        assert!(lines[7].starts_with("3. "));
        assert!(lines[8].starts_with("4. "));
        assert!(lines[8].contains("staging"));
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_render_failure_writes_nothing() {
        let mut buf = Vec::new();
        let err = render(&mut buf, Broken).unwrap_err();
        assert!(matches!(err, Error::EntropyUnavailable(_)));
        assert!(buf.is_empty());
    }
}
