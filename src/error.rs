//! Error types for keysmith.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The requested byte count was zero, negative, or too large to generate.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operating system's secure random source could not be read.
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err =
            Error::InvalidArgument("byte count must be a positive integer, got -1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid argument: byte count must be a positive integer, got -1"
        );
    }

    #[test]
    fn test_entropy_unavailable_message() {
        let err = Error::EntropyUnavailable("getrandom failed".to_string());
        assert_eq!(err.to_string(), "entropy unavailable: getrandom failed");
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
