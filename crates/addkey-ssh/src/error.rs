// ABOUTME: Error types for authorized-keys parsing and key loading using thiserror.
// ABOUTME: Provides typed errors for unsupported algorithms, malformed lines and key files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding, encoding or loading keys.
#[derive(Error, Debug)]
pub enum SshError {
    /// The leading token of a line is not a supported key algorithm.
    #[error(
        "line {line}: unsupported key algorithm {algorithm:?}. Supported algorithms: {}",
        crate::record::SUPPORTED_ALGORITHMS.join(", ")
    )]
    UnsupportedAlgorithm { line: usize, algorithm: String },

    /// The line names a supported algorithm but could not be parsed.
    #[error("line {line}: error parsing key: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: ssh_key::Error,
    },

    /// The input ended in the middle of a line.
    #[error("line {line}: missing trailing newline")]
    UnterminatedLine { line: usize },

    /// Reading the input stream failed.
    #[error("failed to read authorized keys: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read a key file from disk.
    #[error("failed to read SSH key from {path}: {source}")]
    ReadKey {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A public key file held something other than exactly one key.
    #[error("expected exactly one public key in {path}, found {count}")]
    KeyCount { path: PathBuf, count: usize },

    /// Failed to serialize a key.
    #[error("failed to serialize key: {0}")]
    SerializeKey(#[source] ssh_key::Error),
}

/// Result type alias using SshError.
pub type Result<T> = std::result::Result<T, SshError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_unsupported_algorithm_lists_supported_set() {
        let err = SshError::UnsupportedAlgorithm {
            line: 3,
            algorithm: "ssh-ed25519".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("line 3"));
        assert!(display.contains("ssh-ed25519"));
        for algorithm in crate::record::SUPPORTED_ALGORITHMS {
            assert!(display.contains(algorithm), "missing {algorithm}");
        }
    }

    #[test]
    fn test_malformed_line_display() {
        let err = SshError::MalformedLine {
            line: 7,
            source: ssh_key::Error::AlgorithmUnknown,
        };
        let display = err.to_string();
        assert!(display.contains("line 7"));
        assert!(display.contains("error parsing key"));
    }

    #[test]
    fn test_read_key_error_display() {
        let err = SshError::ReadKey {
            path: PathBuf::from("/path/to/key.pub"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        let display = err.to_string();
        assert!(display.contains("failed to read SSH key"));
        assert!(display.contains("/path/to/key.pub"));
    }

    #[test]
    fn test_key_count_display() {
        let err = SshError::KeyCount {
            path: PathBuf::from("/keys.pub"),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "expected exactly one public key in /keys.pub, found 2"
        );
    }

    #[test]
    fn test_error_source_malformed_line() {
        use std::error::Error;

        let err = SshError::MalformedLine {
            line: 1,
            source: ssh_key::Error::AlgorithmUnknown,
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_no_source_unsupported_algorithm() {
        use std::error::Error;

        let err = SshError::UnsupportedAlgorithm {
            line: 1,
            algorithm: "x".to_string(),
        };
        assert!(err.source().is_none());
    }
}
