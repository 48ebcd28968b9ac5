// ABOUTME: Error types for container file transport and the add-key pipeline.
// ABOUTME: Each pipeline step has its own variant so failures name the step that failed.

use addkey_ssh::SshError;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;

/// Errors from moving files in and out of a container.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The container tool could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The container tool ran but reported failure.
    #[error("{program} exited with {status}{}", stderr_suffix(.stderr))]
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// A file transfer failed for a reason other than the tool itself.
    #[error("{0}")]
    Other(String),
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// The key path, unless the source error already names it.
fn key_path_suffix(path: &Path, source: &SshError) -> String {
    match source {
        SshError::ReadKey { .. } | SshError::KeyCount { .. } => String::new(),
        _ => format!(" {}", path.display()),
    }
}

/// Errors that abort an add-key run.
#[derive(Error, Debug)]
pub enum AddKeyError {
    /// The local public key could not be read or parsed.
    #[error("error reading key{}: {source}", key_path_suffix(.path, .source))]
    KeyRead {
        path: PathBuf,
        #[source]
        source: SshError,
    },

    /// The local scratch file could not be created.
    #[error("failed to create temp file: {0}")]
    TempFile(#[source] std::io::Error),

    /// Fetching the remote authorized_keys failed.
    #[error("error pulling {remote}: {source}")]
    Pull {
        remote: String,
        #[source]
        source: TransportError,
    },

    /// The remote authorized_keys did not decode.
    #[error("error reading {remote}: {source}")]
    Decode {
        remote: String,
        #[source]
        source: SshError,
    },

    /// The key is already authorized.
    #[error("key {fingerprint} already in authorized_keys")]
    DuplicateKey { fingerprint: String },

    /// Nothing to write.
    #[error("no keys to write")]
    NoKeys,

    /// The merged records could not be encoded.
    #[error("error encoding authorized_keys: {0}")]
    Encode(#[source] SshError),

    /// Writing the merged file to the scratch file failed.
    #[error("error writing temp file: {0}")]
    WriteTemp(#[source] std::io::Error),

    /// Sending the merged file back failed.
    #[error("error pushing new authorized_keys to {remote}: {source}")]
    Push {
        remote: String,
        #[source]
        source: TransportError,
    },
}

/// Result type alias using AddKeyError.
pub type Result<T> = std::result::Result<T, AddKeyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_spawn_error_display() {
        let err = TransportError::Spawn {
            program: "lxc".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let display = err.to_string();
        assert!(display.contains("failed to run lxc"));
        assert!(display.contains("No such file or directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_error_display_includes_stderr() {
        use std::os::unix::process::ExitStatusExt;

        let err = TransportError::Exit {
            program: "lxc".to_string(),
            status: ExitStatus::from_raw(1 << 8),
            stderr: "Error: not found".to_string(),
        };
        let display = err.to_string();
        assert!(display.starts_with("lxc exited with"));
        assert!(display.ends_with(": Error: not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_error_display_without_stderr() {
        use std::os::unix::process::ExitStatusExt;

        let status = ExitStatus::from_raw(1 << 8);
        let err = TransportError::Exit {
            program: "lxc".to_string(),
            status,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), format!("lxc exited with {status}"));
    }

    #[test]
    fn test_duplicate_key_display() {
        let err = AddKeyError::DuplicateKey {
            fingerprint: "SHA256:abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "key SHA256:abc already in authorized_keys"
        );
    }

    #[test]
    fn test_pull_error_chains_transport_error() {
        use std::error::Error;

        let err = AddKeyError::Pull {
            remote: "web/root/.ssh/authorized_keys".to_string(),
            source: TransportError::Other("boom".to_string()),
        };
        assert!(err.to_string().contains("web/root/.ssh/authorized_keys"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_no_keys_has_no_source() {
        use std::error::Error;

        assert!(AddKeyError::NoKeys.source().is_none());
    }

    #[test]
    fn test_key_read_names_path_once() {
        let err = AddKeyError::KeyRead {
            path: PathBuf::from("/home/u/.ssh/id_rsa.pub"),
            source: SshError::ReadKey {
                path: PathBuf::from("/home/u/.ssh/id_rsa.pub"),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            },
        };
        let display = err.to_string();
        assert!(display.starts_with("error reading key: "));
        assert_eq!(display.matches("/home/u/.ssh/id_rsa.pub").count(), 1);
    }

    #[test]
    fn test_key_read_names_path_for_parse_errors() {
        let err = AddKeyError::KeyRead {
            path: PathBuf::from("/keys/id_ed25519.pub"),
            source: SshError::UnsupportedAlgorithm {
                line: 1,
                algorithm: "ssh-ed25519".to_string(),
            },
        };
        assert!(err
            .to_string()
            .starts_with("error reading key /keys/id_ed25519.pub: line 1:"));
    }
}
