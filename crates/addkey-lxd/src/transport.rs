// ABOUTME: Container file transport: pull a file out of a container, push one back in.
// ABOUTME: LxcTransport shells out to `lxc file pull` / `lxc file push`.

use crate::error::TransportError;
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

/// Default container tool binary.
pub const DEFAULT_LXC_BINARY: &str = "lxc";

/// Root's authorized_keys inside a container.
pub const ROOT_AUTHORIZED_KEYS: &str = "/root/.ssh/authorized_keys";

/// A file inside a named container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub container: String,
    pub path: String,
}

impl RemoteFile {
    pub fn new(container: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            path: path.into(),
        }
    }

    /// Root's authorized_keys in `container`.
    pub fn root_authorized_keys(container: impl Into<String>) -> Self {
        Self::new(container, ROOT_AUTHORIZED_KEYS)
    }
}

/// Renders as `<container>/<path>`, the form `lxc file` expects.
impl fmt::Display for RemoteFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.container, self.path.trim_start_matches('/'))
    }
}

/// Ownership and permissions applied to a pushed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileAttrs {
    pub uid: u32,
    pub gid: u32,
    pub mode: u32,
}

impl FileAttrs {
    /// root:root, mode 0640.
    pub const ROOT_AUTHORIZED_KEYS: FileAttrs = FileAttrs {
        uid: 0,
        gid: 0,
        mode: 0o640,
    };
}

/// Moves whole files between the local filesystem and a container.
///
/// Both operations are blocking and all-or-nothing.
pub trait Transport {
    /// Copy `remote` into the local file at `local`, replacing its contents.
    fn pull(&self, remote: &RemoteFile, local: &Path) -> Result<(), TransportError>;

    /// Copy the local file at `local` to `remote`, applying `attrs`.
    fn push(&self, local: &Path, remote: &RemoteFile, attrs: &FileAttrs)
        -> Result<(), TransportError>;
}

/// Transport backed by the `lxc` command-line client.
#[derive(Debug, Clone)]
pub struct LxcTransport {
    binary: String,
}

impl Default for LxcTransport {
    fn default() -> Self {
        Self::new(DEFAULT_LXC_BINARY)
    }
}

impl LxcTransport {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Arguments for `lxc file pull`.
    fn pull_args(remote: &RemoteFile, local: &Path) -> Vec<String> {
        vec![
            "file".to_string(),
            "pull".to_string(),
            remote.to_string(),
            local.display().to_string(),
        ]
    }

    /// Arguments for `lxc file push`.
    fn push_args(local: &Path, remote: &RemoteFile, attrs: &FileAttrs) -> Vec<String> {
        vec![
            "file".to_string(),
            "push".to_string(),
            format!("--uid={}", attrs.uid),
            format!("--gid={}", attrs.gid),
            format!("--mode={:o}", attrs.mode),
            local.display().to_string(),
            remote.to_string(),
        ]
    }

    fn run(&self, args: &[String]) -> Result<(), TransportError> {
        tracing::debug!(binary = %self.binary, args = ?args, "Running container tool");

        let output = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| TransportError::Spawn {
                program: self.binary.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(TransportError::Exit {
                program: self.binary.clone(),
                status: output.status,
                stderr,
            });
        }

        Ok(())
    }
}

impl Transport for LxcTransport {
    fn pull(&self, remote: &RemoteFile, local: &Path) -> Result<(), TransportError> {
        self.run(&Self::pull_args(remote, local))
    }

    fn push(
        &self,
        local: &Path,
        remote: &RemoteFile,
        attrs: &FileAttrs,
    ) -> Result<(), TransportError> {
        self.run(&Self::push_args(local, remote, attrs))
    }
}
