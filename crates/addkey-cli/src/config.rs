// ABOUTME: Configuration for addkey, resolved once at startup.
// ABOUTME: Merges CLI flags, environment, the optional config file and built-in defaults.

use crate::cli::Cli;
use addkey_lxd::{RemoteFile, DEFAULT_LXC_BINARY, ROOT_AUTHORIZED_KEYS};
use addkey_ssh::default_public_key_path;
use anyhow::{anyhow, bail, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Optional settings from `~/.config/addkey/config.toml`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Container tool binary
    pub lxc_binary: Option<String>,

    /// Public key file to add
    pub key_path: Option<PathBuf>,

    /// authorized_keys location inside the container
    pub authorized_keys_path: Option<String>,
}

impl FileConfig {
    /// Returns the default config file path (~/.config/addkey/config.toml)
    pub fn default_path(home: &Path) -> PathBuf {
        home.join(".config").join("addkey").join("config.toml")
    }

    /// Loads a config file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("failed to read config file {}: {e}", path.display()))?;
        Self::parse(path, &content)
    }

    /// Loads a config file, treating a missing file as empty
    pub fn load_if_exists(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => bail!("failed to read config file {}: {e}", path.display()),
        }
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| anyhow!("failed to parse config file {}: {e}", path.display()))
    }
}

/// Everything one run needs, with all defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub key_path: PathBuf,
    pub lxc_binary: String,
    pub remote: RemoteFile,
}

impl Settings {
    /// Apply precedence: CLI/env, then config file, then defaults.
    ///
    /// `home` is only consulted when no key path is given anywhere.
    pub fn resolve(cli: &Cli, file: FileConfig, home: Option<&Path>) -> Result<Self> {
        let key_path = match cli.identity.clone().or(file.key_path) {
            Some(path) => path,
            None => {
                let home = home.ok_or_else(|| {
                    anyhow!("could not determine home directory; pass -i PUBKEYFILE")
                })?;
                default_public_key_path(home)
            }
        };

        let lxc_binary = cli
            .lxc
            .clone()
            .or(file.lxc_binary)
            .unwrap_or_else(|| DEFAULT_LXC_BINARY.to_string());

        let remote_path = file
            .authorized_keys_path
            .unwrap_or_else(|| ROOT_AUTHORIZED_KEYS.to_string());

        Ok(Self {
            key_path,
            lxc_binary,
            remote: RemoteFile::new(cli.container.clone(), remote_path),
        })
    }
}
