// ABOUTME: CLI library components for addkey.
// ABOUTME: Argument definitions, configuration resolution and the top-level run function.

//! # addkey-cli
//!
//! Provides the `addkey` binary:
//!
//! ```text
//! addkey [-i PUBKEYFILE] <container>
//! ```
//!
//! Appends the public key (default `~/.ssh/id_rsa.pub`) to
//! `/root/.ssh/authorized_keys` inside the named LXD container. Fails if the
//! key is already present. Prints nothing on success; set `RUST_LOG=info`
//! to see the fingerprint of the added key.

pub mod cli;
pub mod config;

use addkey_lxd::{add_key, LxcTransport};
use addkey_ssh::compute_fingerprint;
use anyhow::Result;
use cli::Cli;
use config::{FileConfig, Settings};

/// Resolve configuration and add the key.
pub fn run(cli: &Cli) -> Result<()> {
    let home = dirs::home_dir();

    let file = match (&cli.config, home.as_deref()) {
        (Some(path), _) => FileConfig::load(path)?,
        (None, Some(home)) => FileConfig::load_if_exists(&FileConfig::default_path(home))?,
        (None, None) => {
            tracing::warn!("Could not determine home directory, skipping config file");
            FileConfig::default()
        }
    };

    let settings = Settings::resolve(cli, file, home.as_deref())?;
    tracing::debug!(?settings, "Resolved settings");

    let transport = LxcTransport::new(&settings.lxc_binary);
    let added = add_key(&transport, &settings.remote, &settings.key_path)?;

    match compute_fingerprint(added.key()) {
        Ok(fingerprint) => tracing::info!(
            remote = %settings.remote,
            fingerprint = %fingerprint,
            comment = added.comment(),
            "Added key"
        ),
        Err(e) => tracing::warn!(error = %e, "Added key, but could not fingerprint it"),
    }

    Ok(())
}
