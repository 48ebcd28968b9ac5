// ABOUTME: Command-line arguments for addkey.
// ABOUTME: `addkey [-i PUBKEYFILE] <container>` plus tool and config overrides.

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addkey")]
#[command(about = "Add a public key to root's authorized_keys in an LXD container")]
#[command(version)]
pub struct Cli {
    /// Public key file to add (defaults to ~/.ssh/id_rsa.pub)
    #[arg(short = 'i', value_name = "PUBKEYFILE")]
    pub identity: Option<PathBuf>,

    /// Container tool binary (defaults to lxc)
    #[arg(long, env = "ADDKEY_LXC", value_name = "PATH")]
    pub lxc: Option<String>,

    /// Configuration file (defaults to ~/.config/addkey/config.toml)
    #[arg(long, env = "ADDKEY_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Target container
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub container: String,
}
