// ABOUTME: Authorized-keys handling for addkey.
// ABOUTME: Provides the key record model, the line codec, key loading and fingerprints.

//! # addkey-ssh
//!
//! Reads and writes OpenSSH `authorized_keys` files.
//!
//! ## Features
//!
//! - **Key records**: one parsed `<algorithm> <base64> <comment>` line
//! - **Codec**: decode a whole file into records and encode them back, in order
//! - **Key loading**: read a local `.pub` file that must hold exactly one key
//! - **Fingerprinting**: `SHA256:` fingerprints as printed by `ssh-keygen -l`
//!
//! Only `ssh-rsa`, `ssh-dss` and the three NIST `ecdsa-sha2-*` algorithms are
//! accepted; any other line is an error.
//!
//! ## Example
//!
//! ```no_run
//! use addkey_ssh::{decode_authorized_keys, encode_authorized_keys, load_public_key};
//! use std::path::Path;
//!
//! let new_key = load_public_key(Path::new("/home/me/.ssh/id_rsa.pub")).expect("key should load");
//! let existing = std::fs::read("authorized_keys").expect("file should read");
//! let mut records = decode_authorized_keys(existing.as_slice()).expect("file should decode");
//! records.push(new_key);
//! let text = encode_authorized_keys(&records).expect("records should encode");
//! std::fs::write("authorized_keys", text).expect("file should write");
//! ```

mod codec;
mod error;
mod fingerprint;
mod key;
mod record;

#[cfg(test)]
mod fixtures;

// Re-export primary types and functions
pub use codec::{decode_authorized_keys, encode_authorized_keys, encode_record};
pub use error::{Result, SshError};
pub use fingerprint::compute_fingerprint;
pub use key::{default_public_key_path, load_public_key};
pub use record::{supported_algorithm, KeyRecord, SUPPORTED_ALGORITHMS};

// Re-export ssh_key types for convenience
pub use ssh_key::PublicKey;
