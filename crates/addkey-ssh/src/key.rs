// ABOUTME: Local public key file loading.
// ABOUTME: Resolves the default id_rsa.pub location and reads exactly one key from a file.

use crate::codec::decode_authorized_keys;
use crate::error::{Result, SshError};
use crate::record::KeyRecord;
use std::path::{Path, PathBuf};

/// Get the default public key path (`<home>/.ssh/id_rsa.pub`).
pub fn default_public_key_path(home: &Path) -> PathBuf {
    home.join(".ssh").join("id_rsa.pub")
}

/// Load a public key file holding exactly one supported key.
///
/// A missing newline at the end of the file is tolerated here, unlike in
/// remote authorized_keys files, because hand-copied `.pub` files often lack it.
///
/// # Errors
/// Returns an error if the file cannot be read, does not parse, or does not
/// contain exactly one key.
pub fn load_public_key(path: &Path) -> Result<KeyRecord> {
    let mut data = std::fs::read(path).map_err(|e| SshError::ReadKey {
        path: path.to_path_buf(),
        source: e,
    })?;

    if data.last().is_some_and(|b| *b != b'\n') {
        data.push(b'\n');
    }

    let mut records = decode_authorized_keys(data.as_slice())?;
    if records.len() != 1 {
        return Err(SshError::KeyCount {
            path: path.to_path_buf(),
            count: records.len(),
        });
    }

    Ok(records.remove(0))
}
