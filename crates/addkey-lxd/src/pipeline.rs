// ABOUTME: The add-key pipeline: load key, pull remote file, merge, push it back.
// ABOUTME: The local scratch file is removed on every exit path.

use crate::error::{AddKeyError, Result};
use crate::transport::{FileAttrs, RemoteFile, Transport};
use addkey_ssh::{
    compute_fingerprint, decode_authorized_keys, encode_authorized_keys, load_public_key,
    KeyRecord,
};
use std::path::Path;
use tempfile::NamedTempFile;

/// Prefix for the local scratch file.
const TEMP_PREFIX: &str = "addkey";

/// Append the key in `key_path` to `remote` through `transport`.
///
/// Runs strictly in order: load the local key, pull the remote file into a
/// scratch file, decode it, refuse duplicates, append, encode, push with
/// root:root 0640. Any failure aborts the run and leaves the remote file as
/// it was. The scratch file is deleted when this function returns.
///
/// Returns the record that was added.
///
/// # Errors
/// One [`AddKeyError`] variant per step; see its documentation.
pub fn add_key<T: Transport + ?Sized>(
    transport: &T,
    remote: &RemoteFile,
    key_path: &Path,
) -> Result<KeyRecord> {
    let new_key = load_public_key(key_path).map_err(|source| AddKeyError::KeyRead {
        path: key_path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %key_path.display(),
        algorithm = %new_key.algorithm(),
        "Loaded local public key"
    );

    let scratch = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile()
        .map_err(AddKeyError::TempFile)?;

    let outcome = merge_via(transport, remote, new_key, scratch.path());
    release(scratch);
    outcome
}

/// Pull, merge and push through the scratch file at `scratch`.
fn merge_via<T: Transport + ?Sized>(
    transport: &T,
    remote: &RemoteFile,
    new_key: KeyRecord,
    scratch: &Path,
) -> Result<KeyRecord> {
    transport
        .pull(remote, scratch)
        .map_err(|source| AddKeyError::Pull {
            remote: remote.to_string(),
            source,
        })?;

    // Read by path: the transport may have replaced the file rather than
    // writing through our handle.
    let pulled = std::fs::read(scratch).map_err(|e| AddKeyError::Decode {
        remote: remote.to_string(),
        source: e.into(),
    })?;
    let mut records =
        decode_authorized_keys(pulled.as_slice()).map_err(|source| AddKeyError::Decode {
            remote: remote.to_string(),
            source,
        })?;
    tracing::debug!(remote = %remote, count = records.len(), "Decoded remote authorized_keys");

    ensure_absent(&records, &new_key)?;

    records.push(new_key);
    let encoded = encode_records(&records)?;

    std::fs::write(scratch, encoded).map_err(AddKeyError::WriteTemp)?;

    transport
        .push(scratch, remote, &FileAttrs::ROOT_AUTHORIZED_KEYS)
        .map_err(|source| AddKeyError::Push {
            remote: remote.to_string(),
            source,
        })?;
    tracing::debug!(remote = %remote, count = records.len(), "Pushed authorized_keys");

    records.pop().ok_or(AddKeyError::NoKeys)
}

/// Close and delete the scratch file. Failures are logged, not returned.
fn release(scratch: NamedTempFile) {
    let path = scratch.path().to_path_buf();
    if let Err(e) = scratch.close() {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove temp file");
    }
}

/// Fail with `DuplicateKey` if `candidate`'s key material is already present.
fn ensure_absent(records: &[KeyRecord], candidate: &KeyRecord) -> Result<()> {
    for existing in records {
        if existing.same_key(candidate).map_err(AddKeyError::Encode)? {
            let fingerprint =
                compute_fingerprint(candidate.key()).map_err(AddKeyError::Encode)?;
            return Err(AddKeyError::DuplicateKey { fingerprint });
        }
    }

    Ok(())
}

/// Encode the merged file; an empty file is never written.
fn encode_records(records: &[KeyRecord]) -> Result<String> {
    if records.is_empty() {
        return Err(AddKeyError::NoKeys);
    }
    encode_authorized_keys(records).map_err(AddKeyError::Encode)
}
