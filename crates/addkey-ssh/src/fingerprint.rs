// ABOUTME: SSH public key fingerprint computation.
// ABOUTME: Produces "SHA256:<base64>" fingerprints in the same form ssh-keygen prints.

use crate::error::{Result, SshError};
use base64::Engine;
use sha2::{Digest, Sha256};
use ssh_key::PublicKey;

/// Compute the SHA256 fingerprint of a public key.
///
/// The hash covers the SSH wire encoding of the key:
///
/// - Algorithm name as SSH string (4-byte length prefix + name)
/// - Algorithm-specific key fields
///
/// The digest is rendered as unpadded standard base64 behind a `SHA256:`
/// prefix, matching `ssh-keygen -l`.
///
/// # Errors
/// Returns `SshError::SerializeKey` if the key cannot be encoded.
pub fn compute_fingerprint(public_key: &PublicKey) -> Result<String> {
    let wire_data = public_key.to_bytes().map_err(SshError::SerializeKey)?;

    let mut hasher = Sha256::new();
    hasher.update(&wire_data);
    let hash = hasher.finalize();

    Ok(format!(
        "SHA256:{}",
        base64::engine::general_purpose::STANDARD_NO_PAD.encode(hash)
    ))
}
