// ABOUTME: Key record model for one authorized_keys line.
// ABOUTME: Parses "<algorithm> <base64> <comment>" lines and renders them back.

use crate::error::{Result, SshError};
use ssh_key::PublicKey;
use std::str::FromStr;

/// Key algorithms accepted in an authorized_keys line.
pub const SUPPORTED_ALGORITHMS: [&str; 5] = [
    "ssh-rsa",
    "ssh-dss",
    "ecdsa-sha2-nistp256",
    "ecdsa-sha2-nistp384",
    "ecdsa-sha2-nistp521",
];

/// Look up a leading token in the supported algorithm set.
pub fn supported_algorithm(token: &str) -> Option<&'static str> {
    SUPPORTED_ALGORITHMS.iter().copied().find(|algo| *algo == token)
}

/// One parsed authorized_keys entry: a public key and its comment.
///
/// Records are immutable once built. The comment is kept outside the
/// `PublicKey` so that the key itself always carries an empty comment and
/// compares by key material alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    key: PublicKey,
    comment: String,
}

impl KeyRecord {
    /// Build a record from a public key and a comment.
    ///
    /// Surrounding whitespace in the comment is dropped, since it cannot
    /// survive a trip through the line format anyway.
    pub fn new(key: PublicKey, comment: impl AsRef<str>) -> Self {
        let key = PublicKey::from(key.key_data().clone());
        Self {
            key,
            comment: comment.as_ref().trim().to_string(),
        }
    }

    /// The public key, without comment.
    pub fn key(&self) -> &PublicKey {
        &self.key
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Algorithm identifier, e.g. `ecdsa-sha2-nistp256`.
    pub fn algorithm(&self) -> String {
        self.key.algorithm().as_str().to_string()
    }

    /// SSH wire encoding of the key material (algorithm name + key blob).
    ///
    /// This is what duplicate detection compares; the comment is not part of it.
    ///
    /// # Errors
    /// Returns `SshError::SerializeKey` if the key cannot be encoded.
    pub fn wire_bytes(&self) -> Result<Vec<u8>> {
        self.key.to_bytes().map_err(SshError::SerializeKey)
    }

    /// True if both records hold the same key material, whatever their comments.
    ///
    /// # Errors
    /// Returns `SshError::SerializeKey` if either key cannot be encoded.
    pub fn same_key(&self, other: &KeyRecord) -> Result<bool> {
        Ok(self.wire_bytes()? == other.wire_bytes()?)
    }

    /// Parse a single authorized_keys line.
    ///
    /// # Errors
    /// See [`KeyRecord::parse_numbered`].
    pub fn parse_line(line: &str) -> Result<Self> {
        Self::parse_numbered(1, line)
    }

    /// Parse a line, reporting errors against `line_no`.
    ///
    /// The leading token must be one of [`SUPPORTED_ALGORITHMS`], followed by
    /// the base64 key blob and an optional free-text comment.
    ///
    /// # Errors
    /// - `SshError::UnsupportedAlgorithm` if the leading token is not supported
    ///   (this covers blank and `#` lines too)
    /// - `SshError::MalformedLine` if the key blob does not decode or holds a
    ///   different key type than the leading token names
    pub fn parse_numbered(line_no: usize, line: &str) -> Result<Self> {
        let line = line.trim();
        let token = line.split_ascii_whitespace().next().unwrap_or_default();

        let Some(algorithm) = supported_algorithm(token) else {
            return Err(SshError::UnsupportedAlgorithm {
                line: line_no,
                algorithm: token.to_string(),
            });
        };

        let rest = line[token.len()..].trim_start();
        let (encoded, comment) = match rest.split_once(|c: char| c.is_ascii_whitespace()) {
            Some((encoded, comment)) => (encoded, comment.trim()),
            None => (rest, ""),
        };

        let key = PublicKey::from_openssh(&format!("{algorithm} {encoded}")).map_err(|source| {
            SshError::MalformedLine {
                line: line_no,
                source,
            }
        })?;

        if key.algorithm().as_str() != algorithm {
            return Err(SshError::MalformedLine {
                line: line_no,
                source: ssh_key::Error::AlgorithmUnknown,
            });
        }

        Ok(Self::new(key, comment))
    }

    /// Render as `<algorithm> <base64> <comment>\n`.
    ///
    /// # Errors
    /// Returns `SshError::SerializeKey` if the key cannot be encoded.
    pub fn to_line(&self) -> Result<String> {
        let encoded = self.key.to_openssh().map_err(SshError::SerializeKey)?;
        Ok(format!("{} {}\n", encoded.trim(), self.comment))
    }
}

impl FromStr for KeyRecord {
    type Err = SshError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_line(s)
    }
}
