// ABOUTME: Authorized-keys codec: byte stream to key records and back.
// ABOUTME: Decoding is all-or-nothing; every line must be newline-terminated.

use crate::error::{Result, SshError};
use crate::record::KeyRecord;
use std::io::{self, BufRead};

/// Decode an authorized_keys stream into records, in input order.
///
/// Every line must hold a supported key. A final line without a terminating
/// newline is rejected rather than dropped, so a truncated file never loses
/// its last key silently.
///
/// # Errors
/// - `SshError::UnsupportedAlgorithm` or `SshError::MalformedLine` for the
///   first bad line
/// - `SshError::UnterminatedLine` if the input ends mid-line
/// - `SshError::Io` if reading fails or a line is not UTF-8
pub fn decode_authorized_keys<R: BufRead>(mut reader: R) -> Result<Vec<KeyRecord>> {
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        if buf.last() != Some(&b'\n') {
            return Err(SshError::UnterminatedLine { line: line_no });
        }

        let line = std::str::from_utf8(&buf)
            .map_err(|e| SshError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        records.push(KeyRecord::parse_numbered(line_no, line)?);
    }

    Ok(records)
}

/// Encode one record as a newline-terminated line.
///
/// # Errors
/// Returns `SshError::SerializeKey` if the key cannot be encoded.
pub fn encode_record(record: &KeyRecord) -> Result<String> {
    record.to_line()
}

/// Encode records in order into authorized_keys text.
///
/// # Errors
/// Returns `SshError::SerializeKey` if any key cannot be encoded.
pub fn encode_authorized_keys(records: &[KeyRecord]) -> Result<String> {
    records.iter().map(encode_record).collect()
}
