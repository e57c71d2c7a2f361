//! Blob entries: a label and binary data packed into one line.
//!
//! Format: `label:::<base64(data)>`. A malformed blob is just a plain entry.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Separates the label from the base64-encoded content.
pub const BLOB_SEP: &str = ":::";

/// Largest attachment accepted, measured before encoding.
pub const MAX_BLOB_SIZE: usize = 64 * 1024;

/// A decoded blob entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub label: String,
    pub data: Vec<u8>,
}

/// True if the entry contains the blob separator.
pub fn is_blob(entry: &str) -> bool {
    entry.contains(BLOB_SEP)
}

/// Parse a blob entry at the first separator.
///
/// Returns `None` for plain entries and for undecodable base64.
pub fn split_blob(entry: &str) -> Option<Blob> {
    let (label, encoded) = entry.split_once(BLOB_SEP)?;
    let data = STANDARD.decode(encoded).ok()?;
    Some(Blob {
        label: label.to_string(),
        data,
    })
}

/// Build a blob entry. Size limits are the caller's concern.
pub fn make_blob(label: &str, data: &[u8]) -> String {
    format!("{}{}{}", label, BLOB_SEP, STANDARD.encode(data))
}

/// Render an entry for listings: `label [BLOB]` for blobs, verbatim otherwise.
pub fn display_entry(entry: &str) -> String {
    match split_blob(entry) {
        Some(blob) => format!("{} [BLOB]", blob.label),
        None => entry.to_string(),
    }
}
