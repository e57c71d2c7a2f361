//! Newline-delimited entry encoding.
//!
//! Each entry is one line. Blank lines carry no entry, so an empty sequence
//! encodes to zero bytes and zero bytes decode to an empty sequence.
//!
//! Payloads must be UTF-8. Bytes that are not are rejected rather than
//! replaced, since a replacement would be written back on the next save.

use std::str::Utf8Error;

/// Split a payload into entries, dropping empty lines.
pub fn decode(data: &[u8]) -> Result<Vec<String>, Utf8Error> {
    let text = std::str::from_utf8(data)?;
    Ok(text
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Join entries with newlines and terminate with exactly one newline.
pub fn encode(entries: &[String]) -> Vec<u8> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut out = entries.join("\n").into_bytes();
    out.push(b'\n');
    out
}
