//! Positional operations over the entry sequence.
//!
//! Positions are 1-based at this API and derived from current order; nothing
//! about an entry's position is persisted.

use crate::codec::{is_blob, make_blob, split_blob, BLOB_SEP, MAX_BLOB_SIZE};
use crate::error::{PadError, Result};

/// In-memory entry sequence of one scratchpad.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scratchpad {
    entries: Vec<String>,
}

impl Scratchpad {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map a 1-based position to a vector index.
    fn index(&self, n: usize) -> Result<usize> {
        if n < 1 || n > self.entries.len() {
            return Err(PadError::EntryRange {
                n,
                total: self.entries.len(),
            });
        }
        Ok(n - 1)
    }

    /// Entry at position `n`.
    pub fn get(&self, n: usize) -> Result<&str> {
        let idx = self.index(n)?;
        Ok(&self.entries[idx])
    }

    /// Append an entry; returns its 1-based position.
    pub fn add(&mut self, text: &str) -> Result<usize> {
        validate_text(text)?;
        self.entries.push(text.to_string());
        Ok(self.entries.len())
    }

    /// Append a blob entry built from `label` and `data`.
    pub fn add_blob(&mut self, label: &str, data: &[u8]) -> Result<usize> {
        check_blob_size(data)?;
        validate_label(label)?;
        self.entries.push(make_blob(label, data));
        Ok(self.entries.len())
    }

    /// Delete the entry at `n`; later entries shift down by one.
    pub fn remove(&mut self, n: usize) -> Result<String> {
        let idx = self.index(n)?;
        Ok(self.entries.remove(idx))
    }

    /// Replace the entry at `n` in place.
    pub fn edit(&mut self, n: usize, text: &str) -> Result<()> {
        let idx = self.index(n)?;
        validate_text(text)?;
        self.entries[idx] = text.to_string();
        Ok(())
    }

    /// Turn entry `n` into `old + " " + text`.
    pub fn append(&mut self, n: usize, text: &str) -> Result<()> {
        let idx = self.index(n)?;
        if is_blob(&self.entries[idx]) {
            return Err(PadError::InvalidInput(
                "cannot append to a blob entry".to_string(),
            ));
        }
        validate_text(text)?;
        let updated = format!("{} {}", self.entries[idx], text);
        validate_text(&updated)?;
        self.entries[idx] = updated;
        Ok(())
    }

    /// Turn entry `n` into `text + " " + old`.
    pub fn prepend(&mut self, n: usize, text: &str) -> Result<()> {
        let idx = self.index(n)?;
        if is_blob(&self.entries[idx]) {
            return Err(PadError::InvalidInput(
                "cannot prepend to a blob entry".to_string(),
            ));
        }
        validate_text(text)?;
        let updated = format!("{} {}", text, self.entries[idx]);
        validate_text(&updated)?;
        self.entries[idx] = updated;
        Ok(())
    }

    /// Rewrite the label and/or data of blob entry `n`, keeping whichever
    /// part is not supplied.
    pub fn edit_blob(&mut self, n: usize, label: Option<&str>, data: Option<&[u8]>) -> Result<()> {
        let idx = self.index(n)?;
        let blob = split_blob(&self.entries[idx]).ok_or(PadError::NotABlob(n))?;

        let new_label = label.unwrap_or(blob.label.as_str());
        let new_data = match data {
            Some(bytes) => {
                check_blob_size(bytes)?;
                bytes
            }
            None => blob.data.as_slice(),
        };
        validate_label(new_label)?;

        self.entries[idx] = make_blob(new_label, new_data);
        Ok(())
    }

    /// Move entry `from` to position `to`.
    ///
    /// `to` is read against the sequence with the moved entry already taken
    /// out, so moving 1 to 3 in `[A, B, C]` gives `[B, C, A]`.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<()> {
        let src = self.index(from)?;
        let dst = self.index(to)?;
        let entry = self.entries.remove(src);
        self.entries.insert(dst, entry);
        Ok(())
    }
}

impl From<Vec<String>> for Scratchpad {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

/// Reject text the newline codec cannot round-trip.
fn validate_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(PadError::InvalidInput("entry text is empty".to_string()));
    }
    if text.contains('\n') || text.contains('\r') {
        return Err(PadError::InvalidInput(
            "entry text must be a single line".to_string(),
        ));
    }
    Ok(())
}

fn validate_label(label: &str) -> Result<()> {
    if label.is_empty() {
        return Err(PadError::InvalidInput("blob label is empty".to_string()));
    }
    if label.contains('\n') || label.contains('\r') {
        return Err(PadError::InvalidInput(
            "blob label must be a single line".to_string(),
        ));
    }
    if label.contains(BLOB_SEP) {
        return Err(PadError::InvalidInput(format!(
            "blob label must not contain {}",
            BLOB_SEP
        )));
    }
    Ok(())
}

fn check_blob_size(data: &[u8]) -> Result<()> {
    if data.len() > MAX_BLOB_SIZE {
        return Err(PadError::BlobTooLarge {
            size: data.len(),
            max: MAX_BLOB_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::display_entry;

    fn pad(items: &[&str]) -> Scratchpad {
        Scratchpad::new(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_add_reports_new_position() {
        let mut p = Scratchpad::default();
        assert_eq!(p.add("x").unwrap(), 1);
        assert_eq!(p.add("y").unwrap(), 2);
        assert_eq!(p.entries(), ["x", "y"]);
    }

    #[test]
    fn test_add_rejects_newline_and_empty() {
        let mut p = Scratchpad::default();
        assert!(matches!(p.add("a\nb"), Err(PadError::InvalidInput(_))));
        assert!(matches!(p.add(""), Err(PadError::InvalidInput(_))));
        assert!(p.is_empty());
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let mut p = pad(&["one", "two", "three"]);
        assert_eq!(p.remove(2).unwrap(), "two");
        assert_eq!(p.entries(), ["one", "three"]);
    }

    #[test]
    fn test_remove_out_of_range_cites_total() {
        let mut p = pad(&["only"]);
        let err = p.remove(5).unwrap_err();
        assert!(matches!(err, PadError::EntryRange { n: 5, total: 1 }));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_zero_is_out_of_range() {
        let p = pad(&["a"]);
        assert!(matches!(
            p.get(0),
            Err(PadError::EntryRange { n: 0, total: 1 })
        ));
    }

    #[test]
    fn test_edit_in_place() {
        let mut p = pad(&["a", "b", "c"]);
        p.edit(2, "B").unwrap();
        assert_eq!(p.entries(), ["a", "B", "c"]);
    }

    #[test]
    fn test_edit_empty_sequence() {
        let mut p = Scratchpad::default();
        assert!(matches!(
            p.edit(1, "x"),
            Err(PadError::EntryRange { n: 1, total: 0 })
        ));
    }

    #[test]
    fn test_append_and_prepend() {
        let mut p = pad(&["check DNS"]);
        p.append(1, "on staging").unwrap();
        assert_eq!(p.get(1).unwrap(), "check DNS on staging");

        p.prepend(1, "URGENT:").unwrap();
        assert_eq!(p.get(1).unwrap(), "URGENT: check DNS on staging");
    }

    #[test]
    fn test_append_rejects_blob() {
        let mut p = Scratchpad::default();
        p.add_blob("cert.pem", b"-----BEGIN-----").unwrap();

        let err = p.append(1, "more").unwrap_err();
        assert_eq!(err.to_string(), "cannot append to a blob entry");
        let err = p.prepend(1, "more").unwrap_err();
        assert_eq!(err.to_string(), "cannot prepend to a blob entry");
    }

    #[test]
    fn test_append_and_prepend_reject_empty_text() {
        let mut p = pad(&["old"]);

        assert!(matches!(p.append(1, ""), Err(PadError::InvalidInput(_))));
        assert!(matches!(p.prepend(1, ""), Err(PadError::InvalidInput(_))));
        assert_eq!(p.entries(), ["old"]);
    }

    #[test]
    fn test_move_last_to_first() {
        let mut p = pad(&["A", "B", "C"]);
        p.move_entry(3, 1).unwrap();
        assert_eq!(p.entries(), ["C", "A", "B"]);
    }

    #[test]
    fn test_move_forward_uses_post_removal_position() {
        let mut p = pad(&["A", "B", "C", "D"]);
        p.move_entry(1, 3).unwrap();
        assert_eq!(p.entries(), ["B", "C", "A", "D"]);
    }

    #[test]
    fn test_move_to_same_position_is_noop() {
        let mut p = pad(&["A", "B", "C"]);
        p.move_entry(2, 2).unwrap();
        assert_eq!(p.entries(), ["A", "B", "C"]);
    }

    #[test]
    fn test_move_out_of_range_destination() {
        let mut p = pad(&["A", "B"]);
        let err = p.move_entry(1, 3).unwrap_err();
        assert!(matches!(err, PadError::EntryRange { n: 3, total: 2 }));
        assert_eq!(p.entries(), ["A", "B"]);
    }

    #[test]
    fn test_get_on_empty_matches_out_of_range_shape() {
        let empty = Scratchpad::default();
        let full = pad(&["a", "b"]);

        let e1 = empty.get(1).unwrap_err().to_string();
        let e2 = full.get(9).unwrap_err().to_string();

        assert_eq!(e1, "Entry 1 does not exist. Scratchpad has 0 entries.");
        assert_eq!(e2, "Entry 9 does not exist. Scratchpad has 2 entries.");
    }

    #[test]
    fn test_add_blob_and_display() {
        let mut p = Scratchpad::default();
        let n = p.add_blob("file.txt", b"hello").unwrap();
        assert_eq!(n, 1);
        assert_eq!(display_entry(p.get(1).unwrap()), "file.txt [BLOB]");
    }

    #[test]
    fn test_add_blob_too_large() {
        let mut p = Scratchpad::default();
        let data = vec![0u8; MAX_BLOB_SIZE + 1];
        let err = p.add_blob("big.bin", &data).unwrap_err();
        assert_eq!(err.to_string(), "file too large: 65537 bytes (max 65536)");
        assert!(p.is_empty());
    }

    #[test]
    fn test_edit_blob_label_keeps_data() {
        let mut p = Scratchpad::default();
        p.add_blob("old", b"payload").unwrap();

        p.edit_blob(1, Some("new"), None).unwrap();

        let blob = split_blob(p.get(1).unwrap()).unwrap();
        assert_eq!(blob.label, "new");
        assert_eq!(blob.data, b"payload");
    }

    #[test]
    fn test_edit_blob_data_keeps_label() {
        let mut p = Scratchpad::default();
        p.add_blob("notes.md", b"v1").unwrap();

        p.edit_blob(1, None, Some(&b"v2"[..])).unwrap();

        let blob = split_blob(p.get(1).unwrap()).unwrap();
        assert_eq!(blob.label, "notes.md");
        assert_eq!(blob.data, b"v2");
    }

    #[test]
    fn test_blob_label_cannot_hold_separator() {
        let mut p = Scratchpad::default();
        let err = p.add_blob("a:::b", b"data").unwrap_err();
        assert!(matches!(err, PadError::InvalidInput(_)));
        assert!(p.is_empty());
    }

    #[test]
    fn test_empty_blob_label_rejected() {
        let mut p = Scratchpad::default();
        assert!(matches!(p.add_blob("", b"data"), Err(PadError::InvalidInput(_))));

        p.add_blob("keep.txt", b"data").unwrap();
        let err = p.edit_blob(1, Some(""), None).unwrap_err();
        assert_eq!(err.to_string(), "blob label is empty");
        assert_eq!(display_entry(p.get(1).unwrap()), "keep.txt [BLOB]");
    }

    #[test]
    fn test_edit_blob_on_plain_entry() {
        let mut p = pad(&["plain"]);
        let err = p.edit_blob(1, Some("label"), None).unwrap_err();
        assert_eq!(err.to_string(), "entry 1 is not a blob entry");
    }
}
