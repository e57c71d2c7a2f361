//! JSON output formatting for entries.

use pad_core::codec::{display_entry, split_blob};
use pad_core::Conflict;

/// Convert an entry to JSON for output.
pub fn entry_json(index: usize, entry: &str) -> serde_json::Value {
    serde_json::json!({
        "index": index,
        "text": display_entry(entry),
        "blob": split_blob(entry).is_some(),
    })
}

/// Convert entries to a JSON array, numbered from 1.
pub fn entries_json(entries: &[String]) -> serde_json::Value {
    serde_json::Value::Array(
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| entry_json(i + 1, entry))
            .collect(),
    )
}

/// Both sides of a conflict; a side that did not decrypt is `null`.
pub fn conflict_json(conflict: &Conflict) -> serde_json::Value {
    serde_json::json!({
        "ours": conflict.ours.as_deref().map(entries_json),
        "theirs": conflict.theirs.as_deref().map(entries_json),
    })
}

pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pad_core::codec::make_blob;

    #[test]
    fn test_entries_json_numbers_from_one() {
        let entries = vec!["first".to_string(), make_blob("cert.pem", b"x")];
        let value = entries_json(&entries);

        assert_eq!(value[0]["index"], 1);
        assert_eq!(value[0]["text"], "first");
        assert_eq!(value[0]["blob"], false);
        assert_eq!(value[1]["index"], 2);
        assert_eq!(value[1]["text"], "cert.pem [BLOB]");
        assert_eq!(value[1]["blob"], true);
    }

    #[test]
    fn test_conflict_json_missing_side_is_null() {
        let conflict = Conflict {
            ours: Some(vec!["a".to_string()]),
            theirs: None,
        };
        let value = conflict_json(&conflict);

        assert_eq!(value["ours"][0]["text"], "a");
        assert!(value["theirs"].is_null());
    }
}
