//! Merge-conflict inspection for encrypted payloads.
//!
//! Version control cannot merge ciphertext, so a conflicted merge leaves
//! `scratchpad.enc.ours` and `scratchpad.enc.theirs` beside the payload.
//! Each side is decrypted on its own with the store's key; nothing is written.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::codec::decode;
use crate::config::FILE_SCRATCHPAD_ENC;
use crate::crypto::{self, ScratchpadKey};
use crate::error::{PadError, Result};
use crate::store::Store;

/// Decrypted contents of both merge sides. `None` means that side was
/// missing or could not be decrypted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conflict {
    pub ours: Option<Vec<String>>,
    pub theirs: Option<Vec<String>>,
}

/// Why one side did not produce entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SideFailure {
    Missing,
    Undecryptable,
}

impl Store {
    /// Decrypt both merge sides for display.
    ///
    /// Succeeds when at least one side decrypts. When neither does, reports
    /// `NoConflictFiles` if both are absent and `DecryptFailed` otherwise.
    pub fn resolve_conflict(&self) -> Result<Conflict> {
        if !self.config().mode.is_encrypted() {
            return Err(PadError::NotEncrypted);
        }

        let key = self.load_key()?;
        let (ours_path, theirs_path) = self.config().conflict_paths();

        let ours = read_side(&key, &ours_path);
        let theirs = read_side(&key, &theirs_path);

        match (ours, theirs) {
            (Err(SideFailure::Missing), Err(SideFailure::Missing)) => {
                Err(PadError::NoConflictFiles {
                    name: FILE_SCRATCHPAD_ENC.to_string(),
                })
            }
            (Err(_), Err(_)) => Err(PadError::DecryptFailed),
            (ours, theirs) => Ok(Conflict {
                ours: ours.ok(),
                theirs: theirs.ok(),
            }),
        }
    }
}

/// Read and decrypt one side. Any read failure counts as a missing side.
fn read_side(
    key: &ScratchpadKey,
    path: &Path,
) -> std::result::Result<Vec<String>, SideFailure> {
    let data = fs::read(path).map_err(|err| {
        debug!(path = %path.display(), error = %err, "conflict side unreadable");
        SideFailure::Missing
    })?;

    let plaintext = crypto::decrypt(key, &data).map_err(|err| {
        debug!(path = %path.display(), error = %err, "conflict side did not decrypt");
        SideFailure::Undecryptable
    })?;

    decode(&plaintext).map_err(|err| {
        debug!(path = %path.display(), error = %err, "conflict side is not UTF-8");
        SideFailure::Undecryptable
    })
}
