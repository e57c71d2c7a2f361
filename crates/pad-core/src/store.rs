//! Scratchpad persistence.
//!
//! Read path: resolve payload path from mode, treat a missing payload as an
//! empty store, otherwise decode (plaintext) or load key + decrypt + decode.
//!
//! Write path: encode, then either write directly (plaintext) or make sure a
//! key exists, encrypt and replace the payload atomically.
//!
//! Key auto-provisioning happens only when neither key nor payload exists.
//! A payload without its key is never "healed" with a new key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::codec::{decode, encode};
use crate::config::StoreConfig;
use crate::crypto::{self, ScratchpadKey};
use crate::error::{PadError, Result};
use crate::ops::Scratchpad;

/// What a save did besides writing the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Set when this save generated the store's key.
    pub key_created: Option<PathBuf>,
}

/// Scratchpad store bound to one project configuration.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn payload_path(&self) -> PathBuf {
        self.config.payload_path()
    }

    pub fn key_path(&self) -> PathBuf {
        self.config.key_path()
    }

    /// Read and decode all entries.
    ///
    /// # Errors
    ///
    /// - `PadError::NoKey` if an encrypted payload exists without a key
    /// - `PadError::DecryptFailed` on a wrong key or corrupted payload
    /// - `PadError::InvalidInput` if the payload is not UTF-8
    /// - `PadError::Io` for read failures other than a missing payload
    pub fn read_entries(&self) -> Result<Vec<String>> {
        let path = self.payload_path();
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no scratchpad yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        if !self.config.mode.is_encrypted() {
            let entries = decode_payload(&path, &data)?;
            debug!(path = %path.display(), entries = entries.len(), "read plaintext scratchpad");
            return Ok(entries);
        }

        let key = self.load_key()?;
        let plaintext = crypto::decrypt(&key, &data).map_err(|_| PadError::DecryptFailed)?;
        let entries = decode_payload(&path, &plaintext)?;
        debug!(path = %path.display(), entries = entries.len(), "read encrypted scratchpad");
        Ok(entries)
    }

    /// Encode and persist the whole sequence, replacing the payload.
    pub fn write_entries(&self, entries: &[String]) -> Result<SaveOutcome> {
        let path = self.payload_path();
        let plaintext = encode(entries);

        if !self.config.mode.is_encrypted() {
            crate::fs::write_atomic(&path, &plaintext)?;
            debug!(path = %path.display(), entries = entries.len(), "wrote plaintext scratchpad");
            return Ok(SaveOutcome::default());
        }

        let key_created = self.ensure_key()?;
        let key = self.load_key()?;
        let envelope = crypto::encrypt(&key, &plaintext)?;
        crate::fs::write_atomic(&path, &envelope)?;
        debug!(path = %path.display(), entries = entries.len(), "wrote encrypted scratchpad");

        Ok(SaveOutcome { key_created })
    }

    pub fn load(&self) -> Result<Scratchpad> {
        self.read_entries().map(Scratchpad::new)
    }

    pub fn save(&self, pad: &Scratchpad) -> Result<SaveOutcome> {
        self.write_entries(pad.entries())
    }

    /// Load, apply `mutate`, and save. Nothing is written if `mutate` fails.
    pub fn update<T, F>(&self, mutate: F) -> Result<(T, SaveOutcome)>
    where
        F: FnOnce(&mut Scratchpad) -> Result<T>,
    {
        let mut pad = self.load()?;
        let value = mutate(&mut pad)?;
        let outcome = self.save(&pad)?;
        Ok((value, outcome))
    }

    /// Load the store's key, reporting a missing key as `NoKey`.
    pub fn load_key(&self) -> Result<ScratchpadKey> {
        crypto::load_key(&self.key_path()).map_err(|err| match err {
            PadError::KeyNotFound(path) => PadError::NoKey { path },
            other => other,
        })
    }

    /// Generate a key on first use.
    ///
    /// Returns the key path when a key was created. Fails with `NoKey` when a
    /// payload already exists but its key does not.
    pub fn ensure_key(&self) -> Result<Option<PathBuf>> {
        let key_path = self.key_path();
        if key_path.exists() {
            return Ok(None);
        }
        if self.payload_path().exists() {
            return Err(PadError::NoKey { path: key_path });
        }

        let key = crypto::generate_key()?;
        crypto::save_key(&key_path, &key)?;
        info!(path = %key_path.display(), "generated scratchpad key");

        let ignore_path = self.config.ignore_file_path();
        let entry = self.config.key_ignore_entry();
        if let Err(err) = ensure_ignore_entry(&ignore_path, &entry) {
            warn!(path = %ignore_path.display(), error = %err, "could not update ignore file");
        }

        Ok(Some(key_path))
    }
}

fn decode_payload(path: &Path, data: &[u8]) -> Result<Vec<String>> {
    decode(data).map_err(|err| {
        PadError::InvalidInput(format!(
            "{} is not valid UTF-8 ({}); fix or remove it",
            path.display(),
            err
        ))
    })
}

/// Append `entry` as its own line to the ignore file unless already listed.
///
/// Returns `true` when the file was changed.
pub fn ensure_ignore_entry(ignore_path: &Path, entry: &str) -> std::io::Result<bool> {
    let content = match fs::read_to_string(ignore_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err),
    };

    if content.lines().any(|line| line.trim() == entry) {
        return Ok(false);
    }

    let sep = if !content.is_empty() && !content.ends_with('\n') {
        "\n"
    } else {
        ""
    };
    fs::write(ignore_path, format!("{}{}{}\n", content, sep, entry))?;
    Ok(true)
}
