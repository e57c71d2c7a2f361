//! Scratchpad key generation and persistence.
//!
//! The key is 32 random bytes stored verbatim in a file that only its owner
//! can read. There is no derivation step and no rotation.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use zeroize::{Zeroizing, ZeroizeOnDrop};

use crate::error::{PadError, Result};

/// Length of a scratchpad key in bytes (256 bits for AES-256).
pub const KEY_SIZE: usize = 32;

/// A symmetric scratchpad key.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct ScratchpadKey {
    key: [u8; KEY_SIZE],
}

impl ScratchpadKey {
    /// Build a key from raw bytes, rejecting anything but exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let key: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| PadError::InvalidKeySize {
            got: bytes.len(),
            want: KEY_SIZE,
        })?;
        Ok(Self { key })
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl std::fmt::Debug for ScratchpadKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScratchpadKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Generate a fresh key from the system's secure random source.
pub fn generate_key() -> Result<ScratchpadKey> {
    let mut bytes = Zeroizing::new([0u8; KEY_SIZE]);
    getrandom::getrandom(&mut bytes[..])
        .map_err(|e| PadError::RandomSource(format!("generate key: {}", e)))?;
    ScratchpadKey::from_slice(&bytes[..])
}

/// Read a key file.
///
/// # Errors
///
/// - `PadError::KeyNotFound` if the file does not exist
/// - `PadError::InvalidKeySize` if it is not exactly 32 bytes
/// - `PadError::Io` for any other read failure
pub fn load_key(path: &Path) -> Result<ScratchpadKey> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => Zeroizing::new(bytes),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(PadError::KeyNotFound(path.to_path_buf()))
        }
        Err(err) => return Err(err.into()),
    };
    ScratchpadKey::from_slice(&bytes)
}

/// Write a key file readable and writable by its owner only.
///
/// Parent directories are created as needed.
pub fn save_key(path: &Path, key: &ScratchpadKey) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(key.as_bytes())?;
    file.sync_all()?;
    drop(file);

    crate::fs::set_owner_only(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_key_length_and_uniqueness() {
        let a = generate_key().unwrap();
        let b = generate_key().unwrap();
        assert_eq!(a.as_bytes().len(), KEY_SIZE);
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".context").join(".scratchpad.key");
        let key = generate_key().unwrap();

        save_key(&path, &key).unwrap();
        let loaded = load_key(&path).unwrap();

        assert_eq!(loaded.as_bytes(), key.as_bytes());
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_key_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join(".scratchpad.key");
        save_key(&path, &generate_key().unwrap()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_missing_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.key");

        let result = load_key(&path);
        assert!(matches!(result, Err(PadError::KeyNotFound(p)) if p == path));
    }

    #[test]
    fn test_load_wrong_size_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.key");
        std::fs::write(&path, [7u8; 16]).unwrap();

        let result = load_key(&path);
        assert!(matches!(
            result,
            Err(PadError::InvalidKeySize { got: 16, want: 32 })
        ));
    }

    #[test]
    fn test_key_debug_redacts() {
        let key = generate_key().unwrap();
        let debug_output = format!("{:?}", key);

        assert!(debug_output.contains("REDACTED"));
        let key_hex = hex::encode(&key.as_bytes()[..4]);
        assert!(!debug_output.contains(&key_hex));
    }
}
