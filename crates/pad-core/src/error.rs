//! Error types for Pad core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Messages are user-facing; the CLI layer maps variants to exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Pad operations.
pub type Result<T> = std::result::Result<T, PadError>;

/// Core error type for Pad operations.
#[derive(Debug, Error)]
pub enum PadError {
    /// Ciphertext exists but the key that sealed it does not
    #[error("Encrypted scratchpad found but no key. Place your key at {}", path.display())]
    NoKey { path: PathBuf },

    /// Authentication tag mismatch: wrong key or tampered payload
    #[error("Decryption failed. Wrong key?")]
    DecryptFailed,

    /// 1-based position outside the current sequence
    #[error("Entry {n} does not exist. Scratchpad has {total} entries.")]
    EntryRange { n: usize, total: usize },

    /// Envelope shorter than its nonce prefix
    #[error("ciphertext too short: {len} bytes")]
    EnvelopeTooShort { len: usize },

    /// Key material of the wrong length
    #[error("invalid key size: got {got} bytes, want {want}")]
    InvalidKeySize { got: usize, want: usize },

    /// Key file missing on disk
    #[error("key not found: {}", .0.display())]
    KeyNotFound(PathBuf),

    /// System random source failed
    #[error("random source failed: {0}")]
    RandomSource(String),

    /// Encryption error other than authentication failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Neither merge artifact could be read
    #[error("no conflict files found ({name}.ours / {name}.theirs)")]
    NoConflictFiles { name: String },

    /// Conflict resolution requested for a plaintext store
    #[error("resolve is only needed for encrypted scratchpads")]
    NotEncrypted,

    /// Blob payload over the size ceiling
    #[error("file too large: {size} bytes (max {max})")]
    BlobTooLarge { size: usize, max: usize },

    /// Blob-only edit on a plain entry
    #[error("entry {0} is not a blob entry")]
    NotABlob(usize),

    /// Invalid user input
    #[error("{0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
