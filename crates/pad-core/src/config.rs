//! Store configuration.
//!
//! A `StoreConfig` is built once per invocation and handed to
//! [`Store::new`](crate::Store::new). Nothing here reads the environment.

use std::path::{Path, PathBuf};

/// Default context directory, relative to the project root.
pub const DIR_CONTEXT: &str = ".context";

/// Encrypted payload file name.
pub const FILE_SCRATCHPAD_ENC: &str = "scratchpad.enc";

/// Plaintext payload file name.
pub const FILE_SCRATCHPAD_MD: &str = "scratchpad.md";

/// Key file name.
pub const FILE_SCRATCHPAD_KEY: &str = ".scratchpad.key";

/// Project ignore-list file name.
pub const FILE_GITIGNORE: &str = ".gitignore";

/// Suffix of the "ours" merge artifact.
pub const SUFFIX_OURS: &str = ".ours";

/// Suffix of the "theirs" merge artifact.
pub const SUFFIX_THEIRS: &str = ".theirs";

/// Whether the payload is sealed at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreMode {
    #[default]
    Encrypted,
    Plaintext,
}

impl StoreMode {
    pub fn from_encrypt_flag(encrypt: bool) -> Self {
        if encrypt {
            Self::Encrypted
        } else {
            Self::Plaintext
        }
    }

    pub fn is_encrypted(&self) -> bool {
        matches!(self, Self::Encrypted)
    }
}

/// Immutable location and mode of one project's scratchpad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project root; the ignore-list file lives here.
    pub root: PathBuf,
    /// Context directory, usually relative to `root`.
    pub context_dir: PathBuf,
    pub mode: StoreMode,
}

impl StoreConfig {
    pub fn new(root: impl Into<PathBuf>, context_dir: impl Into<PathBuf>, mode: StoreMode) -> Self {
        Self {
            root: root.into(),
            context_dir: context_dir.into(),
            mode,
        }
    }

    /// Config with the default context directory.
    pub fn with_defaults(root: impl Into<PathBuf>, mode: StoreMode) -> Self {
        Self::new(root, DIR_CONTEXT, mode)
    }

    /// Absolute-or-root-relative context directory.
    pub fn context_path(&self) -> PathBuf {
        self.root.join(&self.context_dir)
    }

    /// Payload file name for the configured mode.
    pub fn payload_file_name(&self) -> &'static str {
        match self.mode {
            StoreMode::Encrypted => FILE_SCRATCHPAD_ENC,
            StoreMode::Plaintext => FILE_SCRATCHPAD_MD,
        }
    }

    pub fn payload_path(&self) -> PathBuf {
        self.context_path().join(self.payload_file_name())
    }

    pub fn key_path(&self) -> PathBuf {
        self.context_path().join(FILE_SCRATCHPAD_KEY)
    }

    pub fn ignore_file_path(&self) -> PathBuf {
        self.root.join(FILE_GITIGNORE)
    }

    /// Line recorded in the ignore-list for the key file.
    pub fn key_ignore_entry(&self) -> String {
        join_slash(&self.context_dir, FILE_SCRATCHPAD_KEY)
    }

    /// Paths of the "ours" and "theirs" merge artifacts of the encrypted payload.
    pub fn conflict_paths(&self) -> (PathBuf, PathBuf) {
        let dir = self.context_path();
        (
            dir.join(format!("{}{}", FILE_SCRATCHPAD_ENC, SUFFIX_OURS)),
            dir.join(format!("{}{}", FILE_SCRATCHPAD_ENC, SUFFIX_THEIRS)),
        )
    }
}

/// Ignore files always use forward slashes.
fn join_slash(dir: &Path, file: &str) -> String {
    let dir = dir.to_string_lossy().replace('\\', "/");
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() || dir == "." {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}
