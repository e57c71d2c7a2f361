//! # Pad Core
//!
//! Core library for Pad - an encrypted, line-oriented scratchpad that lives
//! next to a project's version-controlled files.
//!
//! This crate provides the storage engine and entry model independent of the
//! CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: AES-256-GCM envelopes and key file lifecycle
//! - **codec**: Entry and blob encodings of the payload
//! - **config**: Store configuration (mode, paths)
//! - **store**: Read/decrypt/decode and encode/encrypt/write round trips
//! - **ops**: Positional, 1-indexed mutations over the entry sequence
//! - **resolve**: Decryption of merge-conflict artifacts

pub mod codec;
pub mod config;
pub mod crypto;
pub mod error;
pub mod fs;
pub mod ops;
pub mod resolve;
pub mod store;

pub use config::{StoreConfig, StoreMode};
pub use error::{PadError, Result};
pub use ops::Scratchpad;
pub use resolve::Conflict;
pub use store::{SaveOutcome, Store};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
