//! Payload encodings.
//!
//! - **entries**: ordered lines <-> newline-delimited bytes
//! - **blob**: one entry carrying a labeled, base64-embedded attachment

pub mod blob;
pub mod entries;

pub use blob::{display_entry, is_blob, make_blob, split_blob, Blob, BLOB_SEP, MAX_BLOB_SIZE};
pub use entries::{decode, encode};
