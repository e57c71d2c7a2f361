//! Cryptographic operations for Pad.
//!
//! - **AES-256-GCM**: authenticated encryption of the whole payload
//! - **Raw key file**: one 32-byte random key per store, owner-only permissions
//!
//! ## Envelope
//!
//! ```text
//! [12-byte nonce][ciphertext + 16-byte GCM tag]
//! ```
//!
//! A fresh random nonce is drawn for every write; the payload is always
//! re-encrypted whole.
//!
//! ## Threat Model
//!
//! We defend against:
//! - Reading the committed payload without the key
//! - Undetected tampering or corruption of the payload
//!
//! We do NOT defend against:
//! - Theft of the key file itself
//! - Compromised OS / access to process memory

pub mod cipher;
pub mod key;

pub use cipher::{decrypt, encrypt, NONCE_SIZE, TAG_SIZE};
pub use key::{generate_key, load_key, save_key, ScratchpadKey, KEY_SIZE};
