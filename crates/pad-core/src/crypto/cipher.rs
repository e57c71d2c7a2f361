//! AES-256-GCM envelopes.
//!
//! Envelope layout: `[nonce (12 bytes) | ciphertext + tag (16 bytes)]`.
//! No associated data is bound.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use zeroize::Zeroizing;

use super::key::ScratchpadKey;
use crate::error::{PadError, Result};

/// GCM nonce length in bytes.
pub const NONCE_SIZE: usize = 12;

/// GCM authentication tag length in bytes.
pub const TAG_SIZE: usize = 16;

/// Encrypt `plaintext`, prepending a fresh random nonce.
///
/// Nonce uniqueness relies on the system random source; there is no counter.
pub fn encrypt(key: &ScratchpadKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| {
        PadError::InvalidKeySize {
            got: key.as_bytes().len(),
            want: super::KEY_SIZE,
        }
    })?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    getrandom::getrandom(&mut nonce_bytes)
        .map_err(|e| PadError::RandomSource(format!("generate nonce: {}", e)))?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    let sealed = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| PadError::Crypto(format!("encrypt: {}", e)))?;

    let mut out = Vec::with_capacity(NONCE_SIZE + sealed.len());
    out.extend_from_slice(&nonce_bytes);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Decrypt an envelope produced by [`encrypt`].
///
/// Plaintext is returned only when the tag verifies. A wrong key and a
/// tampered envelope are indistinguishable and both yield
/// `PadError::DecryptFailed`.
///
/// # Errors
///
/// - `PadError::EnvelopeTooShort` if the envelope is shorter than a nonce
/// - `PadError::DecryptFailed` on authentication failure
pub fn decrypt(key: &ScratchpadKey, envelope: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    if envelope.len() < NONCE_SIZE {
        return Err(PadError::EnvelopeTooShort {
            len: envelope.len(),
        });
    }
    let (nonce_bytes, sealed) = envelope.split_at(NONCE_SIZE);

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| {
        PadError::InvalidKeySize {
            got: key.as_bytes().len(),
            want: super::KEY_SIZE,
        }
    })?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), sealed)
        .map_err(|_| PadError::DecryptFailed)?;

    Ok(Zeroizing::new(plaintext))
}
