//! Byte layout and text encoding of an encrypted secret.
//!
//! ```text
//! offset  length        field
//! 0       16            salt
//! 16      24            nonce
//! 40      remaining-16  ciphertext
//! end-16  16            Poly1305 tag (appended by the AEAD)
//! ```
//!
//! The whole sequence is encoded as lowercase hex.

use crate::error::{FileprotectError, Result};

/// Length of the Argon2id salt in bytes.
pub const SALT_LEN: usize = 16;

/// Length of the XChaCha20-Poly1305 nonce in bytes.
pub const NONCE_LEN: usize = 24;

/// Length of the Poly1305 authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Smallest valid decoded blob: salt, nonce and the tag of an empty plaintext.
pub const MIN_BLOB_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// A decoded blob split into its fields. Borrows from the decoded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SealedBlob<'a> {
    pub salt: &'a [u8; SALT_LEN],
    pub nonce: &'a [u8; NONCE_LEN],
    /// Ciphertext followed by the tag
    pub sealed: &'a [u8],
}

impl<'a> SealedBlob<'a> {
    /// Split decoded bytes into salt, nonce and sealed payload.
    ///
    /// # Errors
    ///
    /// Returns `FileprotectError::MalformedInput` if `bytes` is shorter than
    /// [`MIN_BLOB_LEN`].
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let malformed = || FileprotectError::MalformedInput {
            len: bytes.len(),
            min: MIN_BLOB_LEN,
        };
        if bytes.len() < MIN_BLOB_LEN {
            return Err(malformed());
        }

        let (salt, rest) = bytes.split_at(SALT_LEN);
        let (nonce, sealed) = rest.split_at(NONCE_LEN);

        Ok(Self {
            salt: salt.try_into().map_err(|_| malformed())?,
            nonce: nonce.try_into().map_err(|_| malformed())?,
            sealed,
        })
    }

    /// Number of plaintext bytes the sealed payload carries.
    pub fn plaintext_len(&self) -> usize {
        self.sealed.len().saturating_sub(TAG_LEN)
    }

    /// Concatenate `salt ‖ nonce ‖ sealed`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SALT_LEN + NONCE_LEN + self.sealed.len());
        out.extend_from_slice(self.salt);
        out.extend_from_slice(self.nonce);
        out.extend_from_slice(self.sealed);
        out
    }
}

/// Encode blob bytes as lowercase hex.
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode hex text into blob bytes.
///
/// # Errors
///
/// Returns `FileprotectError::Decode` on odd length or non-hex characters.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}
