//! Encrypt and decrypt secrets into the hex blob format.
//!
//! Each call generates a fresh salt and nonce, derives a key with Argon2id
//! and seals the plaintext with XChaCha20-Poly1305 (no associated data).
//! See [`crate::crypto::format`] for the byte layout.

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};

use super::format::{self, SealedBlob, NONCE_LEN, SALT_LEN};
use super::key::{derive_key, KdfParams};
use super::random::{OsRandom, RandomSource};
use crate::error::{FileprotectError, Result};

/// Password-based encryptor for short secrets.
///
/// The codec holds only its parameters and random source, so one instance
/// can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct SecretCodec<R = OsRandom> {
    params: KdfParams,
    random: R,
}

impl SecretCodec<OsRandom> {
    /// Codec with [`KdfParams::DEFAULT`] and the OS random source.
    pub fn new() -> Self {
        Self {
            params: KdfParams::DEFAULT,
            random: OsRandom,
        }
    }
}

impl Default for SecretCodec<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> SecretCodec<R> {
    /// Use different Argon2id cost parameters.
    ///
    /// Blobs produced with non-default parameters can only be decrypted by a
    /// codec configured with the same parameters.
    pub fn with_params(mut self, params: KdfParams) -> Self {
        self.params = params;
        self
    }

    /// Use a different source for salts and nonces.
    pub fn with_random<S: RandomSource>(self, random: S) -> SecretCodec<S> {
        SecretCodec {
            params: self.params,
            random,
        }
    }

    pub fn params(&self) -> &KdfParams {
        &self.params
    }

    /// Encrypt `plaintext` under `password`.
    ///
    /// # Returns
    ///
    /// Lowercase hex of `salt ‖ nonce ‖ ciphertext ‖ tag`, which is
    /// `2 * (56 + plaintext.len())` characters long.
    ///
    /// # Errors
    ///
    /// - `FileprotectError::RandomSource` if no salt or nonce could be generated
    /// - `FileprotectError::KeyDerivation` if the cost parameters are invalid
    pub fn encrypt(&self, password: &[u8], plaintext: &[u8]) -> Result<String> {
        let salt: [u8; SALT_LEN] = self.random.array()?;
        let nonce: [u8; NONCE_LEN] = self.random.array()?;

        let cipher = self.cipher(password, &salt)?;
        let sealed = cipher
            .encrypt(&XNonce::from(nonce), plaintext)
            .map_err(|e| FileprotectError::Crypto(format!("Sealing failed: {}", e)))?;

        let blob = SealedBlob {
            salt: &salt,
            nonce: &nonce,
            sealed: &sealed,
        };
        Ok(format::encode(&blob.to_bytes()))
    }

    /// Decrypt a blob produced by [`SecretCodec::encrypt`].
    ///
    /// # Errors
    ///
    /// - `FileprotectError::Decode` if `encoded` is not hex
    /// - `FileprotectError::MalformedInput` if the decoded blob is shorter
    ///   than 56 bytes (checked before any key derivation)
    /// - `FileprotectError::Authentication` on a wrong password or any
    ///   modification of the blob
    pub fn decrypt(&self, password: &[u8], encoded: &str) -> Result<Vec<u8>> {
        let bytes = format::decode(encoded)?;
        let blob = SealedBlob::parse(&bytes)?;

        let cipher = self.cipher(password, blob.salt)?;
        cipher
            .decrypt(&XNonce::from(*blob.nonce), blob.sealed)
            .map_err(|_| FileprotectError::Authentication)
    }

    // The derived key is dropped (and zeroized) as soon as the cipher is built.
    fn cipher(&self, password: &[u8], salt: &[u8; SALT_LEN]) -> Result<XChaCha20Poly1305> {
        let key = derive_key(password, salt, &self.params)?;
        XChaCha20Poly1305::new_from_slice(key.as_bytes())
            .map_err(|e| FileprotectError::Crypto(format!("Invalid key length: {}", e)))
    }
}

/// Encrypt a secret with the default parameters and the OS random source.
///
/// # Examples
///
/// ```no_run
/// use fileprotect_core::encrypt_secret;
///
/// let blob = encrypt_secret(b"correct horse", b"0123456789abcdef").unwrap();
/// assert_eq!(blob.len(), 112);
/// ```
pub fn encrypt_secret(password: &[u8], plaintext: &[u8]) -> Result<String> {
    SecretCodec::new().encrypt(password, plaintext)
}

/// Decrypt a blob produced by [`encrypt_secret`].
pub fn decrypt_secret(password: &[u8], encoded: &str) -> Result<Vec<u8>> {
    SecretCodec::new().decrypt(password, encoded)
}
