//! Key derivation using Argon2id.
//!
//! This module derives encryption keys from passwords using the Argon2id
//! algorithm, which is memory-hard and resistant to GPU-based attacks.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::ZeroizeOnDrop;

use crate::error::{FileprotectError, Result};

/// Length of derived key in bytes (32 bytes = 256 bits for XChaCha20-Poly1305).
pub const KEY_LENGTH: usize = 32;

/// Argon2id cost parameters.
///
/// These are not stored in the encoded blob. Whoever decrypts must use the
/// same values the encryptor used, so changing [`KdfParams::DEFAULT`] makes
/// every existing blob undecryptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Number of passes over memory (Argon2 `t_cost`)
    pub iterations: u32,
    /// Memory size in KiB (Argon2 `m_cost`)
    pub memory_kib: u32,
    /// Degree of parallelism (Argon2 `p_cost`)
    pub parallelism: u32,
}

impl KdfParams {
    /// Canonical parameters: 4 iterations, 128 MiB, 4 lanes.
    pub const DEFAULT: KdfParams = KdfParams {
        iterations: 4,
        memory_kib: 128 * 1024,
        parallelism: 4,
    };

    pub const fn new(iterations: u32, memory_kib: u32, parallelism: u32) -> Self {
        Self {
            iterations,
            memory_kib,
            parallelism,
        }
    }

    /// Check the parameters against Argon2's limits without hashing anything.
    pub fn validate(&self) -> Result<()> {
        self.argon2_params().map(|_| ())
    }

    fn argon2_params(&self) -> Result<Params> {
        Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(KEY_LENGTH),
        )
        .map_err(|e| {
            FileprotectError::KeyDerivation(format!("Invalid Argon2 params: {}", e))
        })
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A cryptographic key derived from a password.
///
/// Key material is zeroized when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a password using Argon2id.
///
/// # Arguments
///
/// * `password` - Raw password bytes; any length, including empty
/// * `salt` - Random salt (unique per encryption, at least 8 bytes)
/// * `params` - Argon2id cost parameters
///
/// # Security
///
/// - Same password + salt + params always produces the same key
/// - Different salt produces a different key
///
/// # Errors
///
/// Returns `FileprotectError::KeyDerivation` if Argon2 rejects the
/// parameters or the salt.
///
/// # Examples
///
/// ```
/// use fileprotect_core::crypto::{derive_key, KdfParams};
///
/// let params = KdfParams::new(1, 64, 1);
/// let key = derive_key(b"my-password", b"unique-salt-16by", &params).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &[u8], salt: &[u8], params: &KdfParams) -> Result<DerivedKey> {
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.argon2_params()?);

    let mut key_bytes = [0u8; KEY_LENGTH];
    argon2
        .hash_password_into(password, salt, &mut key_bytes)
        .map_err(|e| FileprotectError::KeyDerivation(e.to_string()))?;

    Ok(DerivedKey::from_bytes(key_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: KdfParams = KdfParams::new(1, 64, 1);

    #[test]
    fn test_key_derivation_deterministic() {
        let salt = b"unique-salt-1234";

        let key1 = derive_key(b"test-password", salt, &FAST).unwrap();
        let key2 = derive_key(b"test-password", salt, &FAST).unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key(b"test-password", b"salt1-1234567890", &FAST).unwrap();
        let key2 = derive_key(b"test-password", b"salt2-1234567890", &FAST).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = b"fixed-salt-12345";

        let key1 = derive_key(b"password-one", salt, &FAST).unwrap();
        let key2 = derive_key(b"password-two", salt, &FAST).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_params_different_key() {
        let salt = b"fixed-salt-12345";

        let key1 = derive_key(b"password", salt, &FAST).unwrap();
        let key2 = derive_key(b"password", salt, &KdfParams::new(2, 64, 1)).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_password_allowed() {
        let key = derive_key(b"", b"fixed-salt-12345", &FAST).unwrap();
        assert_eq!(key.as_bytes().len(), KEY_LENGTH);
    }

    #[test]
    fn test_short_salt_rejected() {
        let result = derive_key(b"password", b"short", &FAST);
        assert!(matches!(result, Err(FileprotectError::KeyDerivation(_))));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let zero_iterations = KdfParams::new(0, 64, 1);
        assert!(matches!(
            zero_iterations.validate(),
            Err(FileprotectError::KeyDerivation(_))
        ));

        // Argon2 needs at least 8 KiB per lane
        let starved = KdfParams::new(1, 8, 4);
        let result = derive_key(b"password", b"fixed-salt-12345", &starved);
        assert!(matches!(result, Err(FileprotectError::KeyDerivation(_))));
    }

    #[test]
    fn test_default_params() {
        let params = KdfParams::default();
        assert_eq!(params.iterations, 4);
        assert_eq!(params.memory_kib, 131_072);
        assert_eq!(params.parallelism, 4);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = derive_key(b"password", b"fixed-salt-12345", &FAST).unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&format!("{:?}", key.as_bytes())));
    }
}
