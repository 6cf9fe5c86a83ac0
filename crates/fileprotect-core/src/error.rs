//! Error types for Fileprotect core operations.
//!
//! Every failure of an encrypt or decrypt call maps to exactly one variant.
//! Errors are descriptive at the core level; the CLI layer maps them to
//! exit codes and user-facing messages.

use thiserror::Error;

/// Result type alias for Fileprotect operations.
pub type Result<T> = std::result::Result<T, FileprotectError>;

/// Core error type for Fileprotect operations.
#[derive(Debug, Error)]
pub enum FileprotectError {
    /// The system entropy source could not supply random bytes
    #[error("Random source unavailable: {0}")]
    RandomSource(String),

    /// Argon2 rejected the derivation parameters
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    /// Input text is not valid hex
    #[error("Invalid encoding: {0}")]
    Decode(String),

    /// Decoded blob is too short to hold salt, nonce and tag
    #[error("Malformed input: {len} bytes, expected at least {min}")]
    MalformedInput { len: usize, min: usize },

    /// Tag verification failed. Wrong password and tampered data are
    /// deliberately indistinguishable.
    #[error("Decryption failed: incorrect password or corrupted data")]
    Authentication,

    /// AEAD sealing error
    #[error("Encryption error: {0}")]
    Crypto(String),
}

impl FileprotectError {
    /// Whether the error was caused by the caller's input rather than the
    /// environment or a programming error.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FileprotectError::Decode(_) | FileprotectError::MalformedInput { .. }
        )
    }
}

impl From<hex::FromHexError> for FileprotectError {
    fn from(err: hex::FromHexError) -> Self {
        FileprotectError::Decode(err.to_string())
    }
}
