//! # Fileprotect Core
//!
//! Password-based authenticated encryption of short secrets.
//!
//! A secret is sealed with XChaCha20-Poly1305 under a key derived from the
//! password and a fresh random salt with Argon2id. Salt, nonce and the sealed
//! bytes travel together as one lowercase hex string.
//!
//! ## Architecture
//!
//! - **crypto::key**: Argon2id key derivation
//! - **crypto::random**: system entropy source
//! - **crypto::format**: byte layout and text encoding of the blob
//! - **crypto::codec**: encrypt/decrypt orchestration
//!
//! This crate performs no I/O beyond reading the OS random source, and no
//! logging. Password prompting and transport belong to the caller.
//!
//! ```no_run
//! use fileprotect_core::{decrypt_secret, encrypt_secret};
//!
//! let blob = encrypt_secret(b"correct horse", b"api-token-123").unwrap();
//! let plaintext = decrypt_secret(b"correct horse", &blob).unwrap();
//! assert_eq!(plaintext, b"api-token-123");
//! ```

pub mod crypto;
pub mod error;

pub use crypto::{decrypt_secret, encrypt_secret, KdfParams, SecretCodec};
pub use error::{FileprotectError, Result};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
