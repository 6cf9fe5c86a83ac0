//! Cryptographic primitives for Fileprotect.
//!
//! ## Security Model
//!
//! - XChaCha20-Poly1305 authenticated encryption, fresh 24-byte nonce per call
//! - Argon2id for key derivation (memory-hard, resistant to brute-force)
//! - Fresh 16-byte salt per call, stored in the clear next to the nonce
//! - Derived keys zeroized from memory on drop
//!
//! ## Threat Model
//!
//! We defend against:
//! - Disclosure of the encoded blob
//! - Offline brute-force attacks on the password
//! - Tampering with any byte of the blob
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Weak passwords beyond what the derivation cost buys

pub mod codec;
pub mod format;
pub mod key;
pub mod random;

pub use codec::{decrypt_secret, encrypt_secret, SecretCodec};
pub use format::{SealedBlob, MIN_BLOB_LEN, NONCE_LEN, SALT_LEN, TAG_LEN};
pub use key::{derive_key, DerivedKey, KdfParams, KEY_LENGTH};
pub use random::{OsRandom, RandomSource};
