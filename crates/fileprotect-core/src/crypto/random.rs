//! Source of salts and nonces.

use crate::error::{FileprotectError, Result};

/// A cryptographically secure source of random bytes.
///
/// Implementations must fill the whole buffer or fail; a failure is reported
/// as-is and never retried.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` with random bytes.
    ///
    /// # Errors
    ///
    /// Returns `FileprotectError::RandomSource` if the source is unavailable.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;

    /// Return an array of `N` random bytes.
    fn array<const N: usize>(&self) -> Result<[u8; N]>
    where
        Self: Sized,
    {
        let mut bytes = [0u8; N];
        self.fill(&mut bytes)?;
        Ok(bytes)
    }
}

/// The operating system's random number generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        getrandom::getrandom(dest).map_err(|e| FileprotectError::RandomSource(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills_buffer() {
        let first: [u8; 32] = OsRandom.array().unwrap();
        let second: [u8; 32] = OsRandom.array().unwrap();

        // 2^-256 chance of a false failure
        assert_ne!(first, second);
    }

    #[test]
    fn test_empty_buffer_is_ok() {
        let mut empty: [u8; 0] = [];
        assert!(OsRandom.fill(&mut empty).is_ok());
    }
}
