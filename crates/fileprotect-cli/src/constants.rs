//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (I/O, entropy source, key derivation)
/// - 2: Misuse of shell command (reported by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const GENERAL: i32 = 1;

    /// Input or config file not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input (bad encoding, truncated blob, no password).
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password or tampered blob).
    pub const AUTH_FAILED: i32 = 5;
}

/// Environment variable holding the password for non-interactive use.
pub const PASSWORD_ENV: &str = "FILEPROTECT_PASSWORD";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "FILEPROTECT_LOG";
