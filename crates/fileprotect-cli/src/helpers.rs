//! Input helper functions for the CLI.

use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use dialoguer::Password;
use secrecy::SecretString;
use zeroize::Zeroizing;

use crate::constants::PASSWORD_ENV;
use crate::errors::CliError;

/// Read the password from FILEPROTECT_PASSWORD, or prompt without echo.
///
/// With `confirm`, the prompt asks twice and rejects a mismatch.
pub fn read_password(confirm: bool, interactive: bool) -> anyhow::Result<SecretString> {
    if let Ok(value) = std::env::var(PASSWORD_ENV) {
        if !value.is_empty() {
            tracing::debug!("using password from {}", PASSWORD_ENV);
            return Ok(SecretString::from(value));
        }
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No password provided and no TTY available. Set {}.",
            PASSWORD_ENV
        ))
        .into());
    }

    let mut prompt = Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    let password = prompt
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
    Ok(SecretString::from(password))
}

/// Read all of stdin.
pub fn read_stdin() -> anyhow::Result<Zeroizing<Vec<u8>>> {
    let mut buffer = Zeroizing::new(Vec::new());
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

/// Read a file, reporting a missing file as not-found.
pub fn read_input_file(path: &Path) -> anyhow::Result<Zeroizing<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Zeroizing::new(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(CliError::not_found(
            format!("No input file at {}", path.display()),
            "Hint: Pass the blob as an argument or pipe it on stdin instead.",
        )
        .into()),
        Err(err) => Err(anyhow::anyhow!(
            "Failed to read input {}: {}",
            path.display(),
            err
        )),
    }
}

/// Strip one trailing line ending (`\n` or `\r\n`) left by `echo` or an editor.
pub fn strip_line_ending(bytes: &[u8]) -> &[u8] {
    if let Some(stripped) = bytes.strip_suffix(b"\r\n") {
        return stripped;
    }
    bytes.strip_suffix(b"\n").unwrap_or(bytes)
}

/// Interpret blob input as text, trimming surrounding whitespace.
pub fn blob_text(bytes: &[u8]) -> anyhow::Result<&str> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| CliError::invalid_input("Encrypted input is not valid text"))?;
    Ok(text.trim())
}
