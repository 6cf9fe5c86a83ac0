use std::io::Write;
use std::path::Path;

use anyhow::Context;
use fileprotect_core::{FileprotectError, SecretCodec};
use secrecy::ExposeSecret;
use zeroize::Zeroizing;

use super::RunContext;
use crate::cli::{DecryptArgs, EncryptArgs};
use crate::errors::CliError;
use crate::fs::write_private_file;
use crate::helpers::{blob_text, read_input_file, read_password, read_stdin, strip_line_ending};
use crate::ui::Spinner;

pub fn handle_encrypt(ctx: &RunContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let plaintext = match &args.secret {
        Some(secret) => Zeroizing::new(secret.as_bytes().to_vec()),
        None => {
            let input = read_stdin()?;
            Zeroizing::new(strip_line_ending(&input).to_vec())
        }
    };

    let password = read_password(ctx.config.prompt.confirm_on_encrypt, ctx.interactive)?;

    let codec = SecretCodec::new();
    let params = codec.params();
    tracing::debug!(
        bytes = plaintext.len(),
        iterations = params.iterations,
        memory_kib = params.memory_kib,
        parallelism = params.parallelism,
        "encrypting secret"
    );

    let spinner = Spinner::start("Deriving key", ctx.shows_progress());
    let encoded = codec.encrypt(password.expose_secret().as_bytes(), &plaintext);
    spinner.finish();
    let encoded = encoded?;

    match &args.output {
        Some(path) => {
            write_private_file(Path::new(path), encoded.as_bytes())
                .with_context(|| format!("Failed to write {}", path))?;
            tracing::info!(path = %path, "wrote encrypted secret");
            if !ctx.quiet {
                eprintln!("Wrote encrypted secret to {}", path);
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(encoded.as_bytes())?;
            if ctx.config.output.trailing_newline {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn handle_decrypt(ctx: &RunContext, args: &DecryptArgs) -> anyhow::Result<()> {
    let input = match (&args.blob, &args.input) {
        (Some(blob), _) => Zeroizing::new(blob.as_bytes().to_vec()),
        (None, Some(path)) => read_input_file(Path::new(path))?,
        (None, None) => read_stdin()?,
    };
    let encoded = blob_text(&input)?;

    let password = read_password(false, ctx.interactive)?;

    tracing::debug!(chars = encoded.len(), "decrypting secret");

    let spinner = Spinner::start("Deriving key", ctx.shows_progress());
    let result = SecretCodec::new().decrypt(password.expose_secret().as_bytes(), encoded);
    spinner.finish();
    let plaintext = Zeroizing::new(result.map_err(decrypt_error)?);

    match &args.output {
        Some(path) => {
            write_private_file(Path::new(path), &plaintext)
                .with_context(|| format!("Failed to write {}", path))?;
            tracing::info!(path = %path, "wrote decrypted secret");
            if !ctx.quiet {
                eprintln!("Wrote decrypted secret to {}", path);
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&plaintext)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn decrypt_error(err: FileprotectError) -> anyhow::Error {
    match err {
        FileprotectError::Authentication => CliError::auth_failed_with_hint(
            err.to_string(),
            "Hint: The password must match the one used to encrypt, and the blob must be copied exactly.",
        )
        .into(),
        other => other.into(),
    }
}
