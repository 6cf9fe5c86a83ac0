//! Fileprotect CLI - Encrypt and decrypt short secrets with a password
//!
//! This is the command-line interface for Fileprotect. It reads the secret
//! and password, hands them to the core library and writes the result.

mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod fs;
mod helpers;
mod logging;
mod ui;

use clap::Parser;

use cli::{Cli, Commands, SecretCommands};
use commands::{handle_completions, handle_decrypt, handle_encrypt, RunContext};
use config::load_config;
use errors::exit_code_for;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    logging::init_logging(cli.verbose, &config.log.level)?;

    let ctx = RunContext::new(config, cli.quiet);
    match &cli.command {
        Commands::Secret(SecretCommands::Encrypt(args)) => handle_encrypt(&ctx, args),
        Commands::Secret(SecretCommands::Decrypt(args)) => handle_decrypt(&ctx, args),
        Commands::Completions(args) => handle_completions(args.shell),
    }
}
