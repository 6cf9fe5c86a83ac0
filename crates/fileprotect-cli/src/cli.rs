use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use fileprotect_core::VERSION;

/// Fileprotect - Encrypt and decrypt short secrets with a password
#[derive(Parser)]
#[command(name = "fileprotect")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "FILEPROTECT_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Quiet mode (no spinner or notes on stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the `secret encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Secret to encrypt (reads stdin when omitted)
    #[arg(value_name = "SECRET")]
    pub secret: Option<String>,

    /// Write the encrypted blob to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

/// Arguments for the `secret decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Encrypted blob (reads --input or stdin when omitted)
    #[arg(value_name = "BLOB", conflicts_with = "input")]
    pub blob: Option<String>,

    /// Read the encrypted blob from a file
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<String>,

    /// Write the decrypted secret to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum SecretCommands {
    /// Encrypt a secret
    Encrypt(EncryptArgs),

    /// Decrypt a secret that was previously encrypted
    Decrypt(DecryptArgs),
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt and decrypt secrets
    #[command(subcommand)]
    Secret(SecretCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
