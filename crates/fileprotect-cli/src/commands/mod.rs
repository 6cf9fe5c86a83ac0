//! Command handlers.

mod misc;
mod secret;

use std::io::IsTerminal;

use crate::config::FileprotectConfig;

pub use misc::handle_completions;
pub use secret::{handle_decrypt, handle_encrypt};

/// State shared by every command for one invocation.
pub struct RunContext {
    pub config: FileprotectConfig,
    pub quiet: bool,
    /// Whether a human can answer prompts on the terminal
    pub interactive: bool,
}

impl RunContext {
    pub fn new(config: FileprotectConfig, quiet: bool) -> Self {
        Self {
            config,
            quiet,
            interactive: std::io::stderr().is_terminal(),
        }
    }

    /// Whether progress output may be drawn on stderr.
    pub fn shows_progress(&self) -> bool {
        self.interactive && !self.quiet
    }
}
