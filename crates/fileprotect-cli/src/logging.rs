//! Tracing initialization.
//!
//! Logs go to stderr so stdout carries only the blob or the secret.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::LOG_ENV;

/// Install the global subscriber.
///
/// Filter precedence: `FILEPROTECT_LOG`, then `--verbose`, then the
/// config's `log.level`.
pub fn init_logging(verbose: bool, config_level: &str) -> anyhow::Result<()> {
    let directive = filter_directive(std::env::var(LOG_ENV).ok(), verbose, config_level);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| anyhow::anyhow!("Invalid log filter {:?}: {}", directive, e))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))
}

fn filter_directive(env_value: Option<String>, verbose: bool, config_level: &str) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value,
        _ if verbose => "debug".to_string(),
        _ => config_level.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_wins() {
        let directive = filter_directive(Some("trace".to_string()), true, "warn");
        assert_eq!(directive, "trace");
    }

    #[test]
    fn test_verbose_over_config() {
        assert_eq!(filter_directive(None, true, "warn"), "debug");
        assert_eq!(filter_directive(Some("  ".to_string()), true, "warn"), "debug");
    }

    #[test]
    fn test_config_fallback() {
        assert_eq!(filter_directive(None, false, "info"), "info");
    }
}
