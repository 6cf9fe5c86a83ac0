use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::CliError;

/// Settings read from `config.toml`. Every key is optional.
///
/// Key derivation cost is intentionally absent: a blob can only be decrypted
/// with the parameters it was encrypted with, so they are fixed at build time.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileprotectConfig {
    pub prompt: PromptSection,
    pub output: OutputSection,
    pub log: LogSection,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PromptSection {
    /// Ask for the password twice before encrypting
    pub confirm_on_encrypt: bool,
}

impl Default for PromptSection {
    fn default() -> Self {
        Self {
            confirm_on_encrypt: true,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// Print a newline after the encrypted blob on stdout
    pub trailing_newline: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    /// Tracing filter directive, e.g. "warn" or "fileprotect=debug"
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// The config path named by `--config` or `FILEPROTECT_CONFIG`, if any.
fn explicit_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    explicit
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Load the config.
///
/// An explicitly named file must exist. The default location may be absent,
/// in which case every setting takes its default.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<FileprotectConfig> {
    if let Some(path) = explicit_config_path(explicit) {
        if !path.exists() {
            return Err(CliError::not_found(
                format!("No config file at {}", path.display()),
                "Hint: Check --config or FILEPROTECT_CONFIG, or unset it to use the default location.",
            )
            .into());
        }
        return read_config(&path);
    }
    load_config_or_default(&default_config_path()?)
}

fn load_config_or_default(path: &Path) -> anyhow::Result<FileprotectConfig> {
    if !path.exists() {
        return Ok(FileprotectConfig::default());
    }
    read_config(path)
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<FileprotectConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("fileprotect"));
        }
    }
    Ok(home_dir()?.join(".config").join("fileprotect"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = FileprotectConfig::default();
        assert!(config.prompt.confirm_on_encrypt);
        assert!(!config.output.trailing_newline);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\ntrailing_newline = true\n").unwrap();

        let config = read_config(&path).unwrap();
        assert!(config.output.trailing_newline);
        assert!(config.prompt.confirm_on_encrypt);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[prompt]\nconfirm_on_encrypt = false\n\n[output]\ntrailing_newline = true\n\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = load_config(path.to_str()).unwrap();
        assert!(!config.prompt.confirm_on_encrypt);
        assert!(config.output.trailing_newline);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[kdf]\niterations = 1\n").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = load_config_or_default(&path).unwrap();
        assert_eq!(config, FileprotectConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("typo.toml");

        let err = load_config(path.to_str()).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_err, CliError::NotFound { .. }));
        assert!(err.to_string().contains("No config file at"));
    }

    #[test]
    fn test_blank_explicit_path_is_ignored() {
        assert_eq!(explicit_config_path(Some("  ")), None);
        assert_eq!(
            explicit_config_path(Some("/tmp/fp.toml")),
            Some(PathBuf::from("/tmp/fp.toml"))
        );
    }
}
