//! Configuration management (config.toml)
//!
//! Settings are stored in TOML format in the platform-specific config directory.
//! A missing file means defaults; an unparsable one is reported and ignored.

use serde::Deserialize;
use std::path::PathBuf;

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    /// Highscores file to open instead of the platform default
    #[serde(default)]
    pub highscores_file: Option<PathBuf>,
    /// Copy the original to `<file>.bak` before saving (default: false)
    #[serde(default)]
    pub backup_on_save: bool,
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\highscores-editor\config`
/// On macOS: `~/Library/Application Support/highscores-editor`
/// On Linux: `~/.config/highscores-editor`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "highscores-editor")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads `config.toml` from the configuration directory.
pub fn load() -> Config {
    let Some(path) = config_dir().map(|dir| dir.join("config.toml")) else {
        return Config::default();
    };
    let Ok(content) = std::fs::read_to_string(&path) else {
        return Config::default();
    };

    match parse(&content) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.highscores_file, None);
        assert!(!config.backup_on_save);
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full() {
        let config = parse(
            r#"
            highscores_file = "/games/OpenRCT2/highscores.dat"
            backup_on_save = true
            "#,
        )
        .unwrap();

        assert_eq!(
            config.highscores_file,
            Some(PathBuf::from("/games/OpenRCT2/highscores.dat"))
        );
        assert!(config.backup_on_save);
    }

    #[test]
    fn test_parse_wrong_type_is_error() {
        assert!(parse("backup_on_save = \"yes\"").is_err());
    }
}
