//! Highscores file location

use std::path::PathBuf;

use crate::config::Config;

pub const HIGHSCORES_FILE_NAME: &str = "highscores.dat";

/// Where OpenRCT2 keeps its highscores on this platform.
///
/// On Windows: `<Documents>\OpenRCT2\highscores.dat`
/// On macOS: `~/Library/Application Support/OpenRCT2/highscores.dat`
/// On Linux: `~/.config/OpenRCT2/highscores.dat`
pub fn default_highscores_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        directories::UserDirs::new().and_then(|dirs| {
            dirs.document_dir()
                .map(|d| d.join("OpenRCT2").join(HIGHSCORES_FILE_NAME))
        })
    }

    #[cfg(not(target_os = "windows"))]
    {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("OpenRCT2").join(HIGHSCORES_FILE_NAME))
    }
}

/// Command line path, then config, then the platform default.
pub fn resolve(cli_path: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    cli_path
        .or_else(|| config.highscores_file.clone())
        .or_else(default_highscores_path)
}
