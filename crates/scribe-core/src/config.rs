//! Host configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the news service credential.
pub const NEWS_API_KEY_VAR: &str = "NEWS_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Default directory offered by the export dialog
    pub export_dir: PathBuf,
    /// Credential for the external news search service. Absence is a
    /// configuration error surfaced per call, never a crash.
    pub news_api_key: Option<String>,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        let export_dir = dirs::document_dir()
            .unwrap_or_else(|| data_dir.clone())
            .join("Scribe")
            .join("Notes");

        Self {
            database_path: data_dir.join("scribe.db"),
            export_dir,
            news_api_key: std::env::var(NEWS_API_KEY_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Scribe"))
            .unwrap_or_else(|| PathBuf::from(".scribe"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

// Simple dirs implementation for common directories
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }

    pub fn document_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|h| PathBuf::from(h).join("Documents"))
        }
        #[cfg(not(target_os = "windows"))]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Documents"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_data_dir() {
        let config = Config::new(PathBuf::from("/tmp/scribe-data"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/scribe-data/scribe.db"));
        assert!(config.export_dir.ends_with("Scribe/Notes"));
    }
}
