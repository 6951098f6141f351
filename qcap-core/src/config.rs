use crate::error::{CaptureError, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Directory under `~/.config` holding the knowledge-base pointer.
pub const CONFIG_APP_DIR: &str = "raycast";
pub const KNOWLEDGE_BASE_FILE: &str = "knowledge-base";

/// Where the knowledge-base pointer file is looked up and read from.
pub trait ConfigSource {
    fn home_dir(&self) -> Option<PathBuf>;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HomeConfigSource;

impl ConfigSource for HomeConfigSource {
    /// `$HOME` when set, otherwise the platform home directory.
    fn home_dir(&self) -> Option<PathBuf> {
        env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .or_else(|| BaseDirs::new().map(|b| b.home_dir().to_path_buf()))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// `{home}/.config/raycast/knowledge-base`
pub fn config_file_path(home: &Path) -> PathBuf {
    home.join(".config")
        .join(CONFIG_APP_DIR)
        .join(KNOWLEDGE_BASE_FILE)
}

/// Reads the knowledge-base root from the pointer file, trimmed.
pub fn knowledge_base_path(source: &dyn ConfigSource) -> Result<PathBuf> {
    let home = source.home_dir().ok_or_else(|| CaptureError::ConfigUnavailable {
        path: PathBuf::from("~/.config")
            .join(CONFIG_APP_DIR)
            .join(KNOWLEDGE_BASE_FILE),
        reason: "home directory not found".to_string(),
    })?;
    let path = config_file_path(&home);

    let contents = source
        .read_to_string(&path)
        .map_err(|e| CaptureError::ConfigUnavailable {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    let root = contents.trim();
    if root.is_empty() {
        return Err(CaptureError::ConfigUnavailable {
            path,
            reason: "file is empty".to_string(),
        });
    }
    Ok(PathBuf::from(root))
}
