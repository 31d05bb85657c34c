//! XDG paths for ntree state.
//!
//! The only state the shell keeps between sessions is the line-editor
//! history, stored under `$XDG_DATA_HOME/ntree` (default
//! `~/.local/share/ntree`).

use std::path::PathBuf;

use directories::BaseDirs;

/// Data directory for persistent state.
pub fn data_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".local").join("share"))
        .join("ntree")
}

/// Line-editor history file.
pub fn history_path() -> PathBuf {
    data_dir().join("history.txt")
}

/// Fallback home directory when BaseDirs fails.
fn home_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}
