//! Centralized path helpers for cache and data directories.

use std::path::PathBuf;

use crate::core::app;

/// Project directories (cache, data) from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("digital", app::VENDOR, app::NAME)
}

/// Cache directory (~/.cache/blowup-pages/). Holds the browse-mode log file.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Log file written while the terminal browser owns the screen.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|d| d.join(format!("{}.log", app::NAME)))
}

/// Default data directory for `titles.json` / `tricks.json` (~/.local/share/blowup-pages/).
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.data_dir().to_path_buf())
}
