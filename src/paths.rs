//! XDG-style path utilities for configuration and cache directories.
//!
//! This module provides consistent path resolution across platforms,
//! preferring XDG Base Directory Specification conventions over
//! OS-specific locations.

use std::path::PathBuf;

/// Returns the configuration directory for fanyi.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/fanyi` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/fanyi` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("fanyi"),
        |xdg| PathBuf::from(xdg).join("fanyi"),
    )
}

/// Returns the cache directory for fanyi.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/fanyi` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/fanyi` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn cache_dir() -> PathBuf {
    std::env::var("XDG_CACHE_HOME").map_or_else(
        |_| home_dir().join(".cache").join("fanyi"),
        |xdg| PathBuf::from(xdg).join("fanyi"),
    )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}
