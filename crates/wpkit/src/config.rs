//! Where to find the `wp` executable.
//!
//! # Resolution priority
//!
//! 1. An explicit path ([`InvokerConfig::with_binary_path`])
//! 2. `wp` on `PATH`
//! 3. `wp` in each fallback directory (default `/usr/local/bin`)

use std::path::PathBuf;

/// Executable name searched for on `PATH`
pub const DEFAULT_BINARY: &str = "wp";

/// Directory searched when `wp` is not on `PATH`
pub const DEFAULT_FALLBACK_DIR: &str = "/usr/local/bin";

/// Settings for locating `wp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokerConfig {
    /// Executable name
    pub binary: String,
    /// Directories searched after `PATH`
    pub fallback_dirs: Vec<PathBuf>,
    /// Use this file and skip searching
    pub explicit_path: Option<PathBuf>,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            fallback_dirs: vec![PathBuf::from(DEFAULT_FALLBACK_DIR)],
            explicit_path: None,
        }
    }
}

impl InvokerConfig {
    /// Use `path` as the executable.
    pub fn with_binary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    /// Search for a differently named executable.
    pub fn with_binary(mut self, name: impl Into<String>) -> Self {
        self.binary = name.into();
        self
    }

    /// Replace the fallback directories.
    pub fn with_fallback_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.fallback_dirs = dirs;
        self
    }
}
