//! Backend abstraction for running WP-CLI.
//!
//! The [`Backend`] trait separates the catalog/classification pipeline from
//! process execution, so the pipeline can be driven by a fake in tests.

pub mod wp;

use crate::error::Result;
use crate::types::{CommandOutput, Invocation};
use std::path::PathBuf;

/// Backend trait for WP-CLI execution.
pub trait Backend: Send + Sync {
    /// Find the `wp` executable.
    fn locate(&self) -> Result<PathBuf>;

    /// Run a resolved command line to completion and capture its output.
    ///
    /// A non-zero exit code is not an error at this level.
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;
}

/// Get the default backend (real `wp` executable, default search order).
pub fn default_backend() -> wp::WpBackend {
    wp::WpBackend::new(crate::config::InvokerConfig::default())
}
