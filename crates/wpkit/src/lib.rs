//! # wpkit
//!
//! Run a fixed catalog of WP-CLI commands and report whether they changed the
//! WordPress installation.
//!
//! Each run is linear: the request is validated against the catalog, its
//! options are formatted as flags, `wp` is executed once, and the output text
//! is classified as changed or unchanged. A non-zero exit code is an error.
//!
//! ## Example
//!
//! ```no_run
//! use wpkit::{Arguments, Client, Request};
//!
//! let client = Client::new();
//!
//! let request = Request::new("plugin", "update", "/var/www/html")
//!     .with_arguments(Arguments::new().with_flag("all"));
//!
//! let report = client.run(&request).expect("wp failed");
//! if report.changed {
//!     println!("{}", report.msg);
//! }
//! ```
//!
//! ## Catalog
//!
//! | command  | subcommands |
//! |----------|-------------|
//! | `core`   | `install`, `update`, `download`, `config`, `update-db`, `checkUpdate` (runs `check-update`) |
//! | `theme`  | `update` |
//! | `plugin` | `update` |
//!
//! See [`catalog`] for the options each subcommand accepts.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod flags;
pub mod registry;
pub mod types;
pub mod validate;

pub use config::InvokerConfig;
pub use error::{Error, ErrorKind, Result};
pub use registry::Registry;
pub use types::{
    Arguments, CommandOutput, CommandSpec, Invocation, OptionSpec, Report, Request,
    SubCommandSpec,
};
pub use validate::Resolved;

use backend::Backend;

/// High-level client for WP-CLI runs.
///
/// The client holds the registry used for validation and the backend used
/// for execution. Neither keeps state between runs.
pub struct Client {
    registry: Registry,
    backend: Box<dyn Backend>,
}

impl Client {
    /// Create a client with the built-in catalog and the real `wp` backend.
    pub fn new() -> Self {
        Self::with_backend(Box::new(backend::default_backend()))
    }

    /// Create a client with a custom backend (useful for testing).
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self {
            registry: Registry::builtin(),
            backend,
        }
    }

    /// Validate every name in a request.
    pub fn resolve(&self, request: &Request) -> Result<Resolved> {
        validate::resolve(&self.registry, request)
    }

    /// Arguments that would follow `wp` for this request.
    ///
    /// Validates the request but does not look for the executable.
    pub fn plan(&self, request: &Request) -> Result<Vec<String>> {
        let resolved = self.resolve(request)?;
        Ok(flags::command_args(&resolved))
    }

    /// Validate, format and locate `wp`, without running anything.
    pub fn prepare(&self, request: &Request) -> Result<Invocation> {
        let args = self.plan(request)?;
        let program = self.backend.locate()?;
        Ok(Invocation { program, args })
    }

    /// Run a prepared invocation and classify its output.
    pub fn execute(&self, invocation: &Invocation) -> Result<Report> {
        let output = self.backend.run(invocation)?;
        classify::classify(output)
    }

    /// Validate, run and classify a request.
    pub fn run(&self, request: &Request) -> Result<Report> {
        let invocation = self.prepare(request)?;
        self.execute(&invocation)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
