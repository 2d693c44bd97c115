//! Resolve a [`Request`] against a [`Registry`].
//!
//! Resolution runs command, then subcommand, then each option in input order,
//! and stops at the first name that is not in the catalog. Option values are
//! passed through untouched.

use crate::error::Result;
use crate::registry::Registry;
use crate::types::{CommandSpec, OptionSpec, Request, SubCommandSpec};

/// An input option matched to its catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOption {
    /// Catalog entry the input name matched
    pub spec: &'static OptionSpec,
    /// Supplied value, if any
    pub value: Option<String>,
}

/// A request whose every name was found in the catalog.
///
/// Only [`resolve`] builds this, so anything formatted from it has been
/// validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Top-level command
    pub command: &'static CommandSpec,
    /// Subcommand
    pub subcommand: &'static SubCommandSpec,
    /// Options in input order
    pub options: Vec<ResolvedOption>,
    /// Installation directory for `--path`
    pub working_dir: String,
}

/// Validate every name in `request`.
pub fn resolve(registry: &Registry, request: &Request) -> Result<Resolved> {
    let command = registry.command(&request.command)?;
    let subcommand = registry.subcommand(command, &request.subcommand)?;

    let options = request
        .arguments
        .iter()
        .map(|(name, value)| {
            let spec = registry.option(command, subcommand, name)?;
            Ok(ResolvedOption {
                spec,
                value: value.map(str::to_string),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Resolved {} {} ({} option(s))",
        command.name,
        subcommand.name,
        options.len()
    );

    Ok(Resolved {
        command,
        subcommand,
        options,
        working_dir: request.working_dir.clone(),
    })
}
