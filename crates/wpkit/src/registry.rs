//! Read-only lookup over a command catalog.

use crate::catalog;
use crate::error::{Error, Result};
use crate::types::{CommandSpec, OptionSpec, SubCommandSpec};

/// Immutable view of the commands a [`Client`](crate::Client) may run.
///
/// Lookups are exact and case-sensitive.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    commands: &'static [CommandSpec],
}

impl Registry {
    /// Registry over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(catalog::COMMANDS)
    }

    /// Registry over a custom catalog.
    pub fn new(commands: &'static [CommandSpec]) -> Self {
        Self { commands }
    }

    /// All registered commands.
    pub fn commands(&self) -> &'static [CommandSpec] {
        self.commands
    }

    /// Look up a top-level command.
    pub fn command(&self, name: &str) -> Result<&'static CommandSpec> {
        self.commands
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::UnknownCommand {
                name: name.to_string(),
            })
    }

    /// Look up a subcommand by its lookup key.
    pub fn subcommand(
        &self,
        command: &'static CommandSpec,
        key: &str,
    ) -> Result<&'static SubCommandSpec> {
        command
            .subcommands
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| Error::UnknownSubCommand {
                command: command.name.to_string(),
                name: key.to_string(),
            })
    }

    /// Look up an option of a subcommand.
    pub fn option(
        &self,
        command: &'static CommandSpec,
        subcommand: &'static SubCommandSpec,
        name: &str,
    ) -> Result<&'static OptionSpec> {
        subcommand
            .options
            .iter()
            .find(|o| o.name == name)
            .ok_or_else(|| Error::UnknownOption {
                command: command.name.to_string(),
                subcommand: subcommand.key.to_string(),
                name: name.to_string(),
            })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
