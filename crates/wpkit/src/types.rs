//! Catalog, request and result types.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

// ============================================================================
// Catalog entries
// ============================================================================

/// A CLI flag recognized for one subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    /// Flag name without the leading `--`
    pub name: &'static str,
    /// Whether the flag is emitted as `--name=value`
    pub accepts_value: bool,
}

impl OptionSpec {
    /// An option emitted as `--name=value`.
    pub const fn value(name: &'static str) -> Self {
        Self {
            name,
            accepts_value: true,
        }
    }

    /// An option emitted as a bare `--name`.
    pub const fn flag(name: &'static str) -> Self {
        Self {
            name,
            accepts_value: false,
        }
    }
}

/// A subcommand of a top-level WP-CLI command.
///
/// `key` is what callers use to look the subcommand up; `name` is what is
/// written on the command line. They only differ for aliased entries whose
/// real name is awkward in the declaration syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubCommandSpec {
    /// Lookup key
    pub key: &'static str,
    /// Name emitted on the command line
    pub name: &'static str,
    /// Recognized options
    pub options: &'static [OptionSpec],
}

impl SubCommandSpec {
    /// A subcommand looked up and emitted under the same name.
    pub const fn new(name: &'static str, options: &'static [OptionSpec]) -> Self {
        Self {
            key: name,
            name,
            options,
        }
    }

    /// A subcommand looked up under `key` but emitted as `name`.
    pub const fn alias(key: &'static str, name: &'static str, options: &'static [OptionSpec]) -> Self {
        Self { key, name, options }
    }

    /// Whether the lookup key differs from the emitted name.
    pub fn is_alias(&self) -> bool {
        self.key != self.name
    }
}

/// A top-level WP-CLI command (`core`, `theme`, `plugin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    /// Command name, used both for lookup and on the command line
    pub name: &'static str,
    /// Registered subcommands
    pub subcommands: &'static [SubCommandSpec],
}

// ============================================================================
// Requests
// ============================================================================

/// Option names and values in the order they were supplied.
///
/// A `None` value is allowed for any option; value-taking options then format
/// as `--name=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments(Vec<(String, Option<String>)>);

impl Arguments {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option with a value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, Some(value.into()));
        self
    }

    /// Append an option without a value.
    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.push(name, None);
        self
    }

    /// Append an option.
    pub fn push(&mut self, name: impl Into<String>, value: Option<String>) {
        self.0.push((name.into(), value));
    }

    /// Iterate over `(name, value)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_deref()))
    }

    /// Number of supplied options.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no options were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One requested WP-CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Top-level command key
    pub command: String,
    /// Subcommand key
    pub subcommand: String,
    /// Directory of the WordPress installation, passed as `--path`
    pub working_dir: String,
    /// Options for the subcommand
    pub arguments: Arguments,
}

impl Request {
    /// Create a request with no options.
    pub fn new(
        command: impl Into<String>,
        subcommand: impl Into<String>,
        working_dir: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            subcommand: subcommand.into(),
            working_dir: working_dir.into(),
            arguments: Arguments::new(),
        }
    }

    /// Replace the options.
    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = arguments;
        self
    }
}

// ============================================================================
// Execution
// ============================================================================

/// A fully resolved command line, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Path to the `wp` executable
    pub program: PathBuf,
    /// Everything after the program: command, subcommand, flags
    pub args: Vec<String>,
}

impl Invocation {
    /// The full argv as strings, program first.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code (`-1` when terminated by a signal)
    pub code: i32,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Standard output followed by standard error.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Classified outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Whether WP-CLI reported a state change
    pub changed: bool,
    /// Combined output with whitespace runs collapsed
    pub msg: String,
    /// Raw process output
    pub output: CommandOutput,
}

impl Report {
    /// Raw standard output followed by standard error.
    pub fn combined(&self) -> String {
        self.output.combined()
    }
}
