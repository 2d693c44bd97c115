//! Error types for WP-CLI invocations.
//!
//! Every error is terminal for the current invocation. Validation errors are
//! raised before any process is started; the rest are raised while locating
//! or running `wp`.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of an [`Error`], used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A command, subcommand or option name is not in the catalog
    Validation,
    /// The `wp` executable could not be found
    BinaryNotFound,
    /// `wp` ran and exited with a non-zero status
    ToolFailure,
    /// The process could not be spawned or read
    Io,
}

impl ErrorKind {
    /// Get a user-friendly description of this error kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Validation => "Invalid request",
            Self::BinaryNotFound => "WP-CLI not installed",
            Self::ToolFailure => "WP-CLI reported a failure",
            Self::Io => "Could not run WP-CLI",
        }
    }
}

/// Errors that can occur while validating or running a WP-CLI command.
#[derive(Debug, Error)]
pub enum Error {
    /// Top-level command is not in the catalog
    #[error("command not available: {name}")]
    UnknownCommand {
        /// Requested command name
        name: String,
    },

    /// Subcommand is not registered under the resolved command
    #[error("subcommand '{name}' not available in command '{command}'")]
    UnknownSubCommand {
        /// Resolved command name
        command: String,
        /// Requested subcommand key
        name: String,
    },

    /// Option is not registered under the resolved subcommand
    #[error("option '{name}' not available in subcommand '{command} {subcommand}'")]
    UnknownOption {
        /// Resolved command name
        command: String,
        /// Resolved subcommand key
        subcommand: String,
        /// Requested option name
        name: String,
    },

    /// The `wp` executable was not found
    #[error("{}", not_found_message(.binary, .searched))]
    BinaryNotFound {
        /// Executable name that was searched for
        binary: String,
        /// Fallback directories that were searched after PATH
        searched: Vec<PathBuf>,
    },

    /// `wp` exited with a non-zero status
    #[error("wp exited with status {code}: {}", .stderr.trim())]
    ToolFailed {
        /// Exit code (`-1` when terminated by a signal)
        code: i32,
        /// Captured standard output
        stdout: String,
        /// Captured standard error
        stderr: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the error kind for reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownCommand { .. }
            | Error::UnknownSubCommand { .. }
            | Error::UnknownOption { .. } => ErrorKind::Validation,
            Error::BinaryNotFound { .. } => ErrorKind::BinaryNotFound,
            Error::ToolFailed { .. } => ErrorKind::ToolFailure,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Whether this error was raised before any process was started.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Exit code of the failed `wp` process, if one ran.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::ToolFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

fn not_found_message(binary: &str, searched: &[PathBuf]) -> String {
    if searched.is_empty() {
        return format!("{binary} not found");
    }
    let dirs = searched
        .iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{binary} not found in PATH or {dirs}")
}

/// Result type for WP-CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_kinds() {
        let err = Error::UnknownCommand {
            name: "user".to_string(),
        };
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "command not available: user");

        let err = Error::UnknownOption {
            command: "core".to_string(),
            subcommand: "install".to_string(),
            name: "locale".to_string(),
        };
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "option 'locale' not available in subcommand 'core install'"
        );
    }

    #[test]
    fn test_tool_failure() {
        let err = Error::ToolFailed {
            code: 1,
            stdout: String::new(),
            stderr: "Error: This does not seem to be a WordPress installation.\n".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::ToolFailure);
        assert_eq!(err.exit_code(), Some(1));
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "wp exited with status 1: Error: This does not seem to be a WordPress installation."
        );
    }

    #[test]
    fn test_binary_not_found_message() {
        let err = Error::BinaryNotFound {
            binary: "wp".to_string(),
            searched: vec![PathBuf::from("/usr/local/bin")],
        };
        assert_eq!(err.kind(), ErrorKind::BinaryNotFound);
        assert_eq!(err.to_string(), "wp not found in PATH or /usr/local/bin");
        assert_eq!(err.exit_code(), None);

        let err = Error::BinaryNotFound {
            binary: "/opt/wp".to_string(),
            searched: Vec::new(),
        };
        assert_eq!(err.to_string(), "/opt/wp not found");
    }
}
