//! Real WP-CLI backend using the `wp` executable.

use crate::backend::Backend;
use crate::config::InvokerConfig;
use crate::error::{Error, Result};
use crate::types::{CommandOutput, Invocation};
use std::path::PathBuf;
use std::process::Command;

/// Backend that executes the real `wp` binary.
pub struct WpBackend {
    config: InvokerConfig,
}

impl WpBackend {
    /// Create a backend with explicit settings.
    pub fn new(config: InvokerConfig) -> Self {
        Self { config }
    }
}

impl Backend for WpBackend {
    fn locate(&self) -> Result<PathBuf> {
        find_wp(&self.config)
    }

    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        log::info!("Running: {invocation}");

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::BinaryNotFound {
                        binary: invocation.program.display().to_string(),
                        searched: Vec::new(),
                    }
                } else {
                    Error::Io(e)
                }
            })?;

        let code = output.status.code().unwrap_or(-1);
        log::debug!("wp exited with status {code}");

        Ok(CommandOutput {
            code,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Find the `wp` executable according to `config`.
pub fn find_wp(config: &InvokerConfig) -> Result<PathBuf> {
    if let Some(path) = &config.explicit_path {
        if path.is_file() {
            return Ok(path.clone());
        }
        return Err(Error::BinaryNotFound {
            binary: path.display().to_string(),
            searched: Vec::new(),
        });
    }

    if let Ok(path) = which::which(&config.binary) {
        log::debug!("Found {} in PATH: {}", config.binary, path.display());
        return Ok(path);
    }

    for dir in &config.fallback_dirs {
        if let Ok(path) = which::which_in(&config.binary, Some(dir), dir) {
            log::debug!("Found {} in fallback dir: {}", config.binary, path.display());
            return Ok(path);
        }
    }

    Err(Error::BinaryNotFound {
        binary: config.binary.clone(),
        searched: config.fallback_dirs.clone(),
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    const MISSING: &str = "wpkit-test-binary-that-does-not-exist";

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_find_in_fallback_dir() {
        let dir = TempDir::new().unwrap();
        let script = write_script(dir.path(), MISSING, "exit 0");

        let config = InvokerConfig::default()
            .with_binary(MISSING)
            .with_fallback_dirs(vec![dir.path().to_path_buf()]);

        assert_eq!(find_wp(&config).unwrap(), script);
    }

    #[test]
    fn test_not_found_lists_searched_dirs() {
        let dir = TempDir::new().unwrap();
        let config = InvokerConfig::default()
            .with_binary(MISSING)
            .with_fallback_dirs(vec![dir.path().to_path_buf()]);

        match find_wp(&config).unwrap_err() {
            Error::BinaryNotFound { binary, searched } => {
                assert_eq!(binary, MISSING);
                assert_eq!(searched, vec![dir.path().to_path_buf()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let config = InvokerConfig::default().with_binary_path(dir.path().join("wp"));
        assert!(matches!(
            find_wp(&config),
            Err(Error::BinaryNotFound { .. })
        ));

        let script = write_script(dir.path(), "wp", "exit 0");
        assert_eq!(find_wp(&config).unwrap(), script);
    }

    #[test]
    fn test_run_captures_streams_and_args() {
        let dir = TempDir::new().unwrap();
        let script = write_script(
            dir.path(),
            "wp",
            r#"for a in "$@"; do echo "[$a]"; done
echo "Warning: something" >&2"#,
        );

        let backend = WpBackend::new(InvokerConfig::default().with_binary_path(&script));
        let invocation = Invocation {
            program: backend.locate().unwrap(),
            args: vec![
                "core".to_string(),
                "install".to_string(),
                "--title=My Blog".to_string(),
                "--path=/srv/site".to_string(),
            ],
        };

        let output = backend.run(&invocation).unwrap();
        assert_eq!(output.code, 0);
        assert_eq!(
            output.stdout,
            "[core]\n[install]\n[--title=My Blog]\n[--path=/srv/site]\n"
        );
        assert_eq!(output.stderr, "Warning: something\n");
    }

    #[test]
    fn test_run_reports_exit_code() {
        let dir = TempDir::new().unwrap();
        let script = write_script(dir.path(), "wp", "echo 'Error: nope' >&2\nexit 3");

        let backend = WpBackend::new(InvokerConfig::default().with_binary_path(&script));
        let invocation = Invocation {
            program: script,
            args: Vec::new(),
        };

        let output = backend.run(&invocation).unwrap();
        assert_eq!(output.code, 3);
        assert_eq!(output.stderr, "Error: nope\n");
    }
}
