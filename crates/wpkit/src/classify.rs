//! Decide from WP-CLI's output whether a run changed anything.
//!
//! WP-CLI has no machine-readable "changed" signal for these commands, so the
//! decision is made from its status text. Rules are applied in order over the
//! whole output and the last matching rule wins.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::{CommandOutput, Report};

/// A substring and the changed state it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Literal text to look for
    pub needle: &'static str,
    /// Changed state when found
    pub changed: bool,
}

/// Status-text rules, lowest priority first.
pub const RULES: &[Rule] = &[
    Rule {
        needle: "Success",
        changed: true,
    },
    Rule {
        needle: "update_type",
        changed: true,
    },
    // "Updated 0/0 plugins"
    Rule {
        needle: "0/0",
        changed: false,
    },
    Rule {
        needle: "WordPress is at the latest version",
        changed: false,
    },
];

fn regex_whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex literal"))
}

/// Collapse whitespace runs to a single space and trim.
pub fn normalize(text: &str) -> String {
    regex_whitespace().replace_all(text, " ").trim().to_string()
}

/// Apply [`RULES`] to normalized text. No match means unchanged.
pub fn detect_change(normalized: &str) -> bool {
    RULES
        .iter()
        .rev()
        .find(|rule| normalized.contains(rule.needle))
        .is_some_and(|rule| rule.changed)
}

/// Classify a finished run.
///
/// A non-zero exit code is a [`Error::ToolFailed`] regardless of the text.
pub fn classify(output: CommandOutput) -> Result<Report> {
    if !output.success() {
        return Err(Error::ToolFailed {
            code: output.code,
            stdout: output.stdout,
            stderr: output.stderr,
        });
    }

    let msg = normalize(&output.combined());
    let changed = detect_change(&msg);
    log::debug!("Classified output as changed={changed}");

    Ok(Report {
        changed,
        msg,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(stdout: &str) -> CommandOutput {
        CommandOutput {
            code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  a\n\n b\t c  \n"), "a b c");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\n\t "), "");
    }

    #[test]
    fn test_latest_version_is_unchanged() {
        let report = classify(ok("Success: WordPress is at the latest version.\n")).unwrap();
        assert!(!report.changed);
        assert_eq!(report.msg, "Success: WordPress is at the latest version.");
    }

    #[test]
    fn test_updated_is_changed() {
        let report = classify(ok("Success: Updated 1/1 plugins.\n")).unwrap();
        assert!(report.changed);
    }

    #[test]
    fn test_zero_of_zero_overrides_success() {
        let report = classify(ok("Success: Updated 0/0 themes.")).unwrap();
        assert!(!report.changed);
    }

    #[test]
    fn test_update_type_table() {
        let text = "+---------+-------------+\n| version | update_type |\n+---------+-------------+\n| 6.4.3   | minor       |\n";
        let report = classify(ok(text)).unwrap();
        assert!(report.changed);
        assert!(!report.msg.contains('\n'));
    }

    #[test]
    fn test_no_rule_matches() {
        let report = classify(ok("Downloading WordPress 6.4.3 (en_US)...")).unwrap();
        assert!(!report.changed);
    }

    #[test]
    fn test_stderr_is_scanned() {
        let output = CommandOutput {
            code: 0,
            stdout: "Plugin 'akismet' updated.\n".to_string(),
            stderr: "Success: Updated 1/1 plugins.\n".to_string(),
        };
        let report = classify(output).unwrap();
        assert!(report.changed);
        assert_eq!(
            report.combined(),
            "Plugin 'akismet' updated.\nSuccess: Updated 1/1 plugins.\n"
        );
    }

    #[test]
    fn test_rule_text_split_across_lines() {
        // Normalization joins the phrase before matching
        let report = classify(ok("WordPress is at the\nlatest   version")).unwrap();
        assert!(!report.changed);
    }

    #[test]
    fn test_non_zero_exit_fails() {
        let output = CommandOutput {
            code: 1,
            stdout: "Success: looks fine".to_string(),
            stderr: "Error: Can't connect to the database.".to_string(),
        };
        let err = classify(output).unwrap_err();
        match err {
            Error::ToolFailed { code, stderr, .. } => {
                assert_eq!(code, 1);
                assert_eq!(stderr, "Error: Can't connect to the database.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
