//! Turn resolved options into WP-CLI flags.

use crate::validate::Resolved;

/// Format options as `--name=value` or `--name`, in input order, followed by
/// `--path=<working_dir>`.
///
/// Values given to flag-only options are dropped. A value-taking option with
/// no value formats as `--name=`.
pub fn format(resolved: &Resolved) -> Vec<String> {
    let mut flags: Vec<String> = resolved
        .options
        .iter()
        .map(|option| {
            if option.spec.accepts_value {
                format!(
                    "--{}={}",
                    option.spec.name,
                    option.value.as_deref().unwrap_or_default()
                )
            } else {
                format!("--{}", option.spec.name)
            }
        })
        .collect();

    flags.push(format!("--path={}", resolved.working_dir));
    flags
}

/// Command, emitted subcommand name, then flags.
pub fn command_args(resolved: &Resolved) -> Vec<String> {
    let mut args = vec![
        resolved.command.name.to_string(),
        resolved.subcommand.name.to_string(),
    ];
    args.extend(format(resolved));
    args
}
