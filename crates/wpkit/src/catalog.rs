//! The built-in catalog of WP-CLI commands this crate knows how to run.
//!
//! Only names listed here pass validation. Adding a subcommand or option is a
//! data change in this file.

use crate::types::{CommandSpec, OptionSpec, SubCommandSpec};

const CORE_INSTALL: &[OptionSpec] = &[
    OptionSpec::value("url"),
    OptionSpec::value("title"),
    OptionSpec::value("admin_user"),
    OptionSpec::value("admin_password"),
    OptionSpec::value("admin_email"),
    OptionSpec::flag("skip-email"),
];

const CORE_CONFIG: &[OptionSpec] = &[
    OptionSpec::value("dbname"),
    OptionSpec::value("dbuser"),
    OptionSpec::value("dbpass"),
];

const UPDATE_ALL: &[OptionSpec] = &[OptionSpec::flag("all")];

const NO_OPTIONS: &[OptionSpec] = &[];

const CORE_SUBCOMMANDS: &[SubCommandSpec] = &[
    SubCommandSpec::new("install", CORE_INSTALL),
    // `core update` takes no options
    SubCommandSpec::new("update", NO_OPTIONS),
    SubCommandSpec::new("download", NO_OPTIONS),
    SubCommandSpec::new("config", CORE_CONFIG),
    SubCommandSpec::new("update-db", NO_OPTIONS),
    SubCommandSpec::alias("checkUpdate", "check-update", NO_OPTIONS),
];

const THEME_SUBCOMMANDS: &[SubCommandSpec] = &[SubCommandSpec::new("update", UPDATE_ALL)];

const PLUGIN_SUBCOMMANDS: &[SubCommandSpec] = &[SubCommandSpec::new("update", UPDATE_ALL)];

/// `core`: manage the WordPress code itself.
pub const CORE: CommandSpec = CommandSpec {
    name: "core",
    subcommands: CORE_SUBCOMMANDS,
};

/// `theme`: update installed themes.
pub const THEME: CommandSpec = CommandSpec {
    name: "theme",
    subcommands: THEME_SUBCOMMANDS,
};

/// `plugin`: update installed plugins.
pub const PLUGIN: CommandSpec = CommandSpec {
    name: "plugin",
    subcommands: PLUGIN_SUBCOMMANDS,
};

/// Every top-level command in the built-in catalog.
pub const COMMANDS: &[CommandSpec] = &[CORE, THEME, PLUGIN];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_command_names_unique() {
        let names: HashSet<&str> = COMMANDS.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), COMMANDS.len());
    }

    #[test]
    fn test_subcommand_keys_unique() {
        for command in COMMANDS {
            let keys: HashSet<&str> = command.subcommands.iter().map(|s| s.key).collect();
            assert_eq!(
                keys.len(),
                command.subcommands.len(),
                "duplicate subcommand key in {}",
                command.name
            );
        }
    }

    #[test]
    fn test_option_names_unique() {
        for command in COMMANDS {
            for sub in command.subcommands {
                let names: HashSet<&str> = sub.options.iter().map(|o| o.name).collect();
                assert_eq!(
                    names.len(),
                    sub.options.len(),
                    "duplicate option in {} {}",
                    command.name,
                    sub.key
                );
            }
        }
    }

    #[test]
    fn test_core_install_options() {
        let install = CORE.subcommands.iter().find(|s| s.key == "install").unwrap();
        let takes_value: Vec<&str> = install
            .options
            .iter()
            .filter(|o| o.accepts_value)
            .map(|o| o.name)
            .collect();
        assert_eq!(
            takes_value,
            vec!["url", "title", "admin_user", "admin_password", "admin_email"]
        );
        assert!(
            install
                .options
                .iter()
                .any(|o| o.name == "skip-email" && !o.accepts_value)
        );
    }

    #[test]
    fn test_core_update_takes_no_options() {
        let update = CORE.subcommands.iter().find(|s| s.key == "update").unwrap();
        assert!(update.options.is_empty());
    }

    #[test]
    fn test_only_check_update_is_aliased() {
        let aliases: Vec<(&str, &str)> = COMMANDS
            .iter()
            .flat_map(|c| c.subcommands.iter())
            .filter(|s| s.is_alias())
            .map(|s| (s.key, s.name))
            .collect();
        assert_eq!(aliases, vec![("checkUpdate", "check-update")]);
    }
}
