use anyhow::Result;
use wpkit::{Registry, classify};

use crate::Context;
use crate::ui;

/// Print the catalog of accepted commands.
pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let registry = Registry::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(registry.commands())?);
        return Ok(());
    }

    ui::header("WP-CLI catalog");

    for command in registry.commands() {
        ui::section(command.name);
        for sub in command.subcommands {
            ui::subcommand(sub.key, sub.is_alias().then_some(sub.name));
            if sub.options.is_empty() {
                ui::dim("(no options)");
            }
            for option in sub.options {
                ui::option(option.name, option.accepts_value);
            }
        }
    }

    println!();
    ui::dim("Every run also passes --path=<working_dir>.");

    if ctx.verbose > 0 {
        ui::section("Changed detection (last match wins)");
        for rule in classify::RULES {
            ui::rule(rule.needle, rule.changed);
        }
        println!();
    }
    Ok(())
}
