use anyhow::{Context as _, Result};
use std::io::Read;
use std::path::Path;
use wpkit::backend::wp::WpBackend;
use wpkit::{Client, InvokerConfig};

use crate::Context;
use crate::module::{self, Response};

/// Run as an orchestrator module: read arguments, run wp, print one JSON result.
///
/// Exits the process with status 1 when the result is a failure.
pub fn run(ctx: &Context, args_file: Option<&Path>) -> Result<()> {
    let config = invoker_config(ctx);
    let binary = config.binary.clone();
    let client = Client::with_backend(Box::new(WpBackend::new(config)));

    let response = match read_input(args_file) {
        Ok(input) => module::execute(&client, &binary, &input),
        Err(e) => Response::failure(format!("{e:#}")),
    };

    println!("{}", serde_json::to_string(&response)?);

    if response.failed {
        std::process::exit(response.exit_code());
    }
    Ok(())
}

fn invoker_config(ctx: &Context) -> InvokerConfig {
    match &ctx.wp_bin {
        Some(path) if !path.as_os_str().is_empty() => {
            log::debug!("Using wp from {}", path.display());
            InvokerConfig::default().with_binary_path(path)
        }
        _ => InvokerConfig::default(),
    }
}

/// Read the arguments file, or stdin for `-` / no file.
pub fn read_input(args_file: Option<&Path>) -> Result<String> {
    match args_file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read module arguments from {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Could not read module arguments from stdin")?;
            Ok(input)
        }
    }
}
