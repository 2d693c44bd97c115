//! Ansible binary-module protocol: JSON arguments in, one JSON result out.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{Map, Value};
use wpkit::{Arguments, Client, Error, Report, Request, classify};

/// Name used in orchestrator-facing messages
pub const MODULE_NAME: &str = "wpcli";

const PARAMETERS: &[&str] = &["command", "subcommand", "arguments", "working_dir"];
const REQUIRED: &[&str] = &["command", "subcommand", "working_dir"];
const INTERNAL_PREFIX: &str = "_ansible_";
const WRAPPER_KEY: &str = "ANSIBLE_MODULE_ARGS";

/// Decoded module parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleArgs {
    pub request: Request,
    pub check_mode: bool,
}

/// The single JSON object printed on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub changed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd: Option<Vec<String>>,
}

impl Response {
    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            changed: false,
            failed: true,
            skipped: false,
            msg: msg.into(),
            stdout: None,
            rc: None,
            cmd: None,
        }
    }

    fn from_report(report: Report, cmd: Vec<String>) -> Self {
        Self {
            changed: report.changed,
            failed: false,
            skipped: false,
            stdout: Some(report.combined()),
            rc: Some(report.output.code),
            msg: report.msg,
            cmd: Some(cmd),
        }
    }

    fn from_error(err: Error) -> Self {
        log::warn!("{}: {err}", err.kind().description());
        match err {
            Error::ToolFailed { code, stderr, .. } => {
                let mut msg = classify::normalize(&stderr);
                if msg.is_empty() {
                    msg = format!("wp exited with status {code}");
                }
                Self {
                    stdout: Some(stderr),
                    rc: Some(code),
                    ..Self::failure(msg)
                }
            }
            other => Self::failure(other.to_string()),
        }
    }

    fn check_mode(binary: &str, plan: Vec<String>) -> Self {
        let cmd: Vec<String> = std::iter::once(binary.to_string()).chain(plan).collect();
        Self {
            changed: false,
            failed: false,
            skipped: true,
            msg: format!("check mode: would run {}", cmd.join(" ")),
            stdout: None,
            rc: None,
            cmd: Some(cmd),
        }
    }

    fn with_cmd(mut self, cmd: Vec<String>) -> Self {
        self.cmd = Some(cmd);
        self
    }

    /// Process exit status the orchestrator expects.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.failed)
    }
}

/// Decode module arguments from the JSON the orchestrator wrote.
///
/// Accepts either the bare parameter object or one wrapped in
/// `{"ANSIBLE_MODULE_ARGS": {...}}`.
pub fn parse_args(input: &str) -> Result<ModuleArgs> {
    let value: Value = serde_json::from_str(input).context("module arguments are not valid JSON")?;
    let Value::Object(mut params) = value else {
        bail!("module arguments must be a JSON object");
    };

    if params.len() == 1 {
        if let Some(Value::Object(inner)) = params.remove(WRAPPER_KEY) {
            params = inner;
        }
    }

    let mut unsupported: Vec<&str> = params
        .keys()
        .map(String::as_str)
        .filter(|k| !PARAMETERS.contains(k) && !k.starts_with(INTERNAL_PREFIX))
        .collect();
    if !unsupported.is_empty() {
        unsupported.sort_unstable();
        bail!(
            "Unsupported parameters for ({MODULE_NAME}) module: {}. Supported parameters include: {}",
            unsupported.join(", "),
            PARAMETERS.join(", ")
        );
    }

    let missing: Vec<&str> = REQUIRED
        .iter()
        .copied()
        .filter(|k| params.get(*k).is_none_or(Value::is_null))
        .collect();
    if !missing.is_empty() {
        bail!("missing required arguments: {}", missing.join(", "));
    }

    let request = Request {
        command: string_param(&params, "command")?,
        subcommand: string_param(&params, "subcommand")?,
        working_dir: string_param(&params, "working_dir")?,
        arguments: arguments_param(&params)?,
    };

    let check_mode = params
        .get("_ansible_check_mode")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Ok(ModuleArgs {
        request,
        check_mode,
    })
}

fn string_param(params: &Map<String, Value>, name: &str) -> Result<String> {
    params
        .get(name)
        .and_then(scalar_to_string)
        .with_context(|| format!("argument '{name}' must be a string"))
}

fn arguments_param(params: &Map<String, Value>) -> Result<Arguments> {
    let options = match params.get("arguments") {
        None | Some(Value::Null) => return Ok(Arguments::new()),
        Some(Value::Object(options)) => options,
        Some(_) => bail!("argument 'arguments' must be a dict"),
    };

    let mut arguments = Arguments::new();
    for (name, value) in options {
        let value = match value {
            Value::Null => None,
            other => Some(scalar_to_string(other).with_context(|| {
                format!("value of option '{name}' must be a string, number, boolean or null")
            })?),
        };
        arguments.push(name.as_str(), value);
    }
    Ok(arguments)
}

/// Strings as-is, numbers and booleans as their JSON text.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Run one module invocation end to end and build its response.
pub fn execute(client: &Client, binary: &str, input: &str) -> Response {
    let args = match parse_args(input) {
        Ok(args) => args,
        Err(e) => {
            log::warn!("Invalid module arguments: {e:#}");
            return Response::failure(format!("{e:#}"));
        }
    };

    if args.check_mode {
        log::info!("Check mode: not running wp");
        return match client.plan(&args.request) {
            Ok(plan) => Response::check_mode(binary, plan),
            Err(e) => Response::from_error(e),
        };
    }

    let invocation = match client.prepare(&args.request) {
        Ok(invocation) => invocation,
        Err(e) => return Response::from_error(e),
    };

    match client.execute(&invocation) {
        Ok(report) => Response::from_report(report, invocation.argv()),
        Err(e) => Response::from_error(e).with_cmd(invocation.argv()),
    }
}
