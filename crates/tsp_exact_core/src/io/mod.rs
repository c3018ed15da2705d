pub(crate) mod input;
pub(crate) mod options;
pub(crate) mod report;

use std::iter::Peekable;

use crate::{Error, Result};

/// Splits `--name=value` or `--name value` into its parts, consuming the
/// following argument only when it does not look like another flag.
pub(crate) fn split_arg(
    raw_name: &str,
    args: &mut Peekable<impl Iterator<Item = String>>,
) -> (String, Option<String>) {
    if let Some((name, value)) = raw_name.split_once('=') {
        return (name.to_string(), Some(value.to_string()));
    }

    let value = match args.peek() {
        Some(next) if !next.starts_with("--") => args.next(),
        _ => None,
    };

    (raw_name.to_string(), value)
}

pub(crate) fn require_value(name: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::invalid_input(format!("Missing value for --{name}")))
}

pub(crate) fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "off" | "OFF" => Ok(false),
        _ => Err(Error::invalid_input(format!(
            "Invalid boolean for --{name}: {value} (expected true/false)"
        ))),
    }
}
