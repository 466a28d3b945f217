//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use serde_json::{Value, json};

use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print a successful JSON payload, merging in `"success": true`.
pub fn print_json(mut payload: Value) {
    if let Value::Object(map) = &mut payload {
        map.insert("success".to_string(), Value::Bool(true));
    }
    match serde_json::to_string_pretty(&payload) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format output as JSON: {e}"),
    }
}

/// Print a `label: value` line.
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("  {:<14} {}", format!("{label}:").dimmed(), value);
}

pub fn print_heading(text: &str) {
    println!("{}", text.bold());
}

/// Colored status word for a facade result.
pub fn status_label(result: &padbridge_hid::IoResult) -> ColoredString {
    match result {
        Ok(()) => "ok".green(),
        Err(e) => format!("{e} ({:#010x})", e.code()).red(),
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(CliError::InvalidHex { .. }) => "InvalidHex",
        Some(CliError::InvalidReport(_)) => "InvalidReport",
        Some(CliError::InvalidConfiguration { .. }) => "InvalidConfiguration",
        Some(CliError::Device(_)) => "Device",
        Some(CliError::JsonError(_)) => "JsonError",
        None => "Error",
    }
}
