//! `padctl decode`: decode a set-report

use anyhow::Result;
use hid_xbox360_protocol::{LedPattern, SetReportCommand};
use serde_json::json;

use super::parse_hex;
use crate::error::CliError;
use crate::output;

pub fn execute(report_hex: &str, json: bool) -> Result<()> {
    let report = parse_hex(report_hex)?;
    let command = SetReportCommand::decode(&report).map_err(CliError::from)?;

    match command {
        SetReportCommand::Rumble { left, right } => {
            if json {
                output::print_json(json!({
                    "command": "rumble",
                    "opcode": command.opcode(),
                    "left": left,
                    "right": right,
                }));
            } else {
                output::print_heading("Rumble");
                output::print_field("Left motor", left);
                output::print_field("Right motor", right);
            }
        }
        SetReportCommand::Leds { pattern } => {
            let description = LedPattern::from_u8(pattern).map(LedPattern::description);
            if json {
                output::print_json(json!({
                    "command": "leds",
                    "opcode": command.opcode(),
                    "pattern": pattern,
                    "description": description,
                }));
            } else {
                output::print_heading("LEDs");
                output::print_field("Pattern", format!("{pattern:#04x}"));
                output::print_field("Meaning", description.unwrap_or("undocumented pattern"));
            }
        }
    }
    Ok(())
}
