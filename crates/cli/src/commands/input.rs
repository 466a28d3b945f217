//! `padctl input`: parse a native 20-byte input report

use anyhow::Result;
use hid_xbox360_protocol::ControllerInputReport;
use serde_json::json;

use super::parse_hex;
use crate::error::CliError;
use crate::output;

pub fn execute(report_hex: &str, json: bool) -> Result<()> {
    let bytes = parse_hex(report_hex)?;
    let report = ControllerInputReport::parse(&bytes).map_err(CliError::from)?;
    let pressed: Vec<String> = report.pressed().map(|b| format!("{b:?}")).collect();

    if json {
        let fields = serde_json::to_value(report).map_err(CliError::from)?;
        output::print_json(json!({ "report": fields, "pressed": pressed }));
        return Ok(());
    }

    output::print_heading("Input report");
    let buttons = if pressed.is_empty() {
        "none".to_string()
    } else {
        pressed.join(", ")
    };
    output::print_field("Buttons", buttons);
    output::print_field(
        "Triggers",
        format!("L {} / R {}", report.left_trigger, report.right_trigger),
    );
    output::print_field("Left stick", format!("({}, {})", report.left_x, report.left_y));
    output::print_field("Right stick", format!("({}, {})", report.right_x, report.right_y));
    Ok(())
}
