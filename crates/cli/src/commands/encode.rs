//! `padctl encode`: build set-reports

use anyhow::Result;
use hid_xbox360_protocol::{build_led_report, build_rumble_report};
use serde_json::json;

use super::{EncodeCommands, format_hex};
use crate::output;

pub fn execute(cmd: &EncodeCommands, json: bool) -> Result<()> {
    let report: Vec<u8> = match *cmd {
        EncodeCommands::Rumble { left, right } => build_rumble_report(left, right).to_vec(),
        EncodeCommands::Led { pattern } => build_led_report(pattern).to_vec(),
    };

    if json {
        output::print_json(json!({
            "report": hex::encode(&report),
            "length": report.len(),
        }));
    } else {
        println!("{}", format_hex(&report));
    }
    Ok(())
}
