//! `padctl descriptor`: dump the synthetic HID report descriptor

use anyhow::Result;
use hid_xbox360_protocol::{REPORT_DESCRIPTOR, descriptor};
use serde_json::json;

use super::format_hex;
use crate::output;

/// Bytes per line in the hex dump.
const DUMP_WIDTH: usize = 16;

pub fn execute(annotate: bool, json: bool) -> Result<()> {
    let input_bits = descriptor::input_report_bits(REPORT_DESCRIPTOR)?;

    if json {
        let mut payload = json!({
            "length": REPORT_DESCRIPTOR.len(),
            "usage_page": descriptor::primary_usage_page(),
            "usage": descriptor::primary_usage(),
            "input_bits": input_bits,
            "hex": hex::encode(REPORT_DESCRIPTOR),
        });
        if annotate {
            let items = descriptor::items(REPORT_DESCRIPTOR)
                .map(|item| {
                    item.map(|item| {
                        json!({
                            "offset": item.offset,
                            "name": item.name(),
                            "value": item.signed(),
                        })
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(map) = payload.as_object_mut() {
                map.insert("items".to_string(), json!(items));
            }
        }
        output::print_json(payload);
        return Ok(());
    }

    output::print_heading("Report descriptor");
    output::print_field("Length", format!("{} bytes", REPORT_DESCRIPTOR.len()));
    output::print_field(
        "Usage page",
        format!("{:#04x} (Generic Desktop)", descriptor::primary_usage_page()),
    );
    output::print_field(
        "Usage",
        format!("{:#04x} (Game Pad)", descriptor::primary_usage()),
    );
    output::print_field("Input bits", input_bits);
    println!();

    if annotate {
        let mut depth = 0usize;
        for item in descriptor::items(REPORT_DESCRIPTOR) {
            let item = item?;
            let raw = REPORT_DESCRIPTOR
                .get(item.offset..item.offset.saturating_add(item.encoded_len()))
                .unwrap_or_default();
            if item.name() == "End Collection" {
                depth = depth.saturating_sub(1);
            }
            let indent = "  ".repeat(depth);
            if item.data.is_empty() {
                println!("  {:04X}  {:<12} {indent}{}", item.offset, format_hex(raw), item.name());
            } else {
                println!(
                    "  {:04X}  {:<12} {indent}{} ({})",
                    item.offset,
                    format_hex(raw),
                    item.name(),
                    item.signed()
                );
            }
            if item.name() == "Collection" {
                depth = depth.saturating_add(1);
            }
        }
    } else {
        for (line, chunk) in REPORT_DESCRIPTOR.chunks(DUMP_WIDTH).enumerate() {
            println!("  {:04X}  {}", line.saturating_mul(DUMP_WIDTH), format_hex(chunk));
        }
    }
    Ok(())
}
