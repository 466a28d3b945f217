//! `padctl simulate`: drive a facade attached to a virtual peripheral

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use padbridge_hid::{
    HidFacade, IoResult, ReportType, Service, VirtualPeripheral, VirtualPeripheralConfig,
};
use serde_json::{Value, json};
use tracing::info;

use super::{format_hex, parse_hex};
use crate::config::load_peripheral_config;
use crate::error::CliError;
use crate::output;

pub fn execute(config: Option<&Path>, reports: &[String], json: bool) -> Result<()> {
    let config = match config {
        Some(path) => load_peripheral_config(path)?,
        None => VirtualPeripheralConfig::default(),
    };
    let reports = reports
        .iter()
        .map(|r| parse_hex(r))
        .collect::<Result<Vec<_>, _>>()?;

    let pad = Arc::new(VirtualPeripheral::new(config));
    let node: Arc<dyn Service> = pad.clone();
    let facade = HidFacade::<VirtualPeripheral>::new();
    facade.start(&node).map_err(CliError::from)?;
    info!(reports = reports.len(), "simulating set_report sequence");

    let results: Vec<(Vec<u8>, IoResult)> = reports
        .into_iter()
        .map(|report| {
            let result = facade.set_report(&report, ReportType::Output, 0);
            (report, result)
        })
        .collect();

    if json {
        print_json(&facade, &pad, &results);
    } else {
        print_human(&facade, &pad, &results);
    }
    Ok(())
}

fn print_json(facade: &HidFacade<VirtualPeripheral>, pad: &VirtualPeripheral, results: &[(Vec<u8>, IoResult)]) {
    let results: Vec<Value> = results
        .iter()
        .map(|(report, result)| match result {
            Ok(()) => json!({ "report": hex::encode(report), "status": "ok" }),
            Err(e) => json!({
                "report": hex::encode(report),
                "status": "error",
                "code": e.code(),
                "message": e.to_string(),
            }),
        })
        .collect();

    output::print_json(json!({
        "results": results,
        "state": pad.state(),
        "identity": identity(facade),
    }));
}

fn print_human(facade: &HidFacade<VirtualPeripheral>, pad: &VirtualPeripheral, results: &[(Vec<u8>, IoResult)]) {
    output::print_heading("Reports");
    if results.is_empty() {
        println!("  (none)");
    }
    for (report, result) in results {
        println!("  {:<14} {}", format_hex(report), output::status_label(result));
    }
    println!();

    let state = pad.state();
    output::print_heading("Peripheral state");
    output::print_field(
        "Rumble",
        format!("left {} / right {}", state.rumble.0, state.rumble.1),
    );
    output::print_field(
        "LED pattern",
        state
            .led_pattern
            .map_or_else(|| "unset".to_string(), |p| format!("{p:#04x}")),
    );
    output::print_field(
        "Commands",
        format!("{} rumble, {} LED", state.rumble_calls, state.led_calls),
    );
    println!();

    output::print_heading("Identity");
    output::print_field("Manufacturer", facade.new_manufacturer_string());
    output::print_field("Product", facade.new_product_string());
    output::print_field("Serial", facade.new_serial_number_string());
    output::print_field("Vendor ID", format!("{:#06x}", facade.new_vendor_id_number()));
    output::print_field("Product ID", format!("{:#06x}", facade.new_product_id_number()));
    output::print_field("Location ID", format!("{:#06x}", facade.new_location_id_number()));
    output::print_field("Transport", facade.new_transport_string());
}

fn identity(facade: &HidFacade<VirtualPeripheral>) -> Value {
    json!({
        "manufacturer": facade.new_manufacturer_string(),
        "product": facade.new_product_string(),
        "serial_number": facade.new_serial_number_string(),
        "vendor_id": facade.new_vendor_id_number(),
        "product_id": facade.new_product_id_number(),
        "location_id": facade.new_location_id_number(),
        "transport": facade.new_transport_string(),
    })
}
