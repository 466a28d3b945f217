//! Snapshot tests for host-visible facade output and peripheral config.

use insta::assert_snapshot;
use padbridge_hid::{HidFacade, IoError, VirtualPeripheral, VirtualPeripheralConfig};

#[test]
fn test_snapshot_unattached_identity() {
    let facade = HidFacade::<VirtualPeripheral>::new();
    let summary = format!(
        "manufacturer={} product={} serial={} vid={:#06x} pid={:#06x} location={:#06x} transport={}",
        facade.new_manufacturer_string(),
        facade.new_product_string(),
        facade.new_serial_number_string(),
        facade.new_vendor_id_number(),
        facade.new_product_id_number(),
        facade.new_location_id_number(),
        facade.new_transport_string(),
    );
    assert_snapshot!(
        summary,
        @"manufacturer=Unknown product=Unknown serial=Unknown vid=0xffff pid=0xffff location=0xffff transport=USB"
    );
}

#[test]
fn test_snapshot_status_codes() {
    let lines: Vec<String> = [
        IoError::Unsupported,
        IoError::NoResources,
        IoError::NoDevice,
        IoError::NotResponding,
        IoError::Device(0xE00002D8),
    ]
    .iter()
    .map(|e| format!("{:#010x} {e}", e.code()))
    .collect();
    assert_snapshot!(lines.join("\n"), @r"
    0xe00002c7 Unsupported request
    0xe00002be Insufficient resources
    0xe00002c0 No such device
    0xe00002ed Device not responding
    0xe00002d8 Device error 0xe00002d8
    ");
}

#[test]
fn test_snapshot_default_config_json() -> Result<(), serde_json::Error> {
    let json = serde_json::to_string_pretty(&VirtualPeripheralConfig::default())?;
    assert_snapshot!(json, @r#"
    {
      "manufacturer": "©Microsoft Corporation",
      "product": "Controller",
      "serial_number": "0000000",
      "vendor_id": 1118,
      "product_id": 654,
      "location_id": 0,
      "fail_rumble": null,
      "fail_leds": null
    }
    "#);
    Ok(())
}

#[test]
fn test_config_from_yaml() -> Result<(), serde_yaml::Error> {
    let yaml = "product: Third Party Pad\nvendor_id: 1848\nfail_rumble: 3758097133\n";
    let config: VirtualPeripheralConfig = serde_yaml::from_str(yaml)?;
    assert_eq!(config.product, "Third Party Pad");
    assert_eq!(config.vendor_id, 0x0738);
    assert_eq!(config.fail_rumble, Some(0xE00002ED));
    assert_eq!(config.manufacturer, "©Microsoft Corporation");
    Ok(())
}
