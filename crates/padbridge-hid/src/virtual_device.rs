//! In-memory peripheral standing in for a real controller.
//!
//! Used by the `padctl simulate` command and by tests. It records the last
//! rumble levels and LED pattern it was sent, and can be configured to fail
//! either command with a fixed status word.

use hid_xbox360_protocol::ids::{MICROSOFT_VENDOR_ID, XBOX360_WIRED_PID};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::peripheral::Peripheral;
use crate::status::{IoError, IoResult};
use crate::tree::Service;

/// Identity and fault-injection settings for a [`VirtualPeripheral`].
///
/// Every field is optional in serialized form; missing fields default to a
/// genuine wired controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VirtualPeripheralConfig {
    pub manufacturer: String,
    pub product: String,
    pub serial_number: String,
    pub vendor_id: u16,
    pub product_id: u16,
    pub location_id: u16,
    /// Status word returned by every rumble command instead of success.
    pub fail_rumble: Option<u32>,
    /// Status word returned by every LED command instead of success.
    pub fail_leds: Option<u32>,
}

impl Default for VirtualPeripheralConfig {
    fn default() -> Self {
        Self {
            manufacturer: "©Microsoft Corporation".to_string(),
            product: "Controller".to_string(),
            serial_number: "0000000".to_string(),
            vendor_id: MICROSOFT_VENDOR_ID,
            product_id: XBOX360_WIRED_PID,
            location_id: 0,
            fail_rumble: None,
            fail_leds: None,
        }
    }
}

/// Snapshot of what the peripheral has been told so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeripheralState {
    pub rumble: (u8, u8),
    pub led_pattern: Option<u8>,
    pub rumble_calls: u32,
    pub led_calls: u32,
}

#[derive(Debug)]
pub struct VirtualPeripheral {
    config: VirtualPeripheralConfig,
    state: Mutex<PeripheralState>,
    properties: Mutex<Value>,
}

impl VirtualPeripheral {
    pub fn new(config: VirtualPeripheralConfig) -> Self {
        Self {
            config,
            state: Mutex::new(PeripheralState::default()),
            properties: Mutex::new(Value::Object(serde_json::Map::new())),
        }
    }

    pub fn config(&self) -> &VirtualPeripheralConfig {
        &self.config
    }

    pub fn state(&self) -> PeripheralState {
        self.state.lock().clone()
    }

    /// Properties merged in by [`Peripheral::set_properties`] so far.
    pub fn properties(&self) -> Value {
        self.properties.lock().clone()
    }
}

impl Default for VirtualPeripheral {
    fn default() -> Self {
        Self::new(VirtualPeripheralConfig::default())
    }
}

impl Service for VirtualPeripheral {
    fn name(&self) -> &str {
        "VirtualPeripheral"
    }
}

impl Peripheral for VirtualPeripheral {
    fn set_rumble(&self, left: u8, right: u8) -> IoResult {
        let mut state = self.state.lock();
        state.rumble_calls = state.rumble_calls.saturating_add(1);
        if let Some(code) = self.config.fail_rumble {
            return Err(IoError::from_code(code));
        }
        state.rumble = (left, right);
        trace!(left, right, "virtual rumble");
        Ok(())
    }

    fn set_leds(&self, pattern: u8) -> IoResult {
        let mut state = self.state.lock();
        state.led_calls = state.led_calls.saturating_add(1);
        if let Some(code) = self.config.fail_leds {
            return Err(IoError::from_code(code));
        }
        state.led_pattern = Some(pattern);
        trace!(pattern, "virtual LEDs");
        Ok(())
    }

    fn manufacturer_string(&self) -> String {
        self.config.manufacturer.clone()
    }

    fn product_string(&self) -> String {
        self.config.product.clone()
    }

    fn serial_number_string(&self) -> String {
        self.config.serial_number.clone()
    }

    fn vendor_id(&self) -> u16 {
        self.config.vendor_id
    }

    fn product_id(&self) -> u16 {
        self.config.product_id
    }

    fn location_id(&self) -> u16 {
        self.config.location_id
    }

    fn set_properties(&self, properties: &Value) -> IoResult {
        let Value::Object(incoming) = properties else {
            debug!("ignoring non-object properties");
            return Err(IoError::Unsupported);
        };
        let mut stored = self.properties.lock();
        if let Value::Object(map) = &mut *stored {
            for (key, value) in incoming {
                map.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_identity() {
        let config = VirtualPeripheralConfig::default();
        assert_eq!(config.vendor_id, 0x045E);
        assert_eq!(config.product_id, 0x028E);
        assert_eq!(config.manufacturer, "©Microsoft Corporation");
    }

    #[test]
    fn test_records_commands() -> Result<(), IoError> {
        let pad = VirtualPeripheral::default();
        pad.set_rumble(0x40, 0x80)?;
        pad.set_leds(0x0A)?;
        pad.set_leds(0x06)?;

        let state = pad.state();
        assert_eq!(state.rumble, (0x40, 0x80));
        assert_eq!(state.led_pattern, Some(0x06));
        assert_eq!(state.rumble_calls, 1);
        assert_eq!(state.led_calls, 2);
        Ok(())
    }

    #[test]
    fn test_injected_failures() {
        let pad = VirtualPeripheral::new(VirtualPeripheralConfig {
            fail_rumble: Some(0xE00002ED),
            fail_leds: Some(0xE0001234),
            ..VirtualPeripheralConfig::default()
        });
        assert_eq!(pad.set_rumble(1, 2), Err(IoError::NotResponding));
        assert_eq!(pad.set_leds(1), Err(IoError::Device(0xE0001234)));

        let state = pad.state();
        assert_eq!(state.rumble, (0, 0));
        assert_eq!(state.led_pattern, None);
        assert_eq!(state.rumble_calls, 1);
    }

    #[test]
    fn test_properties_merge() -> Result<(), IoError> {
        let pad = VirtualPeripheral::default();
        pad.set_properties(&json!({ "a": 1 }))?;
        pad.set_properties(&json!({ "b": "two" }))?;
        assert_eq!(pad.properties(), json!({ "a": 1, "b": "two" }));
        assert_eq!(pad.set_properties(&json!([1, 2])), Err(IoError::Unsupported));
        Ok(())
    }

    #[test]
    fn test_config_partial_json() -> Result<(), serde_json::Error> {
        let config: VirtualPeripheralConfig =
            serde_json::from_str(r#"{ "serial_number": "A1B2", "fail_leds": 3758097088 }"#)?;
        assert_eq!(config.serial_number, "A1B2");
        assert_eq!(config.fail_leds, Some(0xE00002C0));
        assert_eq!(config.product_id, 0x028E);
        Ok(())
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let result = serde_json::from_str::<VirtualPeripheralConfig>(r#"{ "colour": "white" }"#);
        assert!(result.is_err());
    }
}
