//! Contract the facade expects from the peripheral that owns it.

use serde_json::Value;

use crate::status::IoResult;
use crate::tree::Service;

/// The owning peripheral driver.
///
/// Implementations talk to the physical controller. The facade only ever
/// calls these through a freshly resolved owner, so an implementation may be
/// dropped or detached between two calls.
pub trait Peripheral: Service {
    /// Drive the two rumble motors (0 = off, 255 = full).
    fn set_rumble(&self, left: u8, right: u8) -> IoResult;

    /// Set the LED ring to a raw pattern code.
    fn set_leds(&self, pattern: u8) -> IoResult;

    fn manufacturer_string(&self) -> String;
    fn product_string(&self) -> String;
    fn serial_number_string(&self) -> String;

    fn vendor_id(&self) -> u16;
    fn product_id(&self) -> u16;
    fn location_id(&self) -> u16;

    /// Apply an opaque property object forwarded from the host.
    fn set_properties(&self, properties: &Value) -> IoResult;
}
