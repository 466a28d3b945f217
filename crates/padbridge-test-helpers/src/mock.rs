//! Mock device-tree nodes.
//!
//! [`RecordingPeripheral`] is an owner that logs every call the facade
//! forwards to it and returns configurable results. [`ForeignService`] is a
//! node of some other type, for checking that the facade refuses providers
//! it does not own.

use std::sync::Arc;

use padbridge_hid::{IoResult, Peripheral, Service};
use parking_lot::Mutex;
use serde_json::Value;

/// A call received by [`RecordingPeripheral`].
#[derive(Debug, Clone, PartialEq)]
pub enum OwnerCall {
    Rumble { left: u8, right: u8 },
    Leds { pattern: u8 },
    SetProperties(Value),
}

/// Identity returned by a [`RecordingPeripheral`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockIdentity {
    pub manufacturer: String,
    pub product: String,
    pub serial_number: String,
    pub vendor_id: u16,
    pub product_id: u16,
    pub location_id: u16,
}

impl Default for MockIdentity {
    fn default() -> Self {
        Self {
            manufacturer: "Mock Manufacturer".to_string(),
            product: "Mock Pad".to_string(),
            serial_number: "MOCK-0001".to_string(),
            vendor_id: 0x045E,
            product_id: 0x028E,
            location_id: 0x1400,
        }
    }
}

/// Owner that records forwarded calls.
pub struct RecordingPeripheral {
    identity: MockIdentity,
    calls: Mutex<Vec<OwnerCall>>,
    rumble_result: Mutex<IoResult>,
    leds_result: Mutex<IoResult>,
    properties_result: Mutex<IoResult>,
}

impl RecordingPeripheral {
    pub fn new() -> Self {
        Self::with_identity(MockIdentity::default())
    }

    pub fn with_identity(identity: MockIdentity) -> Self {
        Self {
            identity,
            calls: Mutex::new(Vec::new()),
            rumble_result: Mutex::new(Ok(())),
            leds_result: Mutex::new(Ok(())),
            properties_result: Mutex::new(Ok(())),
        }
    }

    /// Build and return both the concrete handle and the tree node.
    pub fn node() -> (Arc<Self>, Arc<dyn Service>) {
        let owner = Arc::new(Self::new());
        let node: Arc<dyn Service> = owner.clone();
        (owner, node)
    }

    pub fn identity(&self) -> &MockIdentity {
        &self.identity
    }

    pub fn set_rumble_result(&self, result: IoResult) {
        *self.rumble_result.lock() = result;
    }

    pub fn set_leds_result(&self, result: IoResult) {
        *self.leds_result.lock() = result;
    }

    pub fn set_properties_result(&self, result: IoResult) {
        *self.properties_result.lock() = result;
    }

    pub fn calls(&self) -> Vec<OwnerCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn last_call(&self) -> Option<OwnerCall> {
        self.calls.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl Default for RecordingPeripheral {
    fn default() -> Self {
        Self::new()
    }
}

impl Service for RecordingPeripheral {
    fn name(&self) -> &str {
        "RecordingPeripheral"
    }
}

impl Peripheral for RecordingPeripheral {
    fn set_rumble(&self, left: u8, right: u8) -> IoResult {
        self.calls.lock().push(OwnerCall::Rumble { left, right });
        *self.rumble_result.lock()
    }

    fn set_leds(&self, pattern: u8) -> IoResult {
        self.calls.lock().push(OwnerCall::Leds { pattern });
        *self.leds_result.lock()
    }

    fn manufacturer_string(&self) -> String {
        self.identity.manufacturer.clone()
    }

    fn product_string(&self) -> String {
        self.identity.product.clone()
    }

    fn serial_number_string(&self) -> String {
        self.identity.serial_number.clone()
    }

    fn vendor_id(&self) -> u16 {
        self.identity.vendor_id
    }

    fn product_id(&self) -> u16 {
        self.identity.product_id
    }

    fn location_id(&self) -> u16 {
        self.identity.location_id
    }

    fn set_properties(&self, properties: &Value) -> IoResult {
        self.calls
            .lock()
            .push(OwnerCall::SetProperties(properties.clone()));
        *self.properties_result.lock()
    }
}

/// A device-tree node that is not a peripheral.
#[derive(Debug, Default)]
pub struct ForeignService;

impl ForeignService {
    pub fn node() -> Arc<dyn Service> {
        Arc::new(Self)
    }
}

impl Service for ForeignService {
    fn name(&self) -> &str {
        "ForeignService"
    }
}
