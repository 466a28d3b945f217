//! Fuzzes the facade's set-report dispatch against a virtual peripheral.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_facade_set_report
#![no_main]
use std::sync::Arc;

use libfuzzer_sys::fuzz_target;
use padbridge_hid::{HidFacade, IoError, Peripheral, ReportType, Service, VirtualPeripheral};

fuzz_target!(|data: &[u8]| {
    let pad = Arc::new(VirtualPeripheral::default());
    let node: Arc<dyn Service> = pad.clone();
    let facade = HidFacade::<VirtualPeripheral>::new();
    if facade.start(&node).is_err() {
        return;
    }

    let result = facade.set_report(data, ReportType::Output, 0);
    let state = pad.state();
    let calls = state.rumble_calls + state.led_calls;
    match result {
        Ok(()) => assert_eq!(calls, 1),
        Err(IoError::Unsupported) => assert_eq!(calls, 0),
        Err(other) => panic!("unexpected status {other:?}"),
    }
    let _vid = pad.vendor_id();
});
