//! Fuzzes the native 20-byte input report parser.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_input_report
#![no_main]
use hid_xbox360_protocol::ControllerInputReport;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic on arbitrary bytes.
    if let Ok(report) = ControllerInputReport::parse(data) {
        let _pressed = report.pressed().count();
        let _lt = report.left_trigger_normalized();
    }
});
