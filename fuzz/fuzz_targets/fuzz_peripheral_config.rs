//! Fuzzes virtual peripheral config deserialization.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_peripheral_config
#![no_main]
use libfuzzer_sys::fuzz_target;
use padbridge_hid::VirtualPeripheralConfig;

fuzz_target!(|data: &[u8]| {
    // Must never panic on arbitrary JSON.
    let _config = serde_json::from_slice::<VirtualPeripheralConfig>(data);
});
