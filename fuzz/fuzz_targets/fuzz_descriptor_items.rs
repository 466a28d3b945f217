//! Fuzzes the report descriptor item walker.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_descriptor_items
#![no_main]
use hid_xbox360_protocol::descriptor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Items must tile the input exactly up to the first error.
    let mut next_offset = 0usize;
    for item in descriptor::items(data) {
        let Ok(item) = item else { break };
        assert_eq!(item.offset, next_offset);
        next_offset += item.encoded_len();
        let _name = item.name();
        let _value = item.signed();
    }
    let _bits = descriptor::input_report_bits(data);
});
