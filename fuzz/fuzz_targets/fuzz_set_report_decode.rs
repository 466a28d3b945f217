//! Fuzzes the set-report command decoder.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_set_report_decode
#![no_main]
use hid_xbox360_protocol::SetReportCommand;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic; a decoded command must re-encode to the same bytes.
    if let Ok(cmd) = SetReportCommand::decode(data) {
        let mut out = [0u8; 8];
        let written = cmd.encode(&mut out);
        assert_eq!(written.and_then(|n| out.get(..n)), Some(data));
    }
});
