//! HID protocol for the Xbox 360 wired controller.
//!
//! The controller does not speak standard HID: it streams a fixed 20-byte
//! vendor report and accepts vendor rumble/LED packets. A host-side bridge
//! exposes it as a HID game pad, which needs three pieces of protocol data
//! that live in this crate:
//!
//! - **`descriptor`**: the synthetic report descriptor handed to the host,
//!   plus a short-item walker used to annotate and verify it.
//! - **`report`**: the "set report" command codec. Applications talk to the
//!   game pad with two tiny commands:
//!
//!   | Byte 0 | Byte 1 | Payload | Rule |
//!   |--------|--------|---------|------|
//!   | `0x00` | `0x04` | left motor, right motor | declared and actual length both 4 |
//!   | `0x01` | `0x03` | LED pattern | declared and actual length both 3 |
//!
//!   Anything else is rejected.
//! - **`input`**: parser for the 20-byte input report the descriptor
//!   describes.
//!
//! `ids` and `types` carry USB identifiers and the LED pattern table.
//!
//! Everything here is I/O-free and allocation-free; decoding never panics on
//! arbitrary input.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]

pub mod descriptor;
pub mod ids;
pub mod input;
pub mod report;
pub mod types;

pub use descriptor::{
    DescriptorItem, ItemKind, REPORT_DESCRIPTOR, input_report_bits, items, primary_usage,
    primary_usage_page,
};
pub use ids::{ControllerModel, MICROSOFT_VENDOR_ID, XBOX360_WIRED_PID};
pub use input::{Button, ControllerInputReport, INPUT_REPORT_LEN};
pub use report::{
    LED_REPORT_LEN, OPCODE_SET_LEDS, OPCODE_SET_RUMBLE, RUMBLE_REPORT_LEN, SetReportCommand,
    build_led_report, build_rumble_report,
};
pub use types::LedPattern;

use thiserror::Error;

/// Errors returned while decoding protocol data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Report too short: need at least {expected} bytes, got {actual}")]
    ReportTooShort { expected: usize, actual: usize },

    #[error(
        "Length mismatch for opcode {opcode:#04x}: declared {declared}, actual {actual}, expected {expected}"
    )]
    LengthMismatch {
        opcode: u8,
        declared: u8,
        actual: usize,
        expected: usize,
    },

    #[error("Unknown set-report opcode {0:#04x}")]
    UnknownOpcode(u8),

    #[error("Invalid input report header: type {message_type:#04x}, length {length:#04x}")]
    InvalidInputHeader { message_type: u8, length: u8 },

    #[error("Malformed descriptor item at offset {offset}")]
    MalformedItem { offset: usize },
}

/// Convenience result alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
