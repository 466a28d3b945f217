//! "Set report" command codec.
//!
//! Host applications drive rumble and LEDs by writing a short output report
//! to the game pad:
//!
//! ```text
//! Byte 0: opcode (0x00 = rumble, 0x01 = LEDs)
//! Byte 1: total report length, must equal the actual length
//! Bytes 2..: payload
//! ```
//!
//! Both the declared length and the actual buffer length must equal the
//! opcode's fixed size; anything else is rejected before a command exists.

use crate::{ProtocolError, ProtocolResult};

/// Opcode for "set force feedback".
pub const OPCODE_SET_RUMBLE: u8 = 0x00;
/// Opcode for "set LED state".
pub const OPCODE_SET_LEDS: u8 = 0x01;

/// Wire size of a rumble report (`[0x00, 0x04, left, right]`).
pub const RUMBLE_REPORT_LEN: usize = 4;
/// Wire size of an LED report (`[0x01, 0x03, pattern]`).
pub const LED_REPORT_LEN: usize = 3;

const RUMBLE_LEN_BYTE: u8 = RUMBLE_REPORT_LEN as u8;
const LED_LEN_BYTE: u8 = LED_REPORT_LEN as u8;

/// A validated set-report command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetReportCommand {
    /// Motor intensities, 0 = off, 255 = full.
    Rumble { left: u8, right: u8 },
    /// Raw LED pattern code, see [`crate::LedPattern`].
    Leds { pattern: u8 },
}

impl SetReportCommand {
    /// Decode and validate a set-report buffer.
    ///
    /// Returns [`ProtocolError::UnknownOpcode`] for opcodes other than
    /// `0x00`/`0x01`, and [`ProtocolError::LengthMismatch`] when either the
    /// declared or the actual length differs from the opcode's fixed size.
    pub fn decode(report: &[u8]) -> ProtocolResult<Self> {
        let [opcode, declared, payload @ ..] = report else {
            return Err(ProtocolError::ReportTooShort {
                expected: 2,
                actual: report.len(),
            });
        };

        match *opcode {
            OPCODE_SET_RUMBLE => match (*declared, payload) {
                (RUMBLE_LEN_BYTE, [left, right]) => Ok(Self::Rumble {
                    left: *left,
                    right: *right,
                }),
                _ => Err(length_mismatch(*opcode, *declared, report.len(), RUMBLE_REPORT_LEN)),
            },
            OPCODE_SET_LEDS => match (*declared, payload) {
                (LED_LEN_BYTE, [pattern]) => Ok(Self::Leds { pattern: *pattern }),
                _ => Err(length_mismatch(*opcode, *declared, report.len(), LED_REPORT_LEN)),
            },
            other => Err(ProtocolError::UnknownOpcode(other)),
        }
    }

    /// Opcode byte this command is carried under.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::Rumble { .. } => OPCODE_SET_RUMBLE,
            Self::Leds { .. } => OPCODE_SET_LEDS,
        }
    }

    /// Encode into `out`, returning the number of bytes written.
    ///
    /// Returns `None` when `out` is too small to hold the report.
    pub fn encode(&self, out: &mut [u8]) -> Option<usize> {
        match *self {
            Self::Rumble { left, right } => {
                let report = build_rumble_report(left, right);
                out.get_mut(..RUMBLE_REPORT_LEN)?.copy_from_slice(&report);
                Some(RUMBLE_REPORT_LEN)
            }
            Self::Leds { pattern } => {
                let report = build_led_report(pattern);
                out.get_mut(..LED_REPORT_LEN)?.copy_from_slice(&report);
                Some(LED_REPORT_LEN)
            }
        }
    }
}

fn length_mismatch(opcode: u8, declared: u8, actual: usize, expected: usize) -> ProtocolError {
    ProtocolError::LengthMismatch {
        opcode,
        declared,
        actual,
        expected,
    }
}

/// Build a rumble set-report.
pub fn build_rumble_report(left: u8, right: u8) -> [u8; RUMBLE_REPORT_LEN] {
    [OPCODE_SET_RUMBLE, RUMBLE_LEN_BYTE, left, right]
}

/// Build an LED set-report.
pub fn build_led_report(pattern: u8) -> [u8; LED_REPORT_LEN] {
    [OPCODE_SET_LEDS, LED_LEN_BYTE, pattern]
}
