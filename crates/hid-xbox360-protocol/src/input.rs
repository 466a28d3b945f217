//! Input report parsing for the wired controller.

use crate::{ProtocolError, ProtocolResult};
use serde::{Deserialize, Serialize};

/// Size of the native input report in bytes.
pub const INPUT_REPORT_LEN: usize = 20;
/// Message type of a button/axis report.
pub const INPUT_MESSAGE_TYPE: u8 = 0x00;

/// Buttons in the 16-bit field at bytes 2..4, by bit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    DpadUp = 0,
    DpadDown = 1,
    DpadLeft = 2,
    DpadRight = 3,
    Start = 4,
    Back = 5,
    LeftStick = 6,
    RightStick = 7,
    LeftBumper = 8,
    RightBumper = 9,
    Guide = 10,
    A = 12,
    B = 13,
    X = 14,
    Y = 15,
}

impl Button {
    pub const ALL: [Button; 15] = [
        Button::DpadUp,
        Button::DpadDown,
        Button::DpadLeft,
        Button::DpadRight,
        Button::Start,
        Button::Back,
        Button::LeftStick,
        Button::RightStick,
        Button::LeftBumper,
        Button::RightBumper,
        Button::Guide,
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
    ];

    pub fn mask(self) -> u16 {
        1u16 << (self as u16)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerInputReport {
    pub buttons: u16,
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub left_x: i16,
    pub left_y: i16,
    pub right_x: i16,
    pub right_y: i16,
}

impl ControllerInputReport {
    /// Parse a native input report.
    ///
    /// Requires at least [`INPUT_REPORT_LEN`] bytes, message type `0x00` and a
    /// length byte of `0x14`. Trailing reserved bytes are ignored.
    pub fn parse(data: &[u8]) -> ProtocolResult<Self> {
        if data.len() < INPUT_REPORT_LEN {
            return Err(ProtocolError::ReportTooShort {
                expected: INPUT_REPORT_LEN,
                actual: data.len(),
            });
        }
        let [
            message_type,
            length,
            b0,
            b1,
            lt,
            rt,
            lx0,
            lx1,
            ly0,
            ly1,
            rx0,
            rx1,
            ry0,
            ry1,
            ..,
        ] = *data
        else {
            return Err(ProtocolError::ReportTooShort {
                expected: INPUT_REPORT_LEN,
                actual: data.len(),
            });
        };

        if message_type != INPUT_MESSAGE_TYPE || usize::from(length) != INPUT_REPORT_LEN {
            return Err(ProtocolError::InvalidInputHeader {
                message_type,
                length,
            });
        }

        Ok(Self {
            buttons: u16::from_le_bytes([b0, b1]),
            left_trigger: lt,
            right_trigger: rt,
            left_x: i16::from_le_bytes([lx0, lx1]),
            left_y: i16::from_le_bytes([ly0, ly1]),
            right_x: i16::from_le_bytes([rx0, rx1]),
            right_y: i16::from_le_bytes([ry0, ry1]),
        })
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.buttons & button.mask() != 0
    }

    /// Buttons currently held, in bit order.
    pub fn pressed(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(|b| self.is_pressed(*b))
    }

    /// Left trigger normalised to `0.0..=1.0`.
    pub fn left_trigger_normalized(&self) -> f32 {
        f32::from(self.left_trigger) / 255.0
    }

    /// Right trigger normalised to `0.0..=1.0`.
    pub fn right_trigger_normalized(&self) -> f32 {
        f32::from(self.right_trigger) / 255.0
    }
}
