//! LED ring patterns.
//!
//! The ring around the guide button has four quadrants. The controller
//! accepts a single pattern code; codes above `0x0D` are ignored by the
//! firmware but still forwarded unchanged by the bridge.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedPattern {
    Off = 0x00,
    BlinkAll = 0x01,
    FlashThenOn1 = 0x02,
    FlashThenOn2 = 0x03,
    FlashThenOn3 = 0x04,
    FlashThenOn4 = 0x05,
    On1 = 0x06,
    On2 = 0x07,
    On3 = 0x08,
    On4 = 0x09,
    Rotate = 0x0A,
    Blink = 0x0B,
    SlowBlink = 0x0C,
    Alternate = 0x0D,
}

impl LedPattern {
    pub fn from_u8(code: u8) -> Option<Self> {
        Some(match code {
            0x00 => Self::Off,
            0x01 => Self::BlinkAll,
            0x02 => Self::FlashThenOn1,
            0x03 => Self::FlashThenOn2,
            0x04 => Self::FlashThenOn3,
            0x05 => Self::FlashThenOn4,
            0x06 => Self::On1,
            0x07 => Self::On2,
            0x08 => Self::On3,
            0x09 => Self::On4,
            0x0A => Self::Rotate,
            0x0B => Self::Blink,
            0x0C => Self::SlowBlink,
            0x0D => Self::Alternate,
            _ => return None,
        })
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Player slot (1-4) lit steadily at the end of the pattern, if any.
    pub fn player(self) -> Option<u8> {
        match self {
            Self::FlashThenOn1 | Self::On1 => Some(1),
            Self::FlashThenOn2 | Self::On2 => Some(2),
            Self::FlashThenOn3 | Self::On3 => Some(3),
            Self::FlashThenOn4 | Self::On4 => Some(4),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Off => "all off",
            Self::BlinkAll => "all blinking",
            Self::FlashThenOn1 => "1 flashes, then on",
            Self::FlashThenOn2 => "2 flashes, then on",
            Self::FlashThenOn3 => "3 flashes, then on",
            Self::FlashThenOn4 => "4 flashes, then on",
            Self::On1 => "1 on",
            Self::On2 => "2 on",
            Self::On3 => "3 on",
            Self::On4 => "4 on",
            Self::Rotate => "rotating",
            Self::Blink => "blinking (previous setting)",
            Self::SlowBlink => "slow blinking (previous setting)",
            Self::Alternate => "alternating",
        }
    }
}
