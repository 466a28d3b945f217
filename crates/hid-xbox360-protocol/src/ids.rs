//! USB identifiers for Xbox 360 wired controllers and licensed clones.
//!
//! All of these enumerate with vendor class `0xFF`, subclass `0x5D`,
//! protocol `0x01` and speak the same 20-byte input / rumble / LED protocol.

use serde::{Deserialize, Serialize};

pub const MICROSOFT_VENDOR_ID: u16 = 0x045E;
pub const LOGITECH_VENDOR_ID: u16 = 0x046D;
pub const MAD_CATZ_VENDOR_ID: u16 = 0x0738;

/// Xbox 360 wired controller.
pub const XBOX360_WIRED_PID: u16 = 0x028E;
/// Xbox 360 wireless controller connected through a play & charge cable.
pub const XBOX360_PLAY_AND_CHARGE_PID: u16 = 0x028F;
/// Logitech Gamepad F310 in XInput mode.
pub const LOGITECH_F310_PID: u16 = 0xC21D;
/// Logitech Gamepad F710 in XInput mode.
pub const LOGITECH_F710_PID: u16 = 0xC21F;
/// Mad Catz Xbox 360 controller.
pub const MAD_CATZ_CONTROLLER_PID: u16 = 0x4716;

/// USB interface class/subclass/protocol triple of the controller interface.
pub const INTERFACE_CLASS: u8 = 0xFF;
pub const INTERFACE_SUBCLASS: u8 = 0x5D;
pub const INTERFACE_PROTOCOL: u8 = 0x01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerModel {
    Wired,
    PlayAndCharge,
    LogitechF310,
    LogitechF710,
    MadCatz,
    Unknown,
}

impl ControllerModel {
    pub fn from_ids(vendor_id: u16, product_id: u16) -> Self {
        match (vendor_id, product_id) {
            (MICROSOFT_VENDOR_ID, XBOX360_WIRED_PID) => Self::Wired,
            (MICROSOFT_VENDOR_ID, XBOX360_PLAY_AND_CHARGE_PID) => Self::PlayAndCharge,
            (LOGITECH_VENDOR_ID, LOGITECH_F310_PID) => Self::LogitechF310,
            (LOGITECH_VENDOR_ID, LOGITECH_F710_PID) => Self::LogitechF710,
            (MAD_CATZ_VENDOR_ID, MAD_CATZ_CONTROLLER_PID) => Self::MadCatz,
            _ => Self::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Wired => "Xbox 360 Wired Controller",
            Self::PlayAndCharge => "Xbox 360 Wireless Controller (Play & Charge)",
            Self::LogitechF310 => "Logitech Gamepad F310",
            Self::LogitechF710 => "Logitech Gamepad F710",
            Self::MadCatz => "Mad Catz Xbox 360 Controller",
            Self::Unknown => "Unknown Controller",
        }
    }

    /// Whether the pad has rumble motors. The F310 ships without them.
    pub fn has_rumble(&self) -> bool {
        !matches!(self, Self::LogitechF310 | Self::Unknown)
    }
}

/// Interface triple check used when matching a USB interface.
pub fn is_controller_interface(class: u8, subclass: u8, protocol: u8) -> bool {
    class == INTERFACE_CLASS && subclass == INTERFACE_SUBCLASS && protocol == INTERFACE_PROTOCOL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_ids() {
        assert_eq!(
            ControllerModel::from_ids(MICROSOFT_VENDOR_ID, XBOX360_WIRED_PID),
            ControllerModel::Wired
        );
        assert_eq!(
            ControllerModel::from_ids(LOGITECH_VENDOR_ID, LOGITECH_F710_PID),
            ControllerModel::LogitechF710
        );
        assert_eq!(
            ControllerModel::from_ids(LOGITECH_VENDOR_ID, XBOX360_WIRED_PID),
            ControllerModel::Unknown
        );
    }

    #[test]
    fn test_rumble_capability() {
        assert!(ControllerModel::Wired.has_rumble());
        assert!(!ControllerModel::LogitechF310.has_rumble());
    }

    #[test]
    fn test_interface_triple() {
        assert!(is_controller_interface(0xFF, 0x5D, 0x01));
        assert!(!is_controller_interface(0x03, 0x00, 0x00));
    }
}
