//! Host I/O status codes.
//!
//! The host framework reports failures as 32-bit status words. `IoError`
//! carries the subset the facade and its owner can return, and converts
//! to and from the raw word so unknown codes from a peripheral pass through
//! untouched.

use hid_xbox360_protocol::ProtocolError;
use thiserror::Error;

/// Status word for a request the device cannot service.
pub const STATUS_UNSUPPORTED: u32 = 0xE000_02C7;
/// Status word for an allocation or resource failure.
pub const STATUS_NO_RESOURCES: u32 = 0xE000_02BE;
/// Status word for a missing or mismatched device.
pub const STATUS_NO_DEVICE: u32 = 0xE000_02C0;
/// Status word for a device that stopped answering.
pub const STATUS_NOT_RESPONDING: u32 = 0xE000_02ED;

/// Failure returned by facade and peripheral operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IoError {
    #[error("Unsupported request")]
    Unsupported,

    #[error("Insufficient resources")]
    NoResources,

    #[error("No such device")]
    NoDevice,

    #[error("Device not responding")]
    NotResponding,

    /// Any other status word reported by the peripheral.
    #[error("Device error {0:#010x}")]
    Device(u32),
}

impl IoError {
    /// Host status word for this error.
    pub fn code(self) -> u32 {
        match self {
            Self::Unsupported => STATUS_UNSUPPORTED,
            Self::NoResources => STATUS_NO_RESOURCES,
            Self::NoDevice => STATUS_NO_DEVICE,
            Self::NotResponding => STATUS_NOT_RESPONDING,
            Self::Device(code) => code,
        }
    }

    /// Map a raw status word back onto the enum.
    pub fn from_code(code: u32) -> Self {
        match code {
            STATUS_UNSUPPORTED => Self::Unsupported,
            STATUS_NO_RESOURCES => Self::NoResources,
            STATUS_NO_DEVICE => Self::NoDevice,
            STATUS_NOT_RESPONDING => Self::NotResponding,
            other => Self::Device(other),
        }
    }
}

impl From<ProtocolError> for IoError {
    fn from(_: ProtocolError) -> Self {
        Self::Unsupported
    }
}

/// Result alias used across the facade and peripheral contract.
pub type IoResult<T = ()> = Result<T, IoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(IoError::Unsupported.code(), 0xE00002C7);
        assert_eq!(IoError::NoResources.code(), 0xE00002BE);
        assert_eq!(IoError::NoDevice.code(), 0xE00002C0);
        assert_eq!(IoError::NotResponding.code(), 0xE00002ED);
        assert_eq!(IoError::Device(0xE000_0001).code(), 0xE000_0001);
    }

    #[test]
    fn test_from_code_round_trips_known_codes() {
        for err in [
            IoError::Unsupported,
            IoError::NoResources,
            IoError::NoDevice,
            IoError::NotResponding,
        ] {
            assert_eq!(IoError::from_code(err.code()), err);
        }
        assert_eq!(IoError::from_code(0x1234), IoError::Device(0x1234));
    }

    #[test]
    fn test_protocol_errors_are_unsupported() {
        let err: IoError = ProtocolError::UnknownOpcode(0x09).into();
        assert_eq!(err, IoError::Unsupported);
    }

    #[test]
    fn test_display() {
        assert_eq!(IoError::Device(0xE00002D8).to_string(), "Device error 0xe00002d8");
        assert_eq!(IoError::NoDevice.to_string(), "No such device");
    }
}
