//! Command implementations for padctl

pub mod decode;
pub mod descriptor;
pub mod encode;
pub mod input;
pub mod simulate;

use clap::Subcommand;

use crate::error::CliError;

#[derive(Subcommand, Debug)]
pub enum EncodeCommands {
    /// Build a rumble report
    Rumble {
        /// Left (low-frequency) motor, 0-255 or 0x00-0xFF
        #[arg(value_parser = parse_u8)]
        left: u8,
        /// Right (high-frequency) motor, 0-255 or 0x00-0xFF
        #[arg(value_parser = parse_u8)]
        right: u8,
    },

    /// Build an LED report
    Led {
        /// LED pattern code, 0-255 or 0x00-0xFF
        #[arg(value_parser = parse_u8)]
        pattern: u8,
    },
}

/// Parse a byte given in decimal or `0x`-prefixed hex.
pub fn parse_u8(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("'{s}' is not a byte value: {e}"))
}

/// Decode a report given as hex.
///
/// Whitespace, `:` and `-` separators and a leading `0x` are ignored, so
/// `"00 04 10 20"`, `"00:04:10:20"` and `"0x00041020"` are all accepted.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, CliError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = body
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();
    hex::decode(&digits).map_err(|e| CliError::InvalidHex {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Space-separated uppercase hex, e.g. `"00 04 10 20"`.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
