//! Synthetic HID report descriptor for the wired controller.
//!
//! The descriptor declares a Generic Desktop / Game Pad application
//! collection whose single input report is byte-for-byte the controller's
//! native 20-byte report, so the bridge never has to rewrite input data:
//!
//! ```text
//! [0]      message type (constant)
//! [1]      report length (constant)
//! [2..4]   16 button bits
//! [4]      left trigger   (Z,  0..255)
//! [5]      right trigger  (Rz, 0..255)
//! [6..10]  left stick     (X, Y,   i16 LE)
//! [10..14] right stick    (Rx, Ry, i16 LE)
//! [14..20] reserved (constant)
//! ```

use crate::{ProtocolError, ProtocolResult};

/// Report descriptor returned verbatim on every descriptor query.
///
/// Byte 1 is the primary usage page and byte 3 the primary usage.
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Game Pad)
    0xA1, 0x01, // Collection (Application)
    0xA1, 0x00, //   Collection (Physical)
    // message type + length header
    0x75, 0x08, //     Report Size (8)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x01, //     Input (Const)
    // d-pad up/down/left/right
    0x05, 0x09, //     Usage Page (Button)
    0x19, 0x0C, //     Usage Minimum (12)
    0x29, 0x0F, //     Usage Maximum (15)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x75, 0x01, //     Report Size (1)
    0x95, 0x04, //     Report Count (4)
    0x81, 0x02, //     Input (Data, Var, Abs)
    // start, back, left stick click, right stick click
    0x09, 0x09, //     Usage (Button 9)
    0x09, 0x0A, //     Usage (Button 10)
    0x09, 0x07, //     Usage (Button 7)
    0x09, 0x08, //     Usage (Button 8)
    0x95, 0x04, //     Report Count (4)
    0x81, 0x02, //     Input (Data, Var, Abs)
    // LB, RB, guide
    0x09, 0x05, //     Usage (Button 5)
    0x09, 0x06, //     Usage (Button 6)
    0x09, 0x0B, //     Usage (Button 11)
    0x95, 0x03, //     Report Count (3)
    0x81, 0x02, //     Input (Data, Var, Abs)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x01, //     Input (Const)
    // A, B, X, Y
    0x19, 0x01, //     Usage Minimum (1)
    0x29, 0x04, //     Usage Maximum (4)
    0x95, 0x04, //     Report Count (4)
    0x81, 0x02, //     Input (Data, Var, Abs)
    // triggers
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x32, //     Usage (Z)
    0x09, 0x35, //     Usage (Rz)
    0x15, 0x00, //     Logical Minimum (0)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x02, //     Input (Data, Var, Abs)
    // left stick
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x16, 0x00, 0x80, // Logical Minimum (-32768)
    0x26, 0xFF, 0x7F, // Logical Maximum (32767)
    0x75, 0x10, //     Report Size (16)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x02, //     Input (Data, Var, Abs)
    // right stick
    0x09, 0x33, //     Usage (Rx)
    0x09, 0x34, //     Usage (Ry)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x02, //     Input (Data, Var, Abs)
    // reserved tail
    0x75, 0x08, //     Report Size (8)
    0x95, 0x06, //     Report Count (6)
    0x81, 0x01, //     Input (Const)
    0xC0, //   End Collection
    0xC0, // End Collection
];

/// Generic Desktop usage page code.
pub const USAGE_PAGE_GENERIC_DESKTOP: u8 = 0x01;
/// Game Pad usage code (Generic Desktop page).
pub const USAGE_GAME_PAD: u8 = 0x05;

/// Primary usage page advertised to the host (descriptor byte 1).
pub const fn primary_usage_page() -> u8 {
    match REPORT_DESCRIPTOR {
        [_, page, ..] => *page,
        _ => 0,
    }
}

/// Primary usage advertised to the host (descriptor byte 3).
pub const fn primary_usage() -> u8 {
    match REPORT_DESCRIPTOR {
        [_, _, _, usage, ..] => *usage,
        _ => 0,
    }
}

/// Item type from bits 2..3 of a short-item prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Main,
    Global,
    Local,
    Reserved,
}

impl ItemKind {
    fn from_prefix(prefix: u8) -> Self {
        match (prefix >> 2) & 0x03 {
            0 => Self::Main,
            1 => Self::Global,
            2 => Self::Local,
            _ => Self::Reserved,
        }
    }
}

/// A single short item from a report descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorItem<'a> {
    /// Byte offset of the prefix within the descriptor.
    pub offset: usize,
    pub prefix: u8,
    pub kind: ItemKind,
    pub tag: u8,
    pub data: &'a [u8],
}

impl DescriptorItem<'_> {
    /// Item data as an unsigned little-endian value.
    pub fn unsigned(&self) -> u32 {
        self.data
            .iter()
            .rev()
            .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte))
    }

    /// Item data as a sign-extended little-endian value.
    pub fn signed(&self) -> i32 {
        let raw = self.unsigned();
        match self.data.len() {
            1 => i32::from(raw as u8 as i8),
            2 => i32::from(raw as u16 as i16),
            _ => raw as i32,
        }
    }

    /// Whole item bytes (prefix + data) length.
    pub fn encoded_len(&self) -> usize {
        self.data.len().saturating_add(1)
    }

    /// Human readable item name, e.g. `"Usage Page"`.
    pub fn name(&self) -> &'static str {
        match (self.kind, self.tag) {
            (ItemKind::Main, 0x8) => "Input",
            (ItemKind::Main, 0x9) => "Output",
            (ItemKind::Main, 0xA) => "Collection",
            (ItemKind::Main, 0xB) => "Feature",
            (ItemKind::Main, 0xC) => "End Collection",
            (ItemKind::Global, 0x0) => "Usage Page",
            (ItemKind::Global, 0x1) => "Logical Minimum",
            (ItemKind::Global, 0x2) => "Logical Maximum",
            (ItemKind::Global, 0x3) => "Physical Minimum",
            (ItemKind::Global, 0x4) => "Physical Maximum",
            (ItemKind::Global, 0x5) => "Unit Exponent",
            (ItemKind::Global, 0x6) => "Unit",
            (ItemKind::Global, 0x7) => "Report Size",
            (ItemKind::Global, 0x8) => "Report ID",
            (ItemKind::Global, 0x9) => "Report Count",
            (ItemKind::Global, 0xA) => "Push",
            (ItemKind::Global, 0xB) => "Pop",
            (ItemKind::Local, 0x0) => "Usage",
            (ItemKind::Local, 0x1) => "Usage Minimum",
            (ItemKind::Local, 0x2) => "Usage Maximum",
            _ => "Unknown",
        }
    }
}

/// Iterator over the short items of a descriptor.
///
/// Yields an error and stops on a long item (`0xFE`) or a truncated item.
#[derive(Debug, Clone)]
pub struct Items<'a> {
    bytes: &'a [u8],
    offset: usize,
    failed: bool,
}

/// Walk `descriptor` item by item.
pub fn items(descriptor: &[u8]) -> Items<'_> {
    Items {
        bytes: descriptor,
        offset: 0,
        failed: false,
    }
}

impl<'a> Iterator for Items<'a> {
    type Item = ProtocolResult<DescriptorItem<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let (&prefix, rest) = self.bytes.split_first()?;
        let size = match prefix & 0x03 {
            3 => 4,
            n => usize::from(n),
        };
        let offset = self.offset;
        if prefix == 0xFE || rest.len() < size {
            self.failed = true;
            return Some(Err(ProtocolError::MalformedItem { offset }));
        }
        let (data, tail) = rest.split_at(size);
        self.bytes = tail;
        self.offset = offset.saturating_add(size).saturating_add(1);
        Some(Ok(DescriptorItem {
            offset,
            prefix,
            kind: ItemKind::from_prefix(prefix),
            tag: prefix >> 4,
            data,
        }))
    }
}

/// Total number of bits declared by Input main items.
///
/// Tracks Report Size / Report Count globals; Push/Pop are not used by this
/// descriptor and are ignored.
pub fn input_report_bits(descriptor: &[u8]) -> ProtocolResult<u32> {
    let mut report_size = 0u32;
    let mut report_count = 0u32;
    let mut total = 0u32;
    for item in items(descriptor) {
        let item = item?;
        match (item.kind, item.tag) {
            (ItemKind::Global, 0x7) => report_size = item.unsigned(),
            (ItemKind::Global, 0x9) => report_count = item.unsigned(),
            (ItemKind::Main, 0x8) => {
                total = total.saturating_add(report_size.saturating_mul(report_count));
            }
            _ => {}
        }
    }
    Ok(total)
}
