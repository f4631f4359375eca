//! Protocol constants and compile-time defaults.
//!
//! All report layout values, keycode classes and driver defaults live
//! here so they can be tuned in one place.

// Report layout

/// Boot-protocol keyboard report size in bytes:
/// `[modifier][reserved][6 keycodes]`.
pub const REPORT_SIZE: usize = 8;

/// Number of keycode slots in one report.
pub const KEYCODE_SLOTS: usize = 6;

/// Hex digits needed to describe one full report.
pub const REPORT_HEX_DIGITS: usize = REPORT_SIZE * 2;

// Modifier byte

/// Left Shift (bit 1) or Right Shift (bit 5).
pub const SHIFT_MASK: u8 = 0x22;

// Keycodes

/// Slot values that never denote a held key.
/// 0x00 = no key, 0x01 = ErrorRollOver phantom, 0xFF = reserved.
pub const FILLER_KEYCODES: [u8; 3] = [0x00, 0x01, 0xFF];

/// Keyboard DELETE (Backspace).
pub const BACKSPACE_KEYCODE: u8 = 0x2A;

/// Keyboard Tab.
pub const TAB_KEYCODE: u8 = 0x2B;

// Driver

/// Input file read when no path is given on the command line.
/// Matches the name produced by the usual tshark extraction:
///
/// ```text
/// tshark -r capture.pcap \
///   -Y "usb.endpoint_address.direction == 0x81 && usb.data_len == 8" \
///   -T fields -e usb.capdata > usbkeystrok.txt
/// ```
pub const DEFAULT_INPUT: &str = "usbkeystrok.txt";

/// Returns `true` for slot values that carry no key.
#[inline]
pub const fn is_filler(code: u8) -> bool {
    matches!(code, 0x00 | 0x01 | 0xFF)
}
