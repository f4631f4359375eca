//! USB HID keyboard report (boot protocol).
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved
//! Byte 2-7: Up to 6 simultaneous key codes (USB HID usage codes)
//! ```
//!
//! A keyboard re-sends this report on every interrupt poll, listing every
//! key that is still down, so one physical keystroke usually spans several
//! consecutive identical reports.

use crate::config::{is_filler, KEYCODE_SLOTS, REPORT_SIZE, SHIFT_MASK};

/// Standard USB HID boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte (ignored).
    pub reserved: u8,
    /// Up to 6 simultaneously pressed key codes, unordered, filler-padded.
    pub keycodes: [u8; KEYCODE_SLOTS],
}

impl KeyboardReport {
    /// Create an empty (all-keys-released) report.
    pub const fn empty() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycodes: [0; KEYCODE_SLOTS],
        }
    }

    /// Parse from raw report bytes.
    ///
    /// Anything past the first 8 bytes (e.g. trailing capture payload) is
    /// ignored. Returns `None` if fewer than 8 bytes are given.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < REPORT_SIZE {
            return None;
        }
        Some(Self {
            modifier: data[0],
            reserved: data[1],
            keycodes: [data[2], data[3], data[4], data[5], data[6], data[7]],
        })
    }

    /// Serialise into a byte slice.
    /// Returns the number of bytes written (8, or 0 if `buf` is too small).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < REPORT_SIZE {
            return 0;
        }
        buf[0] = self.modifier;
        buf[1] = self.reserved;
        buf[2..REPORT_SIZE].copy_from_slice(&self.keycodes);
        REPORT_SIZE
    }

    /// Either Shift key is down. Ctrl, Alt and GUI bits are not interpreted.
    #[inline]
    pub fn shift_active(&self) -> bool {
        self.modifier & SHIFT_MASK != 0
    }

    /// Non-filler keycodes in slot order (left to right).
    /// A code listed twice in one report is yielded twice.
    pub fn pressed_keys(&self) -> impl Iterator<Item = u8> + '_ {
        self.keycodes.iter().copied().filter(|&k| !is_filler(k))
    }

    /// Returns `true` if no key slot holds a real keycode.
    pub fn is_released(&self) -> bool {
        self.pressed_keys().next().is_none()
    }
}
