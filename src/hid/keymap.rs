//! Keycode to text resolution (US layout, single fixed table).
//!
//! Usage codes come from the HID Keyboard/Keypad page (0x07). Only the
//! printable block 0x04..=0x38 is mapped; function keys, arrows, keypad and
//! everything else resolve to nothing.

use crate::config::{BACKSPACE_KEYCODE, TAB_KEYCODE};

/// What one newly pressed key does to the output text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Append a character.
    Append(char),
    /// Remove the last character, if any.
    Backspace,
}

/// Unshifted character for every usage code, indexed by code.
static BASE_CHARS: [Option<char>; 256] = build_base_table();

const fn build_base_table() -> [Option<char>; 256] {
    let mut table = [None; 256];

    // 0x04..=0x1D: a..z
    let mut i = 0;
    while i < 26 {
        table[0x04 + i] = Some((b'a' + i as u8) as char);
        i += 1;
    }

    // 0x1E..=0x26: 1..9, 0x27: 0
    let mut d = 0;
    while d < 9 {
        table[0x1E + d] = Some((b'1' + d as u8) as char);
        d += 1;
    }
    table[0x27] = Some('0');

    table[0x28] = Some('\n'); // Enter
    table[0x2C] = Some(' ');
    table[0x2D] = Some('-');
    table[0x2E] = Some('=');
    table[0x2F] = Some('[');
    table[0x30] = Some(']');
    table[0x31] = Some('\\');
    table[0x32] = Some('#'); // Non-US # and ~
    table[0x33] = Some(';');
    table[0x34] = Some('\'');
    table[0x35] = Some('`');
    table[0x36] = Some(',');
    table[0x37] = Some('.');
    table[0x38] = Some('/');

    table
}

/// Character a usage code produces without Shift.
#[inline]
pub fn base_char(code: u8) -> Option<char> {
    BASE_CHARS[code as usize]
}

/// Explicit Shift form of a base character, where the layout defines one.
pub const fn shifted_char(base: char) -> Option<char> {
    let shifted = match base {
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        '-' => '_',
        '=' => '+',
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        ';' => ':',
        '\'' => '"',
        '`' => '~',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        _ => return None,
    };
    Some(shifted)
}

/// Printable character for `code`, applying Shift.
///
/// Shift goes through [`shifted_char`] first and otherwise upper-cases the
/// base character (a no-op for `'\n'`, `' '` and `'#'`).
pub fn code_to_char(code: u8, shift: bool) -> Option<char> {
    let base = base_char(code)?;
    if !shift {
        return Some(base);
    }
    Some(shifted_char(base).unwrap_or_else(|| base.to_ascii_uppercase()))
}

/// Resolve one newly pressed key to an output action.
///
/// Backspace and Tab are handled ahead of the table; Tab ignores Shift.
/// Unmapped codes yield `None`.
pub fn resolve(code: u8, shift: bool) -> Option<Action> {
    match code {
        BACKSPACE_KEYCODE => Some(Action::Backspace),
        TAB_KEYCODE => Some(Action::Append('\t')),
        _ => code_to_char(code, shift).map(Action::Append),
    }
}
