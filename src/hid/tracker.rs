//! Held-key tracking across consecutive reports.
//!
//! Reports carry no key-up events: a key counts as released only once its
//! code is missing from a later report. The tracker keeps exactly the
//! previous report's key set and yields the codes that were not in it.

use heapless::Vec;

use super::keyboard::KeyboardReport;
use crate::config::KEYCODE_SLOTS;

/// Codes that went down in one report, in slot order.
pub type NewKeys = Vec<u8, KEYCODE_SLOTS>;

/// 256-bit membership set over the keycode space.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySet {
    bits: [u64; 4],
}

impl KeySet {
    pub const fn new() -> Self {
        Self { bits: [0; 4] }
    }

    #[inline]
    pub fn contains(&self, code: u8) -> bool {
        let (word, bit) = Self::slot(code);
        self.bits[word] & bit != 0
    }

    /// Insert `code`; returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, code: u8) -> bool {
        let (word, bit) = Self::slot(code);
        let fresh = self.bits[word] & bit == 0;
        self.bits[word] |= bit;
        fresh
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Members in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&c| self.contains(c))
    }

    #[inline]
    fn slot(code: u8) -> (usize, u64) {
        ((code >> 6) as usize, 1u64 << (code & 0x3F))
    }
}

impl FromIterator<u8> for KeySet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = KeySet::new();
        for code in iter {
            set.insert(code);
        }
        set
    }
}

/// Remembers which keys the previous report held.
#[derive(Clone, Default, Debug)]
pub struct KeyTracker {
    held: KeySet,
}

impl KeyTracker {
    pub const fn new() -> Self {
        Self { held: KeySet::new() }
    }

    /// Advance by one report and return the newly pressed codes.
    ///
    /// The held set is replaced by this report's keys, never merged, so an
    /// all-filler report releases everything.
    pub fn update(&mut self, report: &KeyboardReport) -> NewKeys {
        let mut current = KeySet::new();
        let mut fresh = NewKeys::new();

        for code in report.pressed_keys() {
            if !current.insert(code) {
                continue; // listed twice in one report
            }
            if !self.held.contains(code) {
                // At most KEYCODE_SLOTS distinct codes fit in one report.
                let _ = fresh.push(code);
            }
        }

        self.held = current;
        fresh
    }

    /// Keys held as of the last report.
    pub fn held(&self) -> &KeySet {
        &self.held
    }

    /// Forget all held keys, as if an empty report had arrived.
    pub fn reset(&mut self) {
        self.held = KeySet::new();
    }
}
