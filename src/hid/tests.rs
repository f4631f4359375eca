//! Unit tests for keyboard report parsing and held-key tracking.
//!
//! These tests verify the pure logic of report layout, shift resolution
//! and the newly-pressed diff between consecutive reports.

use super::keyboard::KeyboardReport;
use super::tracker::{KeySet, KeyTracker};

fn keys(codes: &[u8]) -> KeyboardReport {
    let mut report = KeyboardReport::empty();
    report.keycodes[..codes.len()].copy_from_slice(codes);
    report
}

// ═══════════════════════════════════════════════════════════════════════════
// Keyboard Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn keyboard_report_empty() {
    let report = KeyboardReport::empty();
    assert!(report.is_released());
    assert!(!report.shift_active());
    assert_eq!(report.keycodes, [0; 6]);
}

#[test]
fn keyboard_report_from_valid_bytes() {
    // Modifier: Left Shift (0x02), Reserved: 0, Keys: 'a' (0x04)
    let data = [0x02, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00];
    let report = KeyboardReport::from_bytes(&data).unwrap();

    assert_eq!(report.modifier, 0x02);
    assert_eq!(report.reserved, 0x00);
    assert_eq!(report.keycodes[0], 0x04);
    assert!(report.shift_active());
    assert!(!report.is_released());
}

#[test]
fn keyboard_report_from_short_bytes_fails() {
    assert!(KeyboardReport::from_bytes(&[]).is_none());
    assert!(KeyboardReport::from_bytes(&[0x02, 0x00, 0x04]).is_none());
    assert!(KeyboardReport::from_bytes(&[0; 7]).is_none());
}

#[test]
fn keyboard_report_from_longer_bytes_ok() {
    // Extra bytes should be ignored
    let data = [0x00, 0x00, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0xAA, 0xBB];
    let report = KeyboardReport::from_bytes(&data).unwrap();
    assert_eq!(report.keycodes, [0x04, 0x05, 0x06, 0x07, 0x08, 0x09]);
}

#[test]
fn keyboard_report_serialize() {
    let report = KeyboardReport {
        modifier: 0x20,
        reserved: 0x00,
        keycodes: [0x2A, 0x2B, 0x00, 0x00, 0x00, 0x00],
    };
    let mut buf = [0u8; 8];
    assert_eq!(report.serialize(&mut buf), 8);
    assert_eq!(buf, [0x20, 0x00, 0x2A, 0x2B, 0x00, 0x00, 0x00, 0x00]);

    let mut small_buf = [0u8; 4];
    assert_eq!(report.serialize(&mut small_buf), 0);
}

#[test]
fn shift_from_either_side_only() {
    for (modifier, shift) in [
        (0x02, true),  // Left Shift
        (0x20, true),  // Right Shift
        (0x22, true),  // both
        (0x01, false), // Left Ctrl
        (0x04, false), // Left Alt
        (0x08, false), // Left GUI
        (0xDD, false), // everything but Shift
    ] {
        let report = KeyboardReport {
            modifier,
            ..KeyboardReport::empty()
        };
        assert_eq!(report.shift_active(), shift, "modifier {modifier:#04x}");
    }
}

#[test]
fn pressed_keys_drop_fillers() {
    let report = keys(&[0x00, 0x04, 0x01, 0xFF, 0x05, 0x00]);
    let pressed: Vec<u8> = report.pressed_keys().collect();
    assert_eq!(pressed, [0x04, 0x05]);
}

#[test]
fn rollover_report_counts_as_released() {
    // Phantom state: every slot reports ErrorRollOver.
    assert!(keys(&[0x01; 6]).is_released());
}

// ═══════════════════════════════════════════════════════════════════════════
// KeySet Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn key_set_membership_spans_all_words() {
    let set: KeySet = [0x00, 0x3F, 0x40, 0x7F, 0x80, 0xFF].into_iter().collect();
    assert_eq!(set.len(), 6);
    for code in [0x00, 0x3F, 0x40, 0x7F, 0x80, 0xFF] {
        assert!(set.contains(code));
    }
    assert!(!set.contains(0x41));
    let members: Vec<u8> = set.iter().collect();
    assert_eq!(members, [0x00, 0x3F, 0x40, 0x7F, 0x80, 0xFF]);
}

#[test]
fn key_set_insert_reports_freshness() {
    let mut set = KeySet::new();
    assert!(set.is_empty());
    assert!(set.insert(0x2A));
    assert!(!set.insert(0x2A));
    assert_eq!(set.len(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// KeyTracker Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn tracker_first_press_is_new() {
    let mut tracker = KeyTracker::new();
    assert_eq!(tracker.update(&keys(&[0x0B])).as_slice(), &[0x0B]);
}

#[test]
fn tracker_held_key_emits_once() {
    let mut tracker = KeyTracker::new();
    let held = keys(&[0x04]);
    assert_eq!(tracker.update(&held).len(), 1);
    for _ in 0..10 {
        assert!(tracker.update(&held).is_empty());
    }
}

#[test]
fn tracker_reports_only_additions() {
    let mut tracker = KeyTracker::new();
    tracker.update(&keys(&[0x0B]));
    assert_eq!(tracker.update(&keys(&[0x0B, 0x0C])).as_slice(), &[0x0C]);
}

#[test]
fn tracker_keeps_slot_order() {
    let mut tracker = KeyTracker::new();
    tracker.update(&keys(&[0x05]));
    let fresh = tracker.update(&keys(&[0x07, 0x05, 0x04, 0x06]));
    assert_eq!(fresh.as_slice(), &[0x07, 0x04, 0x06]);
}

#[test]
fn tracker_collapses_duplicates_within_report() {
    let mut tracker = KeyTracker::new();
    assert_eq!(tracker.update(&keys(&[0x04, 0x04, 0x04])).as_slice(), &[0x04]);
    assert_eq!(tracker.held().len(), 1);
}

#[test]
fn tracker_state_is_replaced_not_merged() {
    let mut tracker = KeyTracker::new();
    tracker.update(&keys(&[0x04, 0x05]));
    tracker.update(&keys(&[0x05]));
    assert!(!tracker.held().contains(0x04));
    // 0x04 was released by the previous report, so it is new again.
    assert_eq!(tracker.update(&keys(&[0x05, 0x04])).as_slice(), &[0x04]);
}

#[test]
fn tracker_empty_report_releases_all() {
    let mut tracker = KeyTracker::new();
    tracker.update(&keys(&[0x04, 0x05]));
    assert!(tracker.update(&KeyboardReport::empty()).is_empty());
    assert!(tracker.held().is_empty());
    assert_eq!(tracker.update(&keys(&[0x04])).as_slice(), &[0x04]);
}

#[test]
fn tracker_ignores_fillers() {
    let mut tracker = KeyTracker::new();
    assert!(tracker.update(&keys(&[0x00, 0x01, 0xFF])).is_empty());
    assert!(tracker.held().is_empty());
}

#[test]
fn tracker_six_new_keys_fit() {
    let mut tracker = KeyTracker::new();
    let fresh = tracker.update(&keys(&[0x04, 0x05, 0x06, 0x07, 0x08, 0x09]));
    assert_eq!(fresh.len(), 6);
}

#[test]
fn tracker_reset_clears_held() {
    let mut tracker = KeyTracker::new();
    tracker.update(&keys(&[0x04]));
    tracker.reset();
    assert_eq!(tracker.update(&keys(&[0x04])).as_slice(), &[0x04]);
}
