//! HID keyboard report model, held-key tracking and keycode resolution.

pub mod keyboard;
pub mod keymap;
pub mod tracker;

#[cfg(test)]
mod tests;

pub use keyboard::KeyboardReport;
pub use keymap::{resolve, Action};
pub use tracker::{KeySet, KeyTracker, NewKeys};
