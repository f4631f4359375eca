//! Recover typed text from captured USB HID keyboard reports.
//!
//! Input is the line-oriented hex dump of a keyboard's interrupt IN
//! endpoint (one 8-byte boot-protocol report per line, e.g. tshark's
//! `usb.capdata` field). Output is the text the operator typed, with
//! backspaces applied and held keys typed once.
//!
//! ```
//! use usbkeys::decoder::decode_reader;
//!
//! let capture = "00:00:0b:00:00:00:00:00\n\
//!                00:00:0b:0c:00:00:00:00\n\
//!                00:00:00:00:00:00:00:00\n";
//! assert_eq!(decode_reader(capture.as_bytes()).unwrap().text, "hi");
//! ```
//!
//! Tests: `cargo test`. The optional `defmt` feature only adds
//! `defmt::Format` derives; check it builds with
//! `cargo check --lib --features defmt`.

// ═══════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════

pub mod capture;
pub mod config;
pub mod decoder;
pub mod error;
pub mod hid;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use capture::parse_report_line;
pub use decoder::{decode_path, decode_reader, decode_reports, Decoded, Decoder, TextAssembler};
pub use error::{Error, ParseError};
pub use hid::{Action, KeyboardReport};
