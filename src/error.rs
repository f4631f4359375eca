//! Error types for usbkeys.
//!
//! Per-line problems are [`ParseError`] values that the decoder counts and
//! skips. [`Error`] is reserved for conditions that stop a whole run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a capture line could not be turned into a keyboard report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Nothing left after stripping whitespace and `:` separators.
    #[error("empty line")]
    Empty,

    /// An odd number of hex digits cannot form whole bytes.
    #[error("odd number of hex digits ({0})")]
    OddLength(usize),

    /// Fewer digits than one full 8-byte report.
    #[error("too short for a keyboard report ({0} hex digits)")]
    TooShort(usize),

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit")]
    InvalidHex,
}

/// Top-level error type used across the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The input path does not name an existing file.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Reading the capture failed part way through.
    #[error("failed to read capture: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
