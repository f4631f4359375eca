//! Hex report lines as exported from a capture.
//!
//! Each line holds one interrupt transfer, e.g. `02:00:1e:00:00:00:00:00`
//! or `0200 1e00 0000 0000`. Lines that do not hold a full keyboard report
//! come back as [`ParseError`] so the caller can skip them.

use std::io::{self, BufRead};

use crate::config::REPORT_HEX_DIGITS;
use crate::error::{Error, ParseError};
use crate::hid::KeyboardReport;

/// Parse one capture line into a keyboard report.
///
/// Whitespace and `:` separators are stripped first. Payload beyond the
/// first 8 bytes is dropped.
pub fn parse_report_line(line: &str) -> Result<KeyboardReport, ParseError> {
    let digits: String = line
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    if digits.is_empty() {
        return Err(ParseError::Empty);
    }
    // Count chars, not bytes: stray non-ASCII must not skew the length checks.
    let len = digits.chars().count();
    if len % 2 != 0 {
        return Err(ParseError::OddLength(len));
    }
    if len < REPORT_HEX_DIGITS {
        return Err(ParseError::TooShort(len));
    }

    // Every digit is validated, including the ignored tail.
    let bytes = hex::decode(&digits).map_err(|_| ParseError::InvalidHex)?;
    KeyboardReport::from_bytes(&bytes).ok_or(ParseError::TooShort(len))
}

/// One parsed line together with its 1-based line number.
pub type NumberedReport = (usize, Result<KeyboardReport, ParseError>);

/// Iterator over the lines of a capture, in file order.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`. Bytes that are not UTF-8
/// only spoil their own line, which then fails to parse. Yields `Err` once
/// if the underlying reader fails, then stops.
pub struct ReportLines<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
    skip_lf: bool,
    failed: bool,
}

impl<R: BufRead> ReportLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
            skip_lf: false,
            failed: false,
        }
    }

    /// Read the next raw line into `buf`, without its terminator.
    /// Returns `false` at end of input.
    fn read_raw_line(&mut self) -> io::Result<bool> {
        self.buf.clear();
        let mut started = false;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(started);
            }

            // `\n` right after a `\r` belongs to the previous line.
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            started = true;
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.skip_lf = available[end] == b'\r';
                    self.buf.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    return Ok(true);
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for ReportLines<R> {
    type Item = Result<NumberedReport, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_raw_line() {
            Ok(false) => None,
            Ok(true) => {
                self.line_no += 1;
                let line = String::from_utf8_lossy(&self.buf);
                Some(Ok((self.line_no, parse_report_line(&line))))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(Error::Io(e)))
            }
        }
    }
}
