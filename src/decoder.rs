//! Report stream → typed text.
//!
//! [`Decoder`] owns the held-key state for one stream and turns each report
//! into at most six [`Action`]s. [`TextAssembler`] applies them to the
//! output buffer. The `decode_*` functions wire the whole pipeline up.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use heapless::Vec;
use tracing::{debug, trace};

use crate::capture::ReportLines;
use crate::config::KEYCODE_SLOTS;
use crate::error::{Error, Result};
use crate::hid::{resolve, Action, KeyTracker, KeyboardReport};

/// Actions produced by a single report, in slot order.
pub type Actions = Vec<Action, KEYCODE_SLOTS>;

/// Per-stream decoding state.
#[derive(Clone, Default, Debug)]
pub struct Decoder {
    tracker: KeyTracker,
}

impl Decoder {
    pub const fn new() -> Self {
        Self {
            tracker: KeyTracker::new(),
        }
    }

    /// Process one report and return what it types.
    pub fn feed(&mut self, report: &KeyboardReport) -> Actions {
        let shift = report.shift_active();
        let mut actions = Actions::new();
        for code in self.tracker.update(report) {
            if let Some(action) = resolve(code, shift) {
                // One action per new key, never more than KEYCODE_SLOTS.
                let _ = actions.push(action);
            }
        }
        actions
    }

    pub fn tracker(&self) -> &KeyTracker {
        &self.tracker
    }

    /// Drop held-key state so the next report starts a fresh stream.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}

/// Growing output buffer.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TextAssembler {
    text: String,
}

impl TextAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action. Returns `true` if the buffer changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Append(c) => {
                self.text.push(c);
                true
            }
            Action::Backspace => self.text.pop().is_some(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Counters gathered over one decode run.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct DecodeStats {
    /// Lines read from the source.
    pub lines: usize,
    /// Lines that parsed into a report.
    pub reports: usize,
    /// Lines skipped as malformed.
    pub skipped: usize,
    /// Characters appended (including tabs and newlines).
    pub appended: usize,
    /// Backspaces that removed a character.
    pub erased: usize,
}

/// Result of decoding a whole capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub stats: DecodeStats,
}

/// Decode an already parsed, time-ordered report sequence.
pub fn decode_reports<'a, I>(reports: I) -> String
where
    I: IntoIterator<Item = &'a KeyboardReport>,
{
    let mut decoder = Decoder::new();
    let mut out = TextAssembler::new();
    for report in reports {
        for action in decoder.feed(report) {
            out.apply(action);
        }
    }
    out.into_string()
}

/// Decode every line of `reader`, skipping lines that are not reports.
pub fn decode_reader<R: BufRead>(reader: R) -> Result<Decoded> {
    let mut decoder = Decoder::new();
    let mut out = TextAssembler::new();
    let mut stats = DecodeStats::default();

    for item in ReportLines::new(reader) {
        let (line_no, parsed) = item?;
        stats.lines += 1;

        let report = match parsed {
            Ok(report) => report,
            Err(e) => {
                trace!(line = line_no, error = %e, "skipping line");
                stats.skipped += 1;
                continue;
            }
        };
        stats.reports += 1;

        for action in decoder.feed(&report) {
            let changed = out.apply(action);
            match action {
                Action::Append(_) => stats.appended += 1,
                Action::Backspace if changed => stats.erased += 1,
                Action::Backspace => trace!(line = line_no, "backspace on empty output"),
            }
        }
    }

    debug!(
        lines = stats.lines,
        reports = stats.reports,
        skipped = stats.skipped,
        appended = stats.appended,
        erased = stats.erased,
        "decode finished"
    );

    Ok(Decoded {
        text: out.into_string(),
        stats,
    })
}

/// Decode the capture file at `path`.
///
/// Fails with [`Error::InputNotFound`] before reading anything if `path` is
/// not an existing regular file.
pub fn decode_path(path: &Path) -> Result<Decoded> {
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    debug!(path = %path.display(), "decoding capture");
    let file = File::open(path)?;
    decode_reader(BufReader::new(file))
}
