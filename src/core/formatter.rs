//! Line formatting
//!
//! Turns a level, a timestamp, an optional call site and a message into one
//! finished line:
//!
//! ```text
//! [INFO]  2025/01/08 10:30:45.123456 main.rs:42: Server started
//! ```
//!
//! The layout is stable; downstream tooling parses it. Every numeric field is
//! appended digit by digit into the output buffer without going through an
//! intermediate `String`.

use super::flags::LogFlags;
use super::log_level::LogLevel;
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use std::fmt;
use std::io::Write;
use std::panic::Location;

/// Source location of a logging call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Placeholder used when the location could not be captured.
    pub const UNKNOWN: CallSite = CallSite {
        file: "unknown",
        line: 0,
    };

    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the caller, following `#[track_caller]` frames outward.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// File name without its directory components.
    pub fn short_file(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Appends `value` in decimal, left-padded with zeros to at least `width` digits.
///
/// Digits are assembled in reverse in a stack buffer and copied once.
pub fn push_decimal(buf: &mut Vec<u8>, mut value: u64, width: usize) {
    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    let mut width = width.min(digits.len());

    loop {
        pos -= 1;
        digits[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        width = width.saturating_sub(1);
        if value == 0 && width == 0 {
            break;
        }
    }

    buf.extend_from_slice(&digits[pos..]);
}

/// Stateless formatter configured by the logger's flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter {
    flags: LogFlags,
}

impl LineFormatter {
    pub fn new(flags: LogFlags) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> LogFlags {
        self.flags
    }

    /// Format a complete line, guaranteed to end in exactly one `\n`.
    ///
    /// When a call-site flag is set and `call_site` is `None`, the location
    /// renders as `unknown:0`.
    pub fn format<Tz: TimeZone>(
        &self,
        level: LogLevel,
        timestamp: &DateTime<Tz>,
        call_site: Option<CallSite>,
        message: impl fmt::Display,
    ) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128);
        self.write_header(&mut buf, level, timestamp, call_site);

        let start = buf.len();
        // Writing into a Vec only fails if the Display impl itself errors;
        // whatever was rendered up to that point is kept.
        let _ = write!(buf, "{}", message);

        if buf.len() == start || buf.last() != Some(&b'\n') {
            buf.push(b'\n');
        }
        buf
    }

    /// Append the level tag, timestamp fields and call site.
    pub fn write_header<Tz: TimeZone>(
        &self,
        buf: &mut Vec<u8>,
        level: LogLevel,
        timestamp: &DateTime<Tz>,
        call_site: Option<CallSite>,
    ) {
        buf.extend_from_slice(level.tag().as_bytes());

        if self.flags.has_timestamp() {
            if self.flags.contains(LogFlags::UTC) {
                self.write_clock(buf, &timestamp.with_timezone(&Utc));
            } else {
                self.write_clock(buf, timestamp);
            }
        }

        if self.flags.has_call_site() {
            let site = call_site.unwrap_or(CallSite::UNKNOWN);
            let file = if self.flags.contains(LogFlags::SHORT_FILE) {
                site.short_file()
            } else {
                site.file
            };
            buf.extend_from_slice(file.as_bytes());
            buf.push(b':');
            push_decimal(buf, u64::from(site.line), 0);
            buf.extend_from_slice(b": ");
        }
    }

    fn write_clock<T: Datelike + Timelike>(&self, buf: &mut Vec<u8>, t: &T) {
        if self.flags.contains(LogFlags::DATE) {
            push_decimal(buf, t.year().max(0) as u64, 4);
            buf.push(b'/');
            push_decimal(buf, u64::from(t.month()), 2);
            buf.push(b'/');
            push_decimal(buf, u64::from(t.day()), 2);
            buf.push(b' ');
        }

        if self.flags.has_time() {
            push_decimal(buf, u64::from(t.hour()), 2);
            buf.push(b':');
            push_decimal(buf, u64::from(t.minute()), 2);
            buf.push(b':');
            push_decimal(buf, u64::from(t.second()), 2);
            if self.flags.contains(LogFlags::MICROSECONDS) {
                buf.push(b'.');
                // chrono encodes a leap second as nanosecond >= 1e9
                let micros = (t.nanosecond() / 1_000).min(999_999);
                push_decimal(buf, u64::from(micros), 6);
            }
            buf.push(b' ');
        }
    }
}
