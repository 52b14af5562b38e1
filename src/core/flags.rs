//! Format and delivery flags fixed at logger construction

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Flags controlling the line header and the delivery mode.
    ///
    /// The header fields appear in a fixed order: level tag, date, time,
    /// call site, message. `STD` is the usual `DATE | TIME` pair.
    ///
    /// # Example
    ///
    /// ```
    /// use nblogger::LogFlags;
    ///
    /// let flags = LogFlags::STD | LogFlags::MICROSECONDS | LogFlags::SHORT_FILE;
    /// assert!(flags.has_time());
    /// assert!(!flags.is_blocking());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct LogFlags: u32 {
        /// Calendar date `YYYY/MM/DD`
        const DATE = 1 << 0;
        /// Clock time `HH:MM:SS`
        const TIME = 1 << 1;
        /// Sub-second precision `.dddddd`; implies `TIME`
        const MICROSECONDS = 1 << 2;
        /// Source path as recorded by the compiler (usually package-relative) and line of the call site
        const LONG_FILE = 1 << 3;
        /// Source file name and line of the call site; overrides `LONG_FILE`
        const SHORT_FILE = 1 << 4;
        /// Convert the timestamp to UTC before formatting
        const UTC = 1 << 5;
        /// Write on the caller's thread instead of a background worker
        const BLOCKING = 1 << 6;
        /// Also write every line to standard output
        const STDOUT = 1 << 7;

        const STD = Self::DATE.bits() | Self::TIME.bits();
    }
}

impl LogFlags {
    #[inline]
    pub fn has_timestamp(&self) -> bool {
        self.intersects(LogFlags::DATE | LogFlags::TIME | LogFlags::MICROSECONDS)
    }

    #[inline]
    pub fn has_time(&self) -> bool {
        self.intersects(LogFlags::TIME | LogFlags::MICROSECONDS)
    }

    #[inline]
    pub fn has_call_site(&self) -> bool {
        self.intersects(LogFlags::SHORT_FILE | LogFlags::LONG_FILE)
    }

    #[inline]
    pub fn is_blocking(&self) -> bool {
        self.contains(LogFlags::BLOCKING)
    }
}

impl Default for LogFlags {
    fn default() -> Self {
        LogFlags::STD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_is_date_and_time() {
        assert_eq!(LogFlags::STD, LogFlags::DATE | LogFlags::TIME);
        assert_eq!(LogFlags::default(), LogFlags::STD);
    }

    #[test]
    fn test_microseconds_implies_time() {
        let flags = LogFlags::MICROSECONDS;
        assert!(flags.has_time());
        assert!(flags.has_timestamp());
        assert!(!flags.contains(LogFlags::DATE));
    }

    #[test]
    fn test_call_site_flags() {
        assert!(!LogFlags::STD.has_call_site());
        assert!(LogFlags::SHORT_FILE.has_call_site());
        assert!(LogFlags::LONG_FILE.has_call_site());
    }
}
