use std::time::{SystemTime, UNIX_EPOCH};

/// Ticks per second (one tick = 100 ns).
pub const WINDOWS_TICK: u64 = 10_000_000;

/// Seconds between 1601-01-01 and 1970-01-01.
pub const SEC_TO_UNIX_EPOCH: u64 = 11_644_473_600;

/// A point in time as 100-nanosecond ticks since 1601-01-01T00:00:00Z.
///
/// This is the native timestamp of Windows directory enumeration. Other
/// platforms convert their `SystemTime` into it so every entry goes through
/// the same Unix conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileTime(u64);

impl FileTime {
    /// 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: FileTime = FileTime(SEC_TO_UNIX_EPOCH * WINDOWS_TICK);

    pub const fn from_ticks(ticks: u64) -> Self {
        Self(ticks)
    }

    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Convert a `SystemTime`, saturating at both ends of the tick range.
    pub fn from_system_time(time: SystemTime) -> Self {
        let epoch = Self::UNIX_EPOCH.0;
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => {
                let ticks = after
                    .as_secs()
                    .saturating_mul(WINDOWS_TICK)
                    .saturating_add(u64::from(after.subsec_nanos() / 100));
                Self(epoch.saturating_add(ticks))
            }
            Err(before) => {
                let before = before.duration();
                let ticks = before
                    .as_secs()
                    .saturating_mul(WINDOWS_TICK)
                    .saturating_add(u64::from(before.subsec_nanos() / 100));
                Self(epoch.saturating_sub(ticks))
            }
        }
    }

    /// Whole seconds since the Unix epoch, truncated to 32 bits.
    ///
    /// The subtraction wraps for times before 1970 and the cast drops the
    /// high bits for times after 2106. Both are kept so output stays
    /// identical to the Windows tool.
    pub const fn to_unix_seconds(self) -> u32 {
        (self.0 / WINDOWS_TICK).wrapping_sub(SEC_TO_UNIX_EPOCH) as u32
    }
}

impl From<SystemTime> for FileTime {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}
