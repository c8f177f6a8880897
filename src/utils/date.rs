//! UTC datetime values carried in page metadata.
//!
//! `DateTimeUtc` is the payload of `MetaValue::Date`. Unfurl tags only ever
//! need the calendar date, so the interesting outputs are:
//!
//! - `to_iso_date()` for `article:published_time` and friends
//! - `to_rfc3339()` behind `Display` and `Serialize` when a time of day is set
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("1969-04-20T10:17:00Z").unwrap();
//! assert_eq!(dt.to_iso_date(), "1969-04-20");
//! ```

use anyhow::{Result, bail};
use serde::{Serialize, Serializer};
use std::fmt;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse a date, optionally followed by a time of day.
    ///
    /// Accepted: `YYYY-MM-DD`, then optionally a `T` or space and
    /// `HH:MM[:SS][.fff]` with an optional `Z` or `±HH:MM` offset. The
    /// offset is checked but not applied: the calendar date is kept as
    /// written.
    ///
    /// Anything else, including out-of-range fields, yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        let date_part = b.get(..10)?;
        if date_part[4] != b'-' || date_part[7] != b'-' {
            return None;
        }

        let (hour, minute, second) = match b.get(10) {
            None => (0, 0, 0),
            Some(b'T' | b't' | b' ') => parse_time(&b[11..])?,
            Some(_) => return None,
        };

        let dt = Self::new(
            digits(&b[0..4])?,
            digits(&b[5..7])?,
            digits(&b[8..10])?,
            hour,
            minute,
            second,
        );
        dt.validate().ok()?;
        Some(dt)
    }

    /// Check field ranges, including month length and leap years.
    pub fn validate(&self) -> Result<()> {
        let max_day = match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(self.year) => 29,
            2 => 28,
            month => bail!("month is invalid: {month}"),
        };

        let checks = [
            ("day", self.day, 1..=max_day),
            ("hour", self.hour, 0..=23),
            ("minute", self.minute, 0..=59),
            ("second", self.second, 0..=59),
        ];
        for (name, value, range) in checks {
            if !range.contains(&value) {
                bail!("{name} is invalid: {value}");
            }
        }
        Ok(())
    }

    #[inline]
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// True when no time-of-day component is set.
    #[inline]
    pub const fn is_date_only(self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0
    }

    /// Calendar date only: `YYYY-MM-DD`.
    pub fn to_iso_date(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Format as RFC 3339 (ISO 8601).
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl fmt::Display for DateTimeUtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_date_only() {
            f.write_str(&self.to_iso_date())
        } else {
            f.write_str(&self.to_rfc3339())
        }
    }
}

impl Serialize for DateTimeUtc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse `HH:MM[:SS][.fff][Z|±HH:MM]`. Fractional seconds are dropped.
fn parse_time(b: &[u8]) -> Option<(u8, u8, u8)> {
    let (hm, mut rest) = b.split_at_checked(5)?;
    if hm[2] != b':' {
        return None;
    }
    let (hour, minute) = (digits(&hm[..2])?, digits(&hm[3..])?);

    let mut second = 0;
    if let [b':', s1, s2, tail @ ..] = rest {
        second = digits(&[*s1, *s2])?;
        rest = tail;
    }
    if let [b'.', tail @ ..] = rest {
        let frac = tail.iter().take_while(|b| b.is_ascii_digit()).count();
        if frac == 0 {
            return None;
        }
        rest = &tail[frac..];
    }

    match rest {
        [] | [b'Z' | b'z'] => {}
        [b'+' | b'-', h1, h2, b':', m1, m2] => {
            let offset_hour: u8 = digits(&[*h1, *h2])?;
            let offset_minute: u8 = digits(&[*m1, *m2])?;
            if offset_hour > 23 || offset_minute > 59 {
                return None;
            }
        }
        _ => return None,
    }
    Some((hour, minute, second))
}

/// Parse a run of ASCII digits. The caller bounds the width.
fn digits<T: TryFrom<u32>>(bytes: &[u8]) -> Option<T> {
    let mut value = 0u32;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(b - b'0');
    }
    T::try_from(value).ok()
}
