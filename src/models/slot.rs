//! Weekly time slot model.
//!
//! A slot is a fixed interval on one teaching day of the week. Slots are
//! compared by exact `(day, start, end)` equality: two slots that merely
//! overlap are different slots.
//!
//! # Time Model
//! Times are minutes since midnight, written `HH:MM` in serialized form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Teaching day of the week (Saturday-first week, no Friday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl Weekday {
    /// All teaching days in week order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
    ];

    /// English day name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
        }
    }
}

impl FromStr for Weekday {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ModelError::UnknownDay(s.to_string()))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Creates a time from hour and minute.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(ModelError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self {
            minutes: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.minutes
    }

    #[inline]
    pub fn hour(self) -> u8 {
        (self.minutes / 60) as u8
    }

    #[inline]
    pub fn minute(self) -> u8 {
        (self.minutes % 60) as u8
    }
}

impl FromStr for ClockTime {
    type Err = ModelError;

    /// Parses strictly `HH:MM` (zero-padded, 24-hour).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidTime(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }
        let hour = (digits[0] - b'0') * 10 + (digits[1] - b'0');
        let minute = (digits[2] - b'0') * 10 + (digits[3] - b'0');
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A weekly time slot `[start, end)` on a given day.
///
/// Ordered by day, then start, then end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSlot")]
pub struct TimeSlot {
    day: Weekday,
    start: ClockTime,
    end: ClockTime,
}

#[derive(Deserialize)]
struct RawTimeSlot {
    day: Weekday,
    start: ClockTime,
    end: ClockTime,
}

impl TryFrom<RawTimeSlot> for TimeSlot {
    type Error = ModelError;

    fn try_from(raw: RawTimeSlot) -> Result<Self> {
        Self::new(raw.day, raw.start, raw.end)
    }
}

impl TimeSlot {
    /// Creates a slot. The slot must not be empty.
    pub fn new(day: Weekday, start: ClockTime, end: ClockTime) -> Result<Self> {
        if end <= start {
            return Err(ModelError::EmptySlot {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { day, start, end })
    }

    /// Parses a slot from a day name and two `HH:MM` strings.
    ///
    /// ```
    /// use u_timetable::models::{TimeSlot, Weekday};
    ///
    /// let slot = TimeSlot::parse("Monday", "08:00", "10:00").unwrap();
    /// assert_eq!(slot.day(), Weekday::Monday);
    /// assert_eq!(slot.duration_minutes(), 120);
    /// assert!(TimeSlot::parse("Friday", "08:00", "10:00").is_err());
    /// ```
    pub fn parse(day: &str, start: &str, end: &str) -> Result<Self> {
        Self::new(day.parse()?, start.parse()?, end.parse()?)
    }

    #[inline]
    pub fn day(&self) -> Weekday {
        self.day
    }

    #[inline]
    pub fn start(&self) -> ClockTime {
        self.start
    }

    #[inline]
    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Length of the slot in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}
