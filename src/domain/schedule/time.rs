//! Time-of-day value object.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A time of day with minute precision.
///
/// Renders as zero-padded `HH:MM`, which is also the wire form. Ordering
/// is chronological and, because the rendering is fixed-width, agrees
/// with lexicographic order of the rendered strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Creates a time of day from hour and minute literals.
    ///
    /// Panics when out of range; untrusted input goes through `FromStr`.
    pub const fn new(hour: u8, minute: u8) -> Self {
        assert!(hour < 24 && minute < 60);
        Self {
            minutes: hour as u16 * 60 + minute as u16,
        }
    }

    /// Hour component, 0-23.
    pub fn hour(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    /// Minute component, 0-59.
    pub fn minute(&self) -> u8 {
        (self.minutes % 60) as u8
    }

    /// Minutes since midnight.
    pub fn minutes_from_midnight(&self) -> u16 {
        self.minutes
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::invalid_format("clock_time", format!("expected zero-padded HH:MM, got '{s}'"));

        let (hh, mm) = match s.split_once(':') {
            Some(parts) => parts,
            None => return Err(invalid()),
        };
        if hh.len() != 2 || mm.len() != 2 {
            return Err(invalid());
        }

        let hour: u8 = hh.parse().map_err(|_| invalid())?;
        let minute: u8 = mm.parse().map_err(|_| invalid())?;
        if hour >= 24 || minute >= 60 {
            return Err(invalid());
        }

        Ok(Self {
            minutes: hour as u16 * 60 + minute as u16,
        })
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
