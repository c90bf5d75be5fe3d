mod calendar;
mod config;
mod consts;
mod device;
mod moon;
mod prelude;
mod present;
#[cfg(any(test, feature = "testing-support"))]
pub mod sim;
mod types;

pub use calendar::{MoonCalendar, advance_and_render};
pub use config::{BoardConfig, ConfigError};
pub use consts::*;
pub use device::{DigitalOutput, NumericDisplay, PinMode};
pub use moon::{MoonPhase, day_number, moon_phase};
pub use present::{DisplayCode, PinPattern, to_display_code, to_pin_pattern};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A concrete Gregorian calendar date.
/// Every value is valid: the day never exceeds the length of its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct Date {
    year: Year,
    month: Month,
    day: Day,
}

/// Error type for building or parsing a [`Date`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[error("Empty date string")]
    EmptyInput,
}

impl Date {
    /// 0001-01-01
    pub const MIN: Self = Self {
        year: Year::FIRST,
        month: Month::JANUARY,
        day: Day::FIRST,
    };

    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the `DateError` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// 9999-12-31
    pub fn max() -> Self {
        Self {
            year: Year::LAST,
            month: Month::DECEMBER,
            day: Day::last_of(Year::LAST, Month::DECEMBER),
        }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns (year, month, day)
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// The following day, or `None` after 9999-12-31.
    pub fn checked_next(self) -> Option<Self> {
        if self.day.get() < days_in_month(self.year(), self.month()) {
            return Some(Self {
                day: self.day.succ(),
                ..self
            });
        }

        match self.month.succ() {
            Some(month) => Some(Self {
                month,
                day: Day::FIRST,
                ..self
            }),
            None => self.year.succ().map(|year| Self {
                year,
                month: Month::JANUARY,
                day: Day::FIRST,
            }),
        }
    }

    /// The preceding day, or `None` before 0001-01-01.
    pub fn checked_previous(self) -> Option<Self> {
        if let Some(day) = self.day.pred() {
            return Some(Self { day, ..self });
        }

        match self.month.pred() {
            Some(month) => Some(Self {
                month,
                day: Day::last_of(self.year, month),
                ..self
            }),
            None => self.year.pred().map(|year| Self {
                year,
                month: Month::DECEMBER,
                day: Day::last_of(year, Month::DECEMBER),
            }),
        }
    }

    /// The following day. The calendar is perpetual: 9999-12-31 wraps to 0001-01-01.
    pub fn next(self) -> Self {
        self.checked_next().unwrap_or(Self::MIN)
    }

    /// The preceding day. 0001-01-01 wraps to 9999-12-31.
    pub fn previous(self) -> Self {
        self.checked_previous().unwrap_or_else(Self::max)
    }
}

/// Advances a date by one day.
pub fn next_date(date: Date) -> Date {
    date.next()
}

/// Steps a date back by one day; the inverse of [`next_date`].
pub fn prev_date(date: Date) -> Date {
    date.previous()
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => Self::new(parse_u16(year)?, parse_u8(month)?, parse_u8(day)?),
            _ => Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} part(s): {s}",
                parts.len()
            ))),
        }
    }
}

fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(u16, u8, u8)> for Date {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<Date> for (u16, u8, u8) {
    fn from(date: Date) -> Self {
        date.to_tuple()
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
