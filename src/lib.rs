mod calendar;
mod consts;
mod prelude;

pub use calendar::{days_in_month, is_leap_year, month_from_abbreviation};
pub use consts::*;

use crate::prelude::*;
use calendar::month_name;
use std::process;
use std::str::FromStr;

/// A Gregorian calendar date stored as a day/month/year triple.
///
/// Checked construction and every setter run full calendar validation:
/// month in `1..=12`, day within the month's maximum for the year (February
/// has 29 days in leap years, 28 otherwise). Copies are plain value copies
/// and are never re-validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{day}/{month}/{year}")]
pub struct Date {
    day: u8,
    month: u8,
    year: u16,
}

/// Error type for calendar validation. Recoverable: callers are expected to
/// handle it at the call site.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDate {
    /// Month outside `1..=12`.
    #[error("Invalid month: {0}")]
    MonthOutOfRange(u8),

    /// Day above the month's maximum for the year.
    #[error("{month} has at most {max} days")]
    DayExceedsMonth { month: &'static str, max: u8 },

    /// Day outside the coarse `1..=31` bound.
    #[error("Invalid day: {0}")]
    DayOutOfRange(u8),
}

/// Error type for string parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input did not split into exactly 3 fields under the detected format.
    /// Historically this terminated the process; [`Date::parse_or_exit`]
    /// keeps that behavior, while [`FromStr`] reports it as this variant so
    /// the host can decide.
    #[error("Malformed date input: expected 3 fields, found {found}")]
    MalformedInput { found: usize },

    /// Word-style month token matched no known three-letter abbreviation.
    #[error("Unknown month abbreviation: {0}")]
    UnknownMonthAbbreviation(String),

    /// A day, month, or year field failed to parse as a number.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// The parsed fields form an impossible calendar date.
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),
}

impl Date {
    /// Creates a new date from day, month, and year, running full
    /// validation.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the combination violates calendar rules; no
    /// `Date` is produced on failure.
    pub fn new(day: u8, month: u8, year: u16) -> Result<Self, InvalidDate> {
        let date = Self { day, month, year };
        date.validate()?;
        Ok(date)
    }

    /// Creates a date without validating it.
    ///
    /// Useful for reconstructing state that is already known to be valid.
    /// A date built from out-of-range fields is observable through the
    /// accessors and [`Display`](std::fmt::Display), and every later setter
    /// call will surface the invalid state through its validation pass.
    pub const fn new_unchecked(day: u8, month: u8, year: u16) -> Self {
        Self { day, month, year }
    }

    /// Checks the current day/month/year against calendar rules, reporting
    /// the first violation found.
    ///
    /// The month's maximum day is re-derived on every call; a generic
    /// `1..=31` day bound is checked last as a catch-all.
    ///
    /// # Errors
    /// Returns `InvalidDate` naming the violated rule.
    pub fn validate(&self) -> Result<(), InvalidDate> {
        if !(JANUARY..=MAX_MONTH).contains(&self.month) {
            return Err(InvalidDate::MonthOutOfRange(self.month));
        }

        let max = days_in_month(self.year, self.month);
        if self.day > max {
            return Err(InvalidDate::DayExceedsMonth {
                month: month_name(self.month),
                max,
            });
        }

        if !(MIN_DAY..=MAX_DAY).contains(&self.day) {
            return Err(InvalidDate::DayOutOfRange(self.day));
        }

        Ok(())
    }

    /// Returns true if this date's year is a leap year.
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the day of the month.
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the month number, 1-indexed.
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Sets the day if the new value is within the coarse `1..=31` bound;
    /// an out-of-bound value is silently ignored. Full validation then runs
    /// against the current state either way.
    ///
    /// Note that the coarse bound is not month-aware: setting day 31 on an
    /// April date assigns the value and then fails validation. Setters are
    /// not a safe way to probe a candidate value.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the date is invalid after the call.
    pub fn set_day(&mut self, day: u8) -> Result<(), InvalidDate> {
        if (MIN_DAY..=MAX_DAY).contains(&day) {
            self.day = day;
        }
        self.validate()
    }

    /// Sets the month if the new value is in `1..=12`; an out-of-range value
    /// is silently ignored. Full validation then runs against the current
    /// state either way.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the date is invalid after the call.
    pub fn set_month(&mut self, month: u8) -> Result<(), InvalidDate> {
        if (JANUARY..=MAX_MONTH).contains(&month) {
            self.month = month;
        }
        self.validate()
    }

    /// Sets the year if the new value is positive; zero is silently ignored.
    /// Full validation then runs against the current state either way.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the date is invalid after the call.
    pub fn set_year(&mut self, year: u16) -> Result<(), InvalidDate> {
        if year > 0 {
            self.year = year;
        }
        self.validate()
    }
}

impl Date {
    /// Parses like [`FromStr`], but preserves the historical handling of
    /// malformed input: a wrong field count writes an error line to stderr
    /// and terminates the process with a non-zero status. Every other error
    /// is returned for the caller to handle.
    ///
    /// # Errors
    /// Returns any [`ParseError`] other than `MalformedInput`.
    pub fn parse_or_exit(input: &str) -> Result<Self, ParseError> {
        match input.parse::<Self>() {
            Err(ParseError::MalformedInput { found }) => {
                eprintln!("Error: expected 3 date fields, found {found}");
                process::exit(1);
            }
            result => result,
        }
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidNumber(s.to_owned()))
    }

    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidNumber(s.to_owned()))
    }

    /// Word-style format: `"MMM D[,] YYYY"`, e.g. `"AUG 5, 2023"`.
    fn parse_word_style(s: &str) -> Result<(u8, u8, u16), ParseError> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(ParseError::MalformedInput {
                found: tokens.len(),
            });
        }

        let month = month_from_abbreviation(tokens[0])
            .ok_or_else(|| ParseError::UnknownMonthAbbreviation(tokens[0].to_owned()))?;
        let day = Self::parse_u8(tokens[1].strip_suffix(',').unwrap_or(tokens[1]))?;
        let year = Self::parse_u16(tokens[2])?;

        Ok((day, month, year))
    }

    /// Numeric-style format: `"D/M/YYYY"`, e.g. `"5/8/2023"`.
    fn parse_numeric_style(s: &str) -> Result<(u8, u8, u16), ParseError> {
        let tokens: Vec<&str> = s.split(NUMERIC_SEPARATOR).collect();
        if tokens.len() != 3 {
            return Err(ParseError::MalformedInput {
                found: tokens.len(),
            });
        }

        let day = Self::parse_u8(tokens[0])?;
        let month = Self::parse_u8(tokens[1])?;
        let year = Self::parse_u16(tokens[2])?;

        Ok((day, month, year))
    }
}

impl FromStr for Date {
    type Err = ParseError;

    /// The format is detected from the first character: alphabetic means
    /// word-style (`"AUG 5, 2023"`), anything else means numeric-style
    /// (`"5/8/2023"`). The parsed fields then go through full validation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word_style = s.chars().next().is_some_and(char::is_alphabetic);
        let (day, month, year) = if word_style {
            Self::parse_word_style(s)?
        } else {
            Self::parse_numeric_style(s)?
        };

        let date = Self { day, month, year };
        date.validate()?;
        Ok(date)
    }
}

impl TryFrom<(u8, u8, u16)> for Date {
    type Error = InvalidDate;

    fn try_from(value: (u8, u8, u16)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
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
