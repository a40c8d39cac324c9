mod arith;
mod calendar;
mod consts;
mod error;
mod format;
mod prelude;

pub use consts::*;
pub use error::{ParseError, PatternError, ValidationError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar date stored as plain day, month and year fields.
///
/// Construction never fails and never checks the fields: a `Date` may hold
/// values that do not name a real day. Use [`Date::validate`] or
/// [`Date::validate_strict`] to check one against the supported calendar
/// (years 1900 through 2050).
///
/// Ordering is lexicographic on `(year, month, day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    // Field order drives the derived ordering
    year: i32,
    month: i32,
    day: i32,
}

impl Date {
    /// Creates a date from raw fields without validating them
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { year, month, day }
    }

    /// Returns the stored day of month
    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Returns the stored month
    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Returns the stored year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns `true` if the date passes [`Date::validate_strict`]
    pub fn validate(&self) -> bool {
        self.validate_strict().is_ok()
    }

    /// Checks the date and reports the first problem found.
    ///
    /// The year is checked first, then the month, then the day, so a date
    /// with several bad fields reports only the earliest of them.
    ///
    /// # Errors
    /// - `ValidationError::YearOutOfRange` if the year is outside `MIN_YEAR..=MAX_YEAR`
    /// - `ValidationError::MonthOutOfRange` if the month is outside `1..=12`
    /// - `ValidationError::InvalidDay` if the day does not exist in that month
    pub fn validate_strict(&self) -> Result<(), ValidationError> {
        let result = self.check();
        if let Err(err) = &result {
            tracing::trace!(
                day = self.day,
                month = self.month,
                year = self.year,
                %err,
                "date failed validation"
            );
        }
        result
    }

    fn check(&self) -> Result<(), ValidationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(ValidationError::YearOutOfRange { year: self.year });
        }
        if !(MIN_MONTH..=MAX_MONTH).contains(&self.month) {
            return Err(ValidationError::MonthOutOfRange { month: self.month });
        }
        let max_day = calendar::days_in_month(i64::from(self.year), i64::from(self.month))
            .ok_or(ValidationError::MonthOutOfRange { month: self.month })?;
        if !(MIN_DAY..=i32::from(max_day)).contains(&self.day) {
            return Err(ValidationError::InvalidDay {
                day: self.day,
                month: self.month,
                year: self.year,
            });
        }
        Ok(())
    }

    /// Returns `true` if this date is strictly later than `other`
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns `true` if this date is strictly earlier than `other`
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Resolves the fields onto the calendar.
    ///
    /// Days and months past the end of their range roll forward and values
    /// below one roll backward, so day 32 of January becomes February 1 and
    /// month 13 becomes January of the next year. A valid date is returned
    /// unchanged.
    pub fn normalized(&self) -> Self {
        Self::from_resolved(self.resolved())
    }

    fn resolved(&self) -> (i64, i64, i64) {
        calendar::resolve(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        )
    }

    /// Formats the date using `pattern`.
    ///
    /// Recognised fields are `y` (year, `yy` for two digits), `M` (month,
    /// `MMM` and `MMMM` for names), `d` (day), `E` (weekday name) and `D`
    /// (day of year). Repeating a numeric field pads it with zeros to that
    /// width. Other ASCII letters are rejected; text in single quotes and
    /// any non-letter is copied as-is. The fields are taken from the
    /// [normalized](Date::normalized) date.
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern contains an unknown field
    /// letter or an unterminated quote.
    pub fn format(&self, pattern: &str) -> Result<String, PatternError> {
        let parsed = format::Pattern::parse(pattern).inspect_err(|err| {
            tracing::debug!(pattern, %err, "rejected date pattern");
        })?;
        let (year, month, day) = self.resolved();
        Ok(parsed.render(year, month, day))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.format(DEFAULT_PATTERN).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    /// Reads the `yyyy-MM-dd` form produced by `Display`.
    ///
    /// The fields are stored as written; the result is not validated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // A leading '-' belongs to the year
        let (sign, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (-1, rest),
            None => (1, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected yyyy{DATE_SEPARATOR}MM{DATE_SEPARATOR}dd, got {trimmed}"
            )));
        };

        Ok(Self::new(
            Self::parse_field(day)?,
            Self::parse_field(month)?,
            sign * Self::parse_field(year)?,
        ))
    }
}

impl Date {
    /// Parses one unsigned numeric field
    fn parse_field(s: &str) -> Result<i32, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}
