use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_MONTH, MIN_YEAR};
use crate::prelude::*;

/// Reason a [`Date`](crate::Date) failed strict validation.
///
/// Variants are listed in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ValidationError {
    #[display(fmt = "Year must be between {} and {} (got {year})", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange { year: i32 },
    #[display(fmt = "Month must be between {} and {} (got {month})", MIN_MONTH, MAX_MONTH)]
    MonthOutOfRange { month: i32 },
    #[display(fmt = "Invalid day {day} for the given month and year {year}-{month:02}")]
    InvalidDay { day: i32, month: i32, year: i32 },
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Human-readable reason, identical to the `Display` output
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Error returned by [`Date::format`](crate::Date::format) for patterns it cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// An ASCII letter that is not a recognised field.
    #[error("Invalid pattern: unknown field '{letter}' at offset {offset}")]
    UnknownField { letter: char, offset: usize },

    /// A quoted literal that is never closed.
    #[error("Invalid pattern: unterminated quote starting at offset {0}")]
    UnterminatedQuote(usize),
}

/// Error returned when reading a date from its `yyyy-MM-dd` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    EmptyInput,

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}
