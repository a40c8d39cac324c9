//! Pattern-driven date formatting.
//!
//! A pattern is a sequence of fields and literals. A field is a run of one
//! repeated ASCII letter; the run length selects padding or name style.
//! Text inside single quotes is copied verbatim and `''` yields a quote.
//!
//! | letter | meaning     | 1       | 2      | 3     | 4+        |
//! |--------|-------------|---------|--------|-------|-----------|
//! | `y`    | year        | `2020`  | `20`   | `2020`| `2020`    |
//! | `M`    | month       | `5`     | `05`   | `May` | `May`     |
//! | `d`    | day         | `7`     | `07`   | `007` | `0007`    |
//! | `E`    | weekday     | `Thu`   | `Thu`  | `Thu` | `Thursday`|
//! | `D`    | day of year | `128`   | `128`  | `128` | `0128`    |

use std::fmt;

use crate::PatternError;
use crate::calendar::{day_of_year, days_from_civil, weekday};
use crate::consts::{CENTURY_CYCLE, MONTH_NAMES, QUOTE, SHORT_NAME_LEN, WEEKDAY_NAMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    Month,
    Day,
    Weekday,
    DayOfYear,
}

impl Field {
    const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'y' => Some(Self::Year),
            'M' => Some(Self::Month),
            'd' => Some(Self::Day),
            'E' => Some(Self::Weekday),
            'D' => Some(Self::DayOfYear),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Field { field: Field, width: usize },
    Literal(&'a str),
}

/// A parsed format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pattern<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Pattern<'a> {
    pub(crate) fn parse(pattern: &'a str) -> Result<Self, PatternError> {
        let mut tokens = Vec::new();
        let mut chars = pattern.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            if c == QUOTE {
                if chars.next_if(|&(_, n)| n == QUOTE).is_some() {
                    tokens.push(Token::Literal("'"));
                    continue;
                }
                let mut segment_start = offset + 1;
                loop {
                    match chars.next() {
                        None => return Err(PatternError::UnterminatedQuote(offset)),
                        Some((i, QUOTE)) => {
                            tokens.push(Token::Literal(&pattern[segment_start..i]));
                            if chars.next_if(|&(_, n)| n == QUOTE).is_none() {
                                break;
                            }
                            tokens.push(Token::Literal("'"));
                            segment_start = i + 2;
                        }
                        Some(_) => {}
                    }
                }
            } else if c.is_ascii_alphabetic() {
                let field = Field::from_letter(c)
                    .ok_or(PatternError::UnknownField { letter: c, offset })?;
                let mut width = 1;
                while chars.next_if(|&(_, n)| n == c).is_some() {
                    width += 1;
                }
                tokens.push(Token::Field { field, width });
            } else {
                let mut end = offset + c.len_utf8();
                while let Some((i, n)) =
                    chars.next_if(|&(_, n)| n != QUOTE && !n.is_ascii_alphabetic())
                {
                    end = i + n.len_utf8();
                }
                tokens.push(Token::Literal(&pattern[offset..end]));
            }
        }

        Ok(Self { tokens })
    }

    /// Renders a calendar-resolved `(year, month, day)`.
    pub(crate) fn render(&self, year: i64, month: i64, day: i64) -> String {
        Rendered {
            pattern: self,
            year,
            month,
            day,
        }
        .to_string()
    }
}

struct Rendered<'p, 'a> {
    pattern: &'p Pattern<'a>,
    year: i64,
    month: i64,
    day: i64,
}

impl Rendered<'_, '_> {
    fn write_field(&self, f: &mut fmt::Formatter<'_>, field: Field, width: usize) -> fmt::Result {
        match field {
            Field::Year if width == 2 => write!(f, "{:02}", self.year.rem_euclid(CENTURY_CYCLE)),
            Field::Year => write!(f, "{:0width$}", self.year),
            Field::Month if width >= SHORT_NAME_LEN => {
                write_name(f, name_at(&MONTH_NAMES, self.month), width)
            }
            Field::Month => write!(f, "{:0width$}", self.month),
            Field::Day => write!(f, "{:0width$}", self.day),
            Field::Weekday => {
                let days = days_from_civil(self.year, self.month, self.day);
                write_name(f, name_at(&WEEKDAY_NAMES, weekday(days)), width)
            }
            Field::DayOfYear => write!(
                f,
                "{:0width$}",
                day_of_year(self.year, self.month, self.day)
            ),
        }
    }
}

impl fmt::Display for Rendered<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.pattern.tokens {
            match *token {
                Token::Literal(text) => f.write_str(text)?,
                Token::Field { field, width } => self.write_field(f, field, width)?,
            }
        }
        Ok(())
    }
}

fn name_at(names: &[&'static str], index: i64) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| names.get(i))
        .copied()
        .unwrap_or_default()
}

/// Full name for runs longer than the abbreviation, otherwise the abbreviation.
fn write_name(f: &mut fmt::Formatter<'_>, name: &str, width: usize) -> fmt::Result {
    if width > SHORT_NAME_LEN {
        f.write_str(name)
    } else {
        f.write_str(name.get(..SHORT_NAME_LEN).unwrap_or(name))
    }
}
