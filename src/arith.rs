use crate::Date;
use crate::calendar::{days_in_month, resolve};
use crate::consts::{MAX_MONTH, MIN_DAY, MIN_MONTH, MONTHS_PER_YEAR};

/// Last day of December
const LAST_DAY: i32 = 31;

/// Narrows a computed field back to `i32`, saturating at the bounds.
fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value.is_negative() {
        i32::MIN
    } else {
        i32::MAX
    })
}

impl Date {
    /// Builds a date from already resolved calendar fields.
    ///
    /// A year beyond the `i32` range saturates the whole date to the first
    /// or last day of the representable range.
    pub(crate) fn from_resolved((year, month, day): (i64, i64, i64)) -> Self {
        if year > i64::from(i32::MAX) {
            return Self::new(LAST_DAY, MAX_MONTH, i32::MAX);
        }
        if year < i64::from(i32::MIN) {
            return Self::new(MIN_DAY, MIN_MONTH, i32::MIN);
        }
        Self::new(saturate(day), saturate(month), saturate(year))
    }

    /// Returns the date `days` days after this one (before it when negative).
    ///
    /// Days roll over into months and years, so February 28 2020 plus two
    /// days is March 1 2020. Out-of-range input fields are resolved onto the
    /// calendar first, the same way [`Date::normalized`] does.
    pub fn plus_days(&self, days: i32) -> Self {
        Self::from_resolved(resolve(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day) + i64::from(days),
        ))
    }

    /// Returns the date `months` months after this one (before it when negative).
    ///
    /// The day is clamped to the length of the target month, so January 31
    /// plus one month is the last day of February.
    pub fn plus_months(&self, months: i32) -> Self {
        let (year, month, day) = resolve(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        let total = year * MONTHS_PER_YEAR + (month - 1) + i64::from(months);
        let year = total.div_euclid(MONTHS_PER_YEAR);
        let month = total.rem_euclid(MONTHS_PER_YEAR) + 1;
        let day = days_in_month(year, month).map_or(day, |max| day.min(i64::from(max)));
        Self::from_resolved((year, month, day))
    }

    /// Returns a copy with `years` added to the year field.
    ///
    /// Day and month are copied as-is: February 29 2020 plus one year is
    /// February 29 2021, which does not pass validation.
    pub const fn plus_years(&self, years: i32) -> Self {
        Self::new(self.day, self.month, self.year.saturating_add(years))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_days_rolls_into_next_month() {
        assert_eq!(Date::new(28, 2, 2020).plus_days(2), Date::new(1, 3, 2020));
        assert_eq!(Date::new(28, 2, 2021).plus_days(1), Date::new(1, 3, 2021));
        assert_eq!(Date::new(31, 12, 2020).plus_days(1), Date::new(1, 1, 2021));
    }

    #[test]
    fn test_plus_days_negative_and_zero() {
        assert_eq!(Date::new(1, 3, 2020).plus_days(-1), Date::new(29, 2, 2020));
        assert_eq!(Date::new(1, 1, 2000).plus_days(-1), Date::new(31, 12, 1999));
        assert_eq!(Date::new(15, 6, 2020).plus_days(0), Date::new(15, 6, 2020));
    }

    #[test]
    fn test_plus_days_large_offsets() {
        assert_eq!(Date::new(1, 1, 2020).plus_days(366), Date::new(1, 1, 2021));
        assert_eq!(Date::new(1, 1, 1900).plus_days(36_524), Date::new(1, 1, 2000));
    }

    #[test]
    fn test_plus_days_resolves_invalid_input() {
        assert_eq!(Date::new(29, 2, 2021).plus_days(0), Date::new(1, 3, 2021));
        assert_eq!(Date::new(1, 13, 2020).plus_days(1), Date::new(2, 1, 2021));
    }

    #[test]
    fn test_plus_months_clamps_day() {
        assert_eq!(Date::new(31, 1, 2020).plus_months(1), Date::new(29, 2, 2020));
        assert_eq!(Date::new(31, 1, 2021).plus_months(1), Date::new(28, 2, 2021));
        assert_eq!(Date::new(31, 3, 2020).plus_months(1), Date::new(30, 4, 2020));
        assert_eq!(Date::new(31, 5, 2020).plus_months(-1), Date::new(30, 4, 2020));
    }

    #[test]
    fn test_plus_months_crosses_years() {
        assert_eq!(Date::new(15, 11, 2020).plus_months(3), Date::new(15, 2, 2021));
        assert_eq!(Date::new(15, 2, 2021).plus_months(-3), Date::new(15, 11, 2020));
        assert_eq!(Date::new(29, 2, 2020).plus_months(12), Date::new(28, 2, 2021));
        assert_eq!(Date::new(10, 6, 2020).plus_months(-30), Date::new(10, 12, 2017));
    }

    #[test]
    fn test_plus_months_resolves_before_adding() {
        // January 32 is February 1
        assert_eq!(Date::new(32, 1, 2020).plus_months(1), Date::new(1, 3, 2020));
    }

    #[test]
    fn test_plus_years_is_literal() {
        let result = Date::new(29, 2, 2020).plus_years(1);
        assert_eq!(result, Date::new(29, 2, 2021));
        assert_eq!(result.day(), 29);
        assert_eq!(result.month(), 2);
        assert_eq!(result.year(), 2021);
        assert!(!result.validate());

        assert_eq!(Date::new(5, 7, 2020).plus_years(-120), Date::new(5, 7, 1900));
        assert_eq!(Date::new(5, 7, 40).plus_years(0), Date::new(5, 7, 40));
    }

    #[test]
    fn test_arithmetic_saturates() {
        assert_eq!(Date::new(1, 1, i32::MAX).plus_years(1).year(), i32::MAX);
        assert_eq!(saturate(i64::MIN), i32::MIN);
        assert_eq!(saturate(42), 42);
    }

    #[test]
    fn test_overflowing_year_saturates_whole_date() {
        assert_eq!(
            Date::new(1, 1, i32::MAX).plus_days(i32::MAX),
            Date::new(31, 12, i32::MAX)
        );
        assert_eq!(
            Date::new(1, 1, i32::MIN).plus_days(i32::MIN),
            Date::new(1, 1, i32::MIN)
        );
        assert_eq!(
            Date::new(15, 6, i32::MAX).plus_months(i32::MAX),
            Date::new(31, 12, i32::MAX)
        );
        assert_eq!(
            Date::new(15, 6, i32::MIN).plus_months(i32::MIN),
            Date::new(1, 1, i32::MIN)
        );
    }
}
