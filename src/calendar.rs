//! Proleptic Gregorian calendar arithmetic.
//!
//! Dates are converted to a count of days since 1970-01-01 and back, which
//! makes day/month rollover a matter of integer addition. The conversion
//! follows Howard Hinnant's `days_from_civil` / `civil_from_days` algorithms.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_ERA, DAYS_PER_WEEK, EPOCH_WEEKDAY, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTHS_PER_YEAR, UNIX_EPOCH_DAYS,
};

pub(crate) const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or `None` if `month` is outside `1..=12`.
pub(crate) fn days_in_month(year: i64, month: i64) -> Option<u8> {
    if !(1..=MONTHS_PER_YEAR).contains(&month) {
        return None;
    }

    if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        usize::try_from(month)
            .ok()
            .and_then(|m| DAYS_IN_MONTH.get(m))
            .copied()
    }
}

/// Days since 1970-01-01 for the given date.
///
/// `month` must be in `1..=12`; `day` may be any value and is applied as a
/// plain offset from the first of the month.
pub(crate) const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    // Years start in March so the leap day is the last day of the year
    let y = if month <= FEBRUARY { year - 1 } else { year };
    let era = y.div_euclid(GREGORIAN_CYCLE);
    let yoe = y.rem_euclid(GREGORIAN_CYCLE); // [0, 399]
    let mp = (month + 9) % MONTHS_PER_YEAR; // March = 0
    let doy = (153 * mp + 2) / 5 + day - 1; // [0, 365] for in-range days
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_DAYS
}

/// Inverse of [`days_from_civil`]: returns `(year, month, day)`.
pub(crate) const fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z.rem_euclid(DAYS_PER_ERA); // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * GREGORIAN_CYCLE + if month <= FEBRUARY { 1 } else { 0 };
    (year, month, day)
}

/// Resolves an arbitrary `(year, month, day)` triple onto the calendar.
///
/// Out-of-range months roll into neighbouring years and out-of-range days
/// roll into neighbouring months, so `(2020, 1, 32)` is `(2020, 2, 1)` and
/// `(2020, 3, 0)` is `(2020, 2, 29)`.
pub(crate) const fn resolve(year: i64, month: i64, day: i64) -> (i64, i64, i64) {
    let months = year * MONTHS_PER_YEAR + (month - 1);
    let y = months.div_euclid(MONTHS_PER_YEAR);
    let m = months.rem_euclid(MONTHS_PER_YEAR) + 1;
    civil_from_days(days_from_civil(y, m, 1) + day - 1)
}

/// Day of week for a day count, Monday = 0.
pub(crate) const fn weekday(days: i64) -> i64 {
    (days + EPOCH_WEEKDAY).rem_euclid(DAYS_PER_WEEK)
}

/// One-based ordinal day within the year. Expects a resolved date.
pub(crate) const fn day_of_year(year: i64, month: i64, day: i64) -> i64 {
    days_from_civil(year, month, day) - days_from_civil(year, 1, 1) + 1
}
