/// Minimum year accepted by validation (inclusive)
pub const MIN_YEAR: i32 = 1900;
/// Maximum year accepted by validation (inclusive)
pub const MAX_YEAR: i32 = 2050;

/// Minimum valid month (January)
pub const MIN_MONTH: i32 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: i32 = 12;

/// First day of month
pub const MIN_DAY: i32 = 1;

/// Month number for February
pub const FEBRUARY: i64 = 2;

/// Months per calendar year
pub(crate) const MONTHS_PER_YEAR: i64 = 12;
/// Days per week
pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names (index 0 is unused)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, Monday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Length of abbreviated month and weekday names
pub(crate) const SHORT_NAME_LEN: usize = 3;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
pub(crate) const UNIX_EPOCH_DAYS: i64 = 719_468;
/// 1970-01-01 was a Thursday (Monday = 0)
pub(crate) const EPOCH_WEEKDAY: i64 = 3;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Quote character delimiting literal text in format patterns
pub(crate) const QUOTE: char = '\'';

/// Pattern used by `Display`
pub const DEFAULT_PATTERN: &str = "yyyy-MM-dd";
