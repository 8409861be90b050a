//! Gregorian calendar checks for a single (year, month, day) assignment.
//!
//! All checks take plain `i64` values because the numbers come straight from user input and have
//! not been assigned a role yet. None of them fail: out-of-range values simply do not validate.

/// Smallest accepted year (after two-digit normalization).
pub const MIN_YEAR: i64 = 0;

/// Largest accepted year.
pub const MAX_YEAR: i64 = 2999;

/// Years below this are read as two-digit years in the 2000s.
pub const TWO_DIGIT_YEAR_LIMIT: i64 = 100;

/// Added to a two-digit year to place it in the 2000s.
pub const TWO_DIGIT_YEAR_BASE: i64 = 2000;

const FEBRUARY: i64 = 2;
const LONG_MONTHS: [i64; 7] = [1, 3, 5, 7, 8, 10, 12];
const SHORT_MONTHS: [i64; 4] = [4, 6, 9, 11];

/// Returns true if `year` is a Gregorian leap year: divisible by 4, except centuries that are not
/// divisible by 400.
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Reads a year below 100 as `2000 + year`. Every other year is returned unchanged.
///
/// ```
/// use date_resolver::normalize_year;
///
/// assert_eq!(normalize_year(1), 2001);
/// assert_eq!(normalize_year(99), 2099);
/// assert_eq!(normalize_year(100), 100);
/// ```
pub fn normalize_year(year: i64) -> i64 {
    if year < TWO_DIGIT_YEAR_LIMIT {
        year + TWO_DIGIT_YEAR_BASE
    } else {
        year
    }
}

/// Returns true if `year` is within `0..=2999`.
pub fn validate_year(year: i64) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// Returns true if `month` is within `1..=12`.
pub fn validate_month(month: i64) -> bool {
    (1..=12).contains(&month)
}

/// Number of days in `month` of `year`, or `None` if `month` is not a month number.
pub fn days_in_month(year: i64, month: i64) -> Option<u8> {
    if month == FEBRUARY {
        Some(if is_leap_year(year) { 29 } else { 28 })
    } else if LONG_MONTHS.contains(&month) {
        Some(31)
    } else if SHORT_MONTHS.contains(&month) {
        Some(30)
    } else {
        None
    }
}

/// Returns true if `day` exists in `month` of `year`.
///
/// An invalid `month` makes this return `false` rather than erroring, so callers that need to
/// tell the two apart must also call [validate_month].
pub fn validate_day(year: i64, month: i64, day: i64) -> bool {
    match days_in_month(year, month) {
        Some(max_day) => (1..=i64::from(max_day)).contains(&day),
        None => false,
    }
}

/// Returns true if the triple, read positionally as (year, month, day), is an accepted date.
///
/// The year is normalized with [normalize_year] before any check.
pub fn validate_date(year: i64, month: i64, day: i64) -> bool {
    validate_normalized(normalize_year(year), month, day)
}

/// [validate_date] for a year that has already been through [normalize_year].
///
/// Normalizing twice is not a no-op for very negative years, so callers that keep the normalized
/// year around use this instead.
pub(crate) fn validate_normalized(year: i64, month: i64, day: i64) -> bool {
    validate_year(year) && validate_month(month) && validate_day(year, month, day)
}
