use crate::{
    calendar::{normalize_year, validate_date, validate_normalized},
    error::{DateError, InputError},
    variation::create_all_variations,
};
use chrono::{Datelike, NaiveDate};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use std::{
    collections::{btree_set, BTreeSet},
    num::IntErrorKind,
};

/// Separator between the three numbers of an ambiguous date.
pub const RAW_SEPARATOR: char = '/';

/// Three integers in the order they appeared in the input, with no role assigned yet.
///
/// # Examples
///
/// ```
/// use date_resolver::RawTriple;
///
/// let raw: RawTriple = "12/10/01".parse().unwrap();
/// assert_eq!([12, 10, 1], raw.values());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawTriple {
    values: [i64; 3],
}

impl RawTriple {
    /// Creates a triple from three numbers in input order.
    pub fn new(first: i64, second: i64, third: i64) -> Self {
        Self {
            values: [first, second, third],
        }
    }

    /// Returns the numbers in input order.
    pub fn values(&self) -> [i64; 3] {
        self.values
    }

    /// Returns every (year, month, day) reading of this triple.
    pub fn variations(&self) -> [[i64; 3]; 6] {
        let [a, b, c] = self.values;
        create_all_variations(a, b, c)
    }
}

impl FromStr for RawTriple {
    type Err = InputError;

    /// Parses `A/B/C` where each part is a base-10 integer, optionally signed. Whitespace around
    /// each part (such as a trailing newline) is ignored.
    ///
    /// Integers too large for `i64` saturate to `i64::MAX` or `i64::MIN`. Neither can be a year,
    /// month, or day, so such input resolves as illegal rather than malformed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(RAW_SEPARATOR).map(str::trim).collect();

        let numbers = tokens
            .iter()
            .copied()
            .map(parse_integer)
            .collect::<Result<Vec<_>, _>>()?;

        match numbers[..] {
            [first, second, third] => Ok(Self::new(first, second, third)),
            _ => Err(InputError::WrongTokenCount {
                found: numbers.len(),
            }),
        }
    }
}

fn parse_integer(token: &str) -> Result<i64, InputError> {
    token.parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(InputError::NotAnInteger {
            token: token.to_owned(),
        }),
    })
}

/// A valid (year, month, day) reading of a [RawTriple].
///
/// The year is always in `0..=2999`, the month in `1..=12`, and the day exists in that month.
/// Ordering is lexicographic over (year, month, day), so the smallest candidate is the earliest
/// date. Displays as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidateDate {
    year: i64,
    month: u8,
    day: u8,
}

impl CandidateDate {
    /// Reads the values as (year, month, day), applying two-digit-year normalization first.
    /// Returns `None` if the result is not a valid date.
    ///
    /// ```
    /// use date_resolver::CandidateDate;
    ///
    /// let date = CandidateDate::new(1, 10, 12).unwrap();
    /// assert_eq!("2001-10-12", date.to_string());
    /// assert!(CandidateDate::new(2001, 2, 29).is_none());
    /// ```
    pub fn new(year: i64, month: i64, day: i64) -> Option<Self> {
        Self::from_normalized(normalize_year(year), month, day)
    }

    fn from_normalized(year: i64, month: i64, day: i64) -> Option<Self> {
        if !validate_normalized(year, month, day) {
            return None;
        }
        Some(Self {
            year,
            month: u8::try_from(month).ok()?,
            day: u8::try_from(day).ok()?,
        })
    }

    /// The year, already normalized.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// The month, `1..=12`.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The day of the month, starting at 1.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Converts into a chrono [NaiveDate].
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::try_from(self.year).ok()?,
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl Display for CandidateDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CandidateDate {
    type Err = DateError;

    /// Parses a canonical `YYYY-MM-DD` date. The parts are taken as (year, month, day) as-is:
    /// no reordering and no two-digit-year normalization.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?;
        let (year, month, day) = (
            i64::from(date.year()),
            i64::from(date.month()),
            i64::from(date.day()),
        );
        Self::from_normalized(year, month, day).ok_or(DateError::OutOfRange { year, month, day })
    }
}

/// Every valid reading of a [RawTriple], kept in date order.
///
/// Readings that coincide (when the input repeats a number) are stored once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    dates: BTreeSet<CandidateDate>,
}

impl CandidateSet {
    /// Tries all 6 orderings of `raw` as (year, month, day) and keeps the valid ones.
    pub fn from_raw(raw: &RawTriple) -> Self {
        let dates = raw
            .variations()
            .into_iter()
            .filter_map(|[year, month, day]| {
                if !validate_date(year, month, day) {
                    tracing::debug!(year, month, day, "rejected variation");
                    return None;
                }
                let candidate = CandidateDate::new(year, month, day);
                tracing::debug!(year, month, day, ?candidate, "accepted variation");
                candidate
            })
            .collect();

        Self { dates }
    }

    /// The earliest candidate, or `None` if no ordering was valid.
    pub fn earliest(&self) -> Option<CandidateDate> {
        self.dates.first().copied()
    }

    /// Number of distinct valid readings.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if no ordering was valid.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates the candidates from earliest to latest.
    pub fn iter(&self) -> btree_set::Iter<'_, CandidateDate> {
        self.dates.iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a CandidateDate;
    type IntoIter = btree_set::Iter<'a, CandidateDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns the smallest of `dates` under lexicographic (year, month, day) ordering, or `None` if
/// there are none.
///
/// This works on any ordered value, so plain `[year, month, day]` arrays can be compared without
/// being validated first.
///
/// ```
/// use date_resolver::earliest_date;
///
/// let dates = [[2001, 12, 21], [2050, 1, 12], [2001, 11, 31]];
/// assert_eq!(Some([2001, 11, 31]), earliest_date(dates));
/// ```
pub fn earliest_date<T, I>(dates: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    dates.into_iter().min()
}

/// Returns the earliest valid (year, month, day) reading of the three numbers, in any order.
///
/// ```
/// use date_resolver::resolve;
///
/// assert_eq!("2000-01-31", resolve(31, 0, 1).unwrap().to_string());
/// assert!(resolve(31, 31, 31).is_none());
/// ```
pub fn resolve(first: i64, second: i64, third: i64) -> Option<CandidateDate> {
    let resolved = CandidateSet::from_raw(&RawTriple::new(first, second, third)).earliest();
    tracing::debug!(first, second, third, ?resolved, "resolved");
    resolved
}

/// Outcome of resolving well-formed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// At least one ordering was valid; holds the earliest.
    Resolved(CandidateDate),
    /// No ordering was valid; holds the input text, trimmed.
    Illegal {
        /// The input as given, without surrounding whitespace.
        raw: String,
    },
}

impl Resolution {
    /// Returns the resolved date, if any.
    pub fn date(&self) -> Option<CandidateDate> {
        match self {
            Resolution::Resolved(date) => Some(*date),
            Resolution::Illegal { .. } => None,
        }
    }
}

impl Display for Resolution {
    /// Either `YYYY-MM-DD`, or `<input> is illegal`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Resolved(date) => write!(f, "{date}"),
            Resolution::Illegal { raw } => write!(f, "{raw} is illegal"),
        }
    }
}

/// Parses `A/B/C` text and resolves it.
///
/// # Errors
///
/// - If the text is not three `/`-separated integers, returns an [InputError].
pub fn resolve_str(input: &str) -> Result<Resolution, InputError> {
    let raw: RawTriple = input.parse()?;
    let [first, second, third] = raw.values();

    Ok(match resolve(first, second, third) {
        Some(date) => Resolution::Resolved(date),
        None => Resolution::Illegal {
            raw: input.trim().to_owned(),
        },
    })
}

/// Resolves `A/B/C` text into the line to show a user: `YYYY-MM-DD` or `<input> is illegal`.
///
/// Malformed input is logged as a warning and yields `None`.
///
/// ```
/// use date_resolver::date;
///
/// assert_eq!(Some("2001-10-12".to_string()), date("12/10/01"));
/// assert_eq!(Some("31/31/31 is illegal".to_string()), date("31/31/31"));
/// assert_eq!(None, date("a/31/31"));
/// ```
pub fn date(input: &str) -> Option<String> {
    match resolve_str(input) {
        Ok(resolution) => Some(resolution.to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "Wrong input data");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("31/0/1", "2000-01-31")]
    #[case("12/10/01", "2001-10-12")]
    #[case("31/31/31", "31/31/31 is illegal")]
    #[case("1/2/3", "2001-02-03")]
    #[case("2024/2/29", "2024-02-29")]
    #[case("2023/2/29", "2023/2/29 is illegal")]
    #[case("29/2/2023", "29/2/2023 is illegal")]
    #[case("2999/12/31", "2999-12-31")]
    #[case("3000/1/1", "3000/1/1 is illegal")]
    #[case("30/1/1", "2001-01-30")]
    #[case("12/10/01\n", "2001-10-12")]
    #[case(" 31 / 31 / 31 \n", "31 / 31 / 31 is illegal")]
    #[case("+5/-1/12", "1999-05-12")]
    #[case("99999999999999999999/1/1", "99999999999999999999/1/1 is illegal")]
    #[case("1/-99999999999999999999/12", "1/-99999999999999999999/12 is illegal")]
    fn test_date(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Some(expected.to_string()), date(input));
    }

    #[rstest]
    #[case("a/31/31")]
    #[case("31/31")]
    #[case("1/2/3/4")]
    #[case("")]
    #[case("1.5/2/3")]
    fn test_date_malformed(#[case] input: &str) {
        assert_eq!(None, date(input));
    }

    #[test]
    fn test_raw_triple_errors() {
        assert_eq!(
            Err(InputError::NotAnInteger {
                token: "a".to_string()
            }),
            "a/31/31".parse::<RawTriple>()
        );
        assert_eq!(
            Err(InputError::WrongTokenCount { found: 2 }),
            "31/31".parse::<RawTriple>()
        );
        assert_eq!(
            Err(InputError::WrongTokenCount { found: 4 }),
            "1/2/3/4".parse::<RawTriple>()
        );
    }

    #[test]
    fn test_raw_triple_saturates_overflow() {
        let raw: RawTriple = "99999999999999999999/-99999999999999999999/7"
            .parse()
            .unwrap();
        assert_eq!([i64::MAX, i64::MIN, 7], raw.values());
        assert!(CandidateSet::from_raw(&raw).is_empty());
    }

    #[test]
    fn test_raw_triple_keeps_input_order() {
        let raw: RawTriple = "31/0/1".parse().unwrap();
        assert_eq!([31, 0, 1], raw.values());
        assert_eq!([31, 0, 1], raw.variations()[0]);
    }

    #[test]
    fn test_earliest_date_unvalidated() {
        let dates = vec![[2001, 12, 21], [2050, 1, 12], [2001, 11, 31]];
        assert_eq!(Some([2001, 11, 31]), earliest_date(dates));
    }

    #[test]
    fn test_earliest_date_empty() {
        assert_eq!(None, earliest_date(Vec::<[i64; 3]>::new()));
    }

    #[test]
    fn test_earliest_date_is_lexicographic() {
        // month is compared before day, and as a number
        let dates = [
            CandidateDate::new(2001, 12, 1).unwrap(),
            CandidateDate::new(2001, 2, 28).unwrap(),
            CandidateDate::new(2001, 10, 5).unwrap(),
        ];
        assert_eq!(Some(dates[1]), earliest_date(dates));
    }

    #[test]
    fn test_candidate_set_all_readings() {
        let set = CandidateSet::from_raw(&RawTriple::new(12, 10, 1));
        let dates: Vec<String> = set.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            vec![
                "2001-10-12",
                "2001-12-10",
                "2010-01-12",
                "2010-12-01",
                "2012-01-10",
                "2012-10-01",
            ],
            dates
        );
        assert_eq!(earliest_date(&set).copied(), set.earliest());
    }

    #[test]
    fn test_candidate_set_collapses_duplicates() {
        let set = CandidateSet::from_raw(&RawTriple::new(5, 5, 5));
        assert_eq!(1, set.len());
        assert_eq!("2005-05-05", set.earliest().unwrap().to_string());
    }

    #[test]
    fn test_candidate_set_empty() {
        let set = CandidateSet::from_raw(&RawTriple::new(31, 31, 31));
        assert!(set.is_empty());
        assert_eq!(None, set.earliest());
    }

    #[test]
    fn test_candidate_year_is_normalized() {
        let date = CandidateDate::new(0, 1, 31).unwrap();
        assert_eq!(2000, date.year());
        assert_eq!(1, date.month());
        assert_eq!(31, date.day());
        assert_eq!("2000-01-31", date.to_string());
    }

    #[test]
    fn test_candidate_zero_pads_year() {
        let date = CandidateDate::new(100, 3, 4).unwrap();
        assert_eq!("0100-03-04", date.to_string());
    }

    #[rstest]
    #[case("31/0/1")]
    #[case("12/10/01")]
    #[case("1/2/3")]
    #[case("2024/2/29")]
    #[case("100/1/1")]
    fn test_canonical_form_is_idempotent(#[case] input: &str) {
        let resolved = resolve_str(input).unwrap().date().unwrap();
        let reparsed: CandidateDate = resolved.to_string().parse().unwrap();
        assert_eq!(resolved, reparsed);
        assert_eq!(resolved.to_string(), reparsed.to_string());
    }

    #[test]
    fn test_candidate_from_str_errors() {
        assert!(matches!(
            "2021-02-30".parse::<CandidateDate>(),
            Err(DateError::Unparseable(_))
        ));
        assert_eq!(
            Err(DateError::OutOfRange {
                year: 3000,
                month: 1,
                day: 1
            }),
            "3000-01-01".parse::<CandidateDate>()
        );
    }

    #[test]
    fn test_to_naive_date() {
        let date = resolve(12, 10, 1).unwrap();
        assert_eq!(NaiveDate::from_ymd_opt(2001, 10, 12), date.to_naive_date());
    }

    #[test]
    fn test_resolution_display() {
        let illegal = resolve_str("31/31/31").unwrap();
        assert_eq!(None, illegal.date());
        assert_eq!("31/31/31 is illegal", illegal.to_string());

        let resolved = resolve_str("31/0/1").unwrap();
        assert_eq!(CandidateDate::new(2000, 1, 31), resolved.date());
    }
}
