//! # date-resolver
//!
//! Resolves an ambiguous numeric date like `12/10/01` into the earliest real calendar date it
//! could stand for.
//!
//! The three numbers carry no information about which one is the year, the month, or the day.
//! Every one of the 6 orderings is read as (year, month, day), the valid readings are kept, and
//! the earliest one wins.
//!
//! ## Examples
//!
//! ```
//! use date_resolver::prelude::*;
//!
//! // 2012-10-01, 2010-12-01, 2001-10-12, ... are all possible; 2001-10-12 is the earliest
//! assert_eq!(Some("2001-10-12".to_string()), date("12/10/01"));
//!
//! // no ordering makes a date
//! assert_eq!(Some("31/31/31 is illegal".to_string()), date("31/31/31"));
//!
//! // not three integers
//! assert_eq!(None, date("a/31/31"));
//! ```
//!
//! Or, break down the steps:
//!
//! ```
//! use date_resolver::prelude::*;
//!
//! let raw: RawTriple = "31/0/1".parse().unwrap();
//! let candidates = CandidateSet::from_raw(&raw);
//! assert_eq!(1, candidates.len());
//! assert_eq!("2000-01-31", candidates.earliest().unwrap().to_string());
//! ```
//!
//! ## Rules
//!
//! - **Year**: `0`–`2999`. A year below `100` is a two-digit year and is read as `2000 + year`,
//!   so `1` is `2001` and `0` is `2000`.
//! - **Month**: `1`–`12`.
//! - **Day**: `1` up to the length of the month, with Gregorian leap years for February.
//! - **Earliest**: candidates compare by year, then month, then day.
//!
//! ## Prelude
//!
//! ```
//! use date_resolver::prelude::*;
//! ```
#![warn(missing_docs)]

mod calendar;
mod error;
pub mod logging;
mod resolver;
mod variation;

pub use crate::calendar::{
    days_in_month, is_leap_year, normalize_year, validate_date, validate_day, validate_month,
    validate_year, MAX_YEAR, MIN_YEAR,
};
pub use crate::error::{DateError, InputError};
pub use crate::resolver::{
    date, earliest_date, resolve, resolve_str, CandidateDate, CandidateSet, RawTriple, Resolution,
    RAW_SEPARATOR,
};
pub use crate::variation::create_all_variations;

/// A convenience module appropriate for glob imports (`use date_resolver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::date;
    #[doc(no_inline)]
    pub use crate::resolve;
    #[doc(no_inline)]
    pub use crate::resolve_str;
    #[doc(no_inline)]
    pub use crate::CandidateDate;
    #[doc(no_inline)]
    pub use crate::CandidateSet;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::InputError;
    #[doc(no_inline)]
    pub use crate::RawTriple;
    #[doc(no_inline)]
    pub use crate::Resolution;
}
