/// Errors raised while splitting raw `A/B/C` text into three integers.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The text did not split into exactly three tokens on `/`.
    #[error("Input should have exactly 3 `/`-separated numbers, found {found}")]
    WrongTokenCount {
        /// Number of tokens actually found.
        found: usize,
    },

    /// One of the tokens is not a base-10 integer.
    #[error("Token `{token}` should be a base-10 integer")]
    NotAnInteger {
        /// The offending token, trimmed.
        token: String,
    },
}

/// Errors raised when building a single, already-ordered date.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DateError {
    /// The text is not an ISO `YYYY-MM-DD` calendar date.
    #[error("{0}")]
    Unparseable(#[from] chrono::ParseError),

    /// The values form a real date, but not one in the supported year range.
    #[error("Year ({year}), month ({month}), and day ({day}) do not make a date in years 0-2999")]
    OutOfRange {
        /// Parsed year.
        year: i64,
        /// Parsed month.
        month: i64,
        /// Parsed day.
        day: i64,
    },
}
