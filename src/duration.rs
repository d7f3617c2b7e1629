//! Duration parsing and formatting engine.
//!
//! Bidirectional conversion between free-form human duration expressions and
//! canonical integer seconds, plus context-sensitive validity checking.
//!
//! Canonical representation: an `i64` number of seconds with two reserved
//! sentinels, `-1` ("forever") and `0` ("disabled"). Every other legal value
//! is `>= 1`.
//!
//! Parsing an input string is a pipeline:
//!
//! ```text
//! input ── normalize (trim + lowercase)
//!            │
//!            ├─ keyword table          ("forever", "daily", ...)    keywords.rs
//!            ├─ whole-input numeric    ("90", "-1")
//!            │
//!            └─ strategy chain                                      strategies.rs
//!                 1. number-word substitution ("two" -> "2")
//!                 2. interval parser (ISO-8601 -> compound scan -> chrono-english)
//!                 3. idiom normalization ("half an" -> "0.5") + retry 2
//!                 4. regex term extraction (lenient, sums every <n> <unit>)
//! ```
//!
//! Strategies are an ordered list of `Result`-returning functions; the first
//! success wins. Parsing is a pure function of the normalized input, with no
//! hidden state or time dependency.

#[path = "duration/context.rs"]
mod context;
#[path = "duration/format.rs"]
mod format;
#[path = "duration/keywords.rs"]
mod keywords;
#[path = "duration/strategies.rs"]
mod strategies;

#[cfg(test)]
#[path = "duration/tests.rs"]
mod tests;

pub use context::{ContextValidation, DurationContext, duration_examples, validate_for_context};
pub use format::{format_duration, format_duration_basic};

use thiserror::Error;

// Fixed unit multipliers. Month is a 30-day approximation, year a 365-day one.
pub(crate) const MINUTE: i64 = 60;
pub(crate) const HOUR: i64 = 3_600;
pub(crate) const DAY: i64 = 86_400;
pub(crate) const WEEK: i64 = 604_800;
pub(crate) const MONTH: i64 = 2_592_000;
pub(crate) const YEAR: i64 = 31_536_000;

/// Why a duration string failed to parse.
///
/// These degrade to a structured error string on the public surface
/// ([`crate::parse_duration`]); nothing in this module panics on bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("duration cannot be empty")]
    Empty,

    #[error("numeric durations must be -1 (forever), 0 (disabled), or a positive number of seconds; got {0}")]
    OutOfRange(i64),

    #[error("unknown time unit \"{0}\"")]
    UnknownUnit(String),

    #[error(
        "could not parse \"{0}\" as a duration; accepted formats include \"90\", \"5 minutes\", \
         \"2 weeks\", \"1 hour 30 minutes\", \"PT1H30M\", \"daily\", and \"forever\""
    )]
    Unparseable(String),
}

/// Parse a duration expression into canonical seconds.
///
/// This is the internal, `Result`-typed core behind [`crate::parse_duration`].
pub(crate) fn parse_seconds(input: &str) -> Result<i64, ParseError> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(seconds) = keywords::keyword_seconds(&normalized) {
        return Ok(seconds);
    }

    // Bare numbers are seconds; no unit is applied. Fractions truncate.
    if regex!(r"^-?\d+(?:\.\d+)?$").is_match(&normalized) {
        let value = normalized.parse::<f64>().map_err(|_| ParseError::Unparseable(normalized.clone()))? as i64;
        if value < -1 {
            return Err(ParseError::OutOfRange(value));
        }
        return Ok(value);
    }

    strategies::run(&normalized)
}
