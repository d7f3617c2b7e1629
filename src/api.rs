//! Public API surface.
//!
//! Two call surfaces: the duration functions here, and
//! [`PresetResolver`](crate::resolver::PresetResolver) for preset resolution.

use crate::duration;

/// Result of parsing one duration expression.
///
/// Exactly one of `value` / `error` is authoritative: when `error` is set,
/// `value` is a placeholder zero and must not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDuration {
    /// Canonical seconds; -1 means "forever", 0 means "disabled".
    pub value: i64,
    /// Why parsing failed, if it did.
    pub error: Option<String>,
    /// The original input, for diagnostics.
    pub parsed_from: String,
}

impl ParsedDuration {
    /// True when `value` is meaningful.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Parse a free-form duration expression into canonical seconds.
///
/// Accepts special keywords ("forever", "daily"), bare numbers (seconds),
/// compound expressions ("1 hour 30 minutes"), ISO-8601 ("PT1H30M") and a
/// range of natural-language phrasings ("half an hour", "two weeks").
/// Never panics on bad input; failures come back as a structured error.
///
/// # Example
/// ```
/// let parsed = presetta::parse_duration("2 weeks");
/// assert_eq!(parsed.value, 1_209_600);
///
/// let bad = presetta::parse_duration("soonish");
/// assert!(bad.error.is_some());
/// ```
pub fn parse_duration(input: &str) -> ParsedDuration {
    match duration::parse_seconds(input) {
        Ok(value) => ParsedDuration { value, error: None, parsed_from: input.to_string() },
        Err(err) => ParsedDuration { value: 0, error: Some(err.to_string()), parsed_from: input.to_string() },
    }
}
