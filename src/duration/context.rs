//! Context-sensitive duration validation.
//!
//! A numerically well-formed duration can still be disallowed for the purpose
//! it is used for: a request timeout longer than an hour or an audit interval
//! shorter than one are policy errors, distinct from parse errors.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::HOUR;

/// The functional purpose a duration is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DurationContext {
    /// Cache TTLs: -1 (forever) and 0 (disabled) are both meaningful.
    Cache,
    /// Request timeouts: must be positive and at most one hour.
    Timeout,
    /// Audit intervals: at least one hour.
    Audit,
    /// Anything else: any canonical value is acceptable.
    #[default]
    General,
}

impl DurationContext {
    pub fn as_str(self) -> &'static str {
        match self {
            DurationContext::Cache => "cache",
            DurationContext::Timeout => "timeout",
            DurationContext::Audit => "audit",
            DurationContext::General => "general",
        }
    }
}

impl fmt::Display for DurationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationContext {
    type Err = Infallible;

    /// Unrecognized context names fall back to `General`.
    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s.trim().to_lowercase().as_str() {
            "cache" => DurationContext::Cache,
            "timeout" => DurationContext::Timeout,
            "audit" => DurationContext::Audit,
            _ => DurationContext::General,
        })
    }
}

/// Whether a duration is acceptable for a given context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextValidation {
    pub valid: bool,
    pub error: Option<String>,
}

impl ContextValidation {
    fn ok() -> Self {
        ContextValidation { valid: true, error: None }
    }

    fn fail(message: impl Into<String>) -> Self {
        ContextValidation { valid: false, error: Some(message.into()) }
    }
}

/// Check canonical seconds against the bounds of a usage context.
pub fn validate_for_context(seconds: i64, context: DurationContext) -> ContextValidation {
    match context {
        DurationContext::Cache => {
            if seconds >= -1 {
                ContextValidation::ok()
            } else {
                ContextValidation::fail("cache duration must be -1 (forever), 0 (disabled), or positive seconds")
            }
        }
        DurationContext::Timeout => {
            if seconds > 0 && seconds <= HOUR {
                ContextValidation::ok()
            } else {
                ContextValidation::fail("timeout must be between 1 second and 1 hour (3600 seconds)")
            }
        }
        DurationContext::Audit => {
            if seconds >= HOUR {
                ContextValidation::ok()
            } else {
                ContextValidation::fail("audit interval must be at least 1 hour (3600 seconds)")
            }
        }
        DurationContext::General => {
            if seconds >= -1 {
                ContextValidation::ok()
            } else {
                ContextValidation::fail("duration must be -1 (forever), 0 (disabled), or positive seconds")
            }
        }
    }
}

/// Canned example inputs for a context, suitable for error messages and UI
/// placeholder text.
pub fn duration_examples(context: DurationContext) -> &'static [&'static str] {
    match context {
        DurationContext::Cache => &["forever", "never", "1 hour", "2 weeks", "86400"],
        DurationContext::Timeout => &["30 seconds", "5 minutes", "half an hour", "1 hour"],
        DurationContext::Audit => &["1 hour", "daily", "weekly", "monthly"],
        DurationContext::General => &["90", "1 hour 30 minutes", "2 weeks", "forever"],
    }
}
