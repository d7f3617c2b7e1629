//! Ordered natural-language parse strategies.
//!
//! Each strategy is a plain function from the (already number-word
//! substituted) input to `Result<i64, ParseError>`. The chain stops at the
//! first success; the last strategy's error is what the caller sees. This
//! replaces nested try/fallback chains with straightforward Result chaining.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::keywords;
use super::{DAY, HOUR, MINUTE, MONTH, ParseError, WEEK, YEAR};

type Strategy = fn(&str) -> Result<i64, ParseError>;

/// Strategies in trial order: strict interval grammar first, idiom-rewritten
/// retry second, lenient term extraction last.
const STRATEGIES: &[Strategy] = &[interval, idioms_then_interval, extract_terms];

pub(super) fn run(input: &str) -> Result<i64, ParseError> {
    let substituted = keywords::substitute_number_words(input);

    let mut last = ParseError::Unparseable(input.to_string());
    for strategy in STRATEGIES {
        match strategy(&substituted) {
            Ok(seconds) => return Ok(seconds),
            Err(err) => last = err,
        }
    }
    Err(last)
}

// --- Interval grammar --------------------------------------------------------

/// Unit spellings accepted by the strict compound scanner. Bare "m" means
/// minutes here; months need "mo".
static UNIT_SECONDS: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    HashMap::from([
        ("s", 1),
        ("sec", 1),
        ("secs", 1),
        ("second", 1),
        ("seconds", 1),
        ("m", MINUTE),
        ("min", MINUTE),
        ("mins", MINUTE),
        ("minute", MINUTE),
        ("minutes", MINUTE),
        ("h", HOUR),
        ("hr", HOUR),
        ("hrs", HOUR),
        ("hour", HOUR),
        ("hours", HOUR),
        ("d", DAY),
        ("day", DAY),
        ("days", DAY),
        ("w", WEEK),
        ("wk", WEEK),
        ("wks", WEEK),
        ("week", WEEK),
        ("weeks", WEEK),
        ("mo", MONTH),
        ("mos", MONTH),
        ("month", MONTH),
        ("months", MONTH),
        ("y", YEAR),
        ("yr", YEAR),
        ("yrs", YEAR),
        ("year", YEAR),
        ("years", YEAR),
    ])
});

/// The canonical unit set recognized by the lenient extraction fallback,
/// plural "s" optional.
fn canonical_unit_seconds(unit: &str) -> Option<i64> {
    let singular = unit.strip_suffix('s').unwrap_or(unit);
    match singular {
        "second" => Some(1),
        "minute" => Some(MINUTE),
        "hour" => Some(HOUR),
        "day" => Some(DAY),
        "week" => Some(WEEK),
        "month" => Some(MONTH),
        "year" => Some(YEAR),
        _ => None,
    }
}

/// Strict interval parse: ISO-8601, then a compound scan that must consume
/// the entire input, then the chrono-english delegate.
fn interval(input: &str) -> Result<i64, ParseError> {
    if let Some(seconds) = parse_iso8601(input) {
        return Ok(seconds);
    }
    if let Some(seconds) = parse_compound(input) {
        return Ok(seconds);
    }
    parse_english(input)
}

/// Rewrite idioms ("half an hour" -> "0.5 hour") and retry the interval parse.
fn idioms_then_interval(input: &str) -> Result<i64, ParseError> {
    interval(&keywords::normalize_idioms(input))
}

/// ISO-8601 duration, e.g. "PT1H30M" or "P2W". Input is already lowercased;
/// "m" before the time designator is months, after it minutes.
fn parse_iso8601(input: &str) -> Option<i64> {
    let re = regex!(
        r"^p(?:(\d+(?:\.\d+)?)y)?(?:(\d+(?:\.\d+)?)m)?(?:(\d+(?:\.\d+)?)w)?(?:(\d+(?:\.\d+)?)d)?(?:t(?:(\d+(?:\.\d+)?)h)?(?:(\d+(?:\.\d+)?)m)?(?:(\d+(?:\.\d+)?)s)?)?$"
    );
    let caps = re.captures(input)?;

    let multipliers = [YEAR, MONTH, WEEK, DAY, HOUR, MINUTE, 1];
    let mut total = 0f64;
    let mut components = 0;
    for (group, multiplier) in multipliers.iter().enumerate() {
        if let Some(m) = caps.get(group + 1) {
            let amount: f64 = m.as_str().parse().ok()?;
            total += amount * *multiplier as f64;
            components += 1;
        }
    }

    // "p" or "pt" alone is not a duration.
    if components == 0 { None } else { Some(total.round() as i64) }
}

/// Compound expression scan: one or more `<number> <unit>` terms separated by
/// whitespace, commas or "and", covering the entire input.
fn parse_compound(input: &str) -> Option<i64> {
    let term = regex!(r"^(\d+(?:\.\d+)?)\s*([a-z]+)");

    let mut rest = input.trim();
    let mut total = 0f64;
    let mut terms = 0;

    while !rest.is_empty() {
        let caps = term.captures(rest)?;
        let amount: f64 = caps[1].parse().ok()?;
        let multiplier = UNIT_SECONDS.get(&caps[2])?;
        total += amount * *multiplier as f64;
        terms += 1;
        rest = strip_separators(&rest[caps.get(0)?.end()..]);
    }

    if terms == 0 { None } else { Some(total.round() as i64) }
}

/// Skip whitespace, commas and standalone "and" between compound terms.
fn strip_separators(mut rest: &str) -> &str {
    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        match rest.strip_prefix("and") {
            Some(after) if after.is_empty() || after.starts_with(char::is_whitespace) => rest = after,
            _ => return rest,
        }
    }
}

/// Delegate to chrono-english for phrasings the strict grammar missed.
fn parse_english(input: &str) -> Result<i64, ParseError> {
    match chrono_english::parse_duration(input) {
        Ok(interval) => {
            let seconds = match interval {
                chrono_english::Interval::Seconds(s) => i64::from(s),
                chrono_english::Interval::Days(d) => i64::from(d) * DAY,
                chrono_english::Interval::Months(m) => i64::from(m) * MONTH,
            };
            if seconds < 0 {
                return Err(ParseError::Unparseable(input.to_string()));
            }
            Ok(seconds)
        }
        Err(_) => Err(ParseError::Unparseable(input.to_string())),
    }
}

// --- Lenient fallback ---------------------------------------------------------

/// Extract every `<number> <unit>` occurrence anywhere in the input and sum
/// them, rounding each term to the nearest second. A number attached to an
/// unrecognized unit is an error rather than a silent skip.
fn extract_terms(input: &str) -> Result<i64, ParseError> {
    let normalized = keywords::normalize_idioms(input);
    let mut total: i64 = 0;
    let mut matched = false;

    for caps in regex!(r"(\d+(?:\.\d+)?)\s*([a-z]+)").captures_iter(&normalized) {
        let amount: f64 = caps[1].parse().map_err(|_| ParseError::Unparseable(input.to_string()))?;
        let Some(multiplier) = canonical_unit_seconds(&caps[2]) else {
            return Err(ParseError::UnknownUnit(caps[2].to_string()));
        };
        total += (amount * multiplier as f64).round() as i64;
        matched = true;
    }

    if matched { Ok(total) } else { Err(ParseError::Unparseable(input.to_string())) }
}
