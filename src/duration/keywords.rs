//! Keyword, number-word and idiom tables.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::{DAY, MONTH, WEEK};

/// Exact-match special keywords. Inputs are pre-normalized (trimmed,
/// lowercased) before lookup.
static KEYWORD_SECONDS: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    HashMap::from([
        ("forever", -1),
        ("never expire", -1),
        ("permanent", -1),
        ("perpetual", -1),
        ("never", 0),
        ("disabled", 0),
        ("no cache", 0),
        ("no caching", 0),
        ("off", 0),
        ("daily", DAY),
        ("weekly", WEEK),
        ("monthly", MONTH),
    ])
});

/// English number words and their digit replacements, largest first so the
/// table reads naturally; word-boundary regexes keep "seven" out of
/// "seventeen".
static NUMBER_WORDS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    let words: &[(&str, &str)] = &[
        ("billion", "1000000000"),
        ("million", "1000000"),
        ("thousand", "1000"),
        ("hundred", "100"),
        ("ninety", "90"),
        ("eighty", "80"),
        ("seventy", "70"),
        ("sixty", "60"),
        ("fifty", "50"),
        ("forty", "40"),
        ("thirty", "30"),
        ("twenty", "20"),
        ("nineteen", "19"),
        ("eighteen", "18"),
        ("seventeen", "17"),
        ("sixteen", "16"),
        ("fifteen", "15"),
        ("fourteen", "14"),
        ("thirteen", "13"),
        ("twelve", "12"),
        ("eleven", "11"),
        ("ten", "10"),
        ("nine", "9"),
        ("eight", "8"),
        ("seven", "7"),
        ("six", "6"),
        ("five", "5"),
        ("four", "4"),
        ("three", "3"),
        ("two", "2"),
        ("one", "1"),
    ];
    words.iter().map(|(word, digits)| (Regex::new(&format!(r"\b{word}\b")).unwrap(), *digits)).collect()
});

/// Idiom rewrites applied before retrying the interval parser. Order matters:
/// "and a half" must run before the bare "a" rewrite eats its article.
static IDIOMS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    let rewrites: &[(&str, &str)] = &[
        (r"\s+and\s+a\s+half\b", ".5"),
        (r"\bhalf\s+an?\s+", "0.5 "),
        (r"\ban?\b", "1"),
        (r"\b(?:every|each)\b", "1"),
    ];
    rewrites.iter().map(|(pat, rep)| (Regex::new(pat).unwrap(), *rep)).collect()
});

/// Look up an exact-match keyword ("forever", "daily", ...).
pub(super) fn keyword_seconds(normalized: &str) -> Option<i64> {
    KEYWORD_SECONDS.get(normalized).copied()
}

/// Replace English number words with digits, first occurrence per word only
/// to avoid double substitution.
pub(super) fn substitute_number_words(input: &str) -> String {
    let mut out = input.to_string();
    for (re, digits) in NUMBER_WORDS.iter() {
        if let std::borrow::Cow::Owned(replaced) = re.replace(&out, *digits) {
            out = replaced;
        }
    }
    out
}

/// Rewrite duration idioms into numeric form ("half an hour" -> "0.5 hour").
pub(super) fn normalize_idioms(input: &str) -> String {
    let mut out = input.to_string();
    for (re, rep) in IDIOMS.iter() {
        if let std::borrow::Cow::Owned(replaced) = re.replace_all(&out, *rep) {
            out = replaced;
        }
    }
    out
}
