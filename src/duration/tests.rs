use super::*;

#[test]
fn parse_examples_matching() {
    // Array of (expected_seconds, input_string)
    let cases: Vec<(i64, &str)> = vec![
        // Sentinels and special keywords
        (-1, "forever"),
        (-1, "FOREVER"),
        (-1, "  never expire  "),
        (-1, "permanent"),
        (-1, "perpetual"),
        (0, "never"),
        (0, "disabled"),
        (0, "no cache"),
        (0, "no caching"),
        (0, "off"),
        (86_400, "daily"),
        (604_800, "weekly"),
        (2_592_000, "monthly"),
        // Bare numbers are seconds
        (0, "0"),
        (-1, "-1"),
        (90, "90"),
        (3600, " 3600 "),
        (1, "1.5"),
        // Compound expressions
        (1_209_600, "2 weeks"),
        (5400, "1 hour 30 minutes"),
        (5400, "1 hour, 30 minutes"),
        (777_600, "1 week and 2 days"),
        (3600, "1h"),
        (90, "90s"),
        (5400, "90 min"),
        (5400, "1.5 hours"),
        (31_536_000, "1 year"),
        (2_592_000, "1 month"),
        // ISO-8601
        (5400, "PT1H30M"),
        (5400, "pt1h30m"),
        (1_209_600, "P2W"),
        (2_592_000, "P1M"),
        (60, "PT1M"),
        (93_784, "P1DT2H3M4S"),
        // Number words
        (7200, "two hours"),
        (1_209_600, "two weeks"),
        (5400, "one hour thirty minutes"),
        (72_000, "twenty hours"),
        // Idioms
        (3600, "an hour"),
        (86_400, "a day"),
        (1800, "half an hour"),
        (43_200, "half a day"),
        (9000, "two and a half hours"),
        (86_400, "every day"),
        (604_800, "each week"),
    ];

    for (expected, input) in cases {
        let result = parse_seconds(input);
        assert_eq!(result, Ok(expected), "input {input:?} -> {result:?}, expected {expected}");
    }
}

#[test]
fn parse_errors() {
    assert_eq!(parse_seconds(""), Err(ParseError::Empty));
    assert_eq!(parse_seconds("   "), Err(ParseError::Empty));
    assert_eq!(parse_seconds("-5"), Err(ParseError::OutOfRange(-5)));
    assert_eq!(parse_seconds("5 foobars"), Err(ParseError::UnknownUnit("foobars".into())));
    assert!(matches!(parse_seconds("gibberish"), Err(ParseError::Unparseable(_))));
}

#[test]
fn parsing_is_deterministic() {
    for input in ["2 weeks", "half an hour", "PT1H30M", "two and a half hours"] {
        let first = parse_seconds(input);
        for _ in 0..3 {
            assert_eq!(parse_seconds(input), first, "repeated parse of {input:?} diverged");
        }
    }
}

#[test]
fn format_sentinels_and_small_values() {
    assert_eq!(format_duration(-1, false), "forever (never expires)");
    assert_eq!(format_duration(-1, true), "forever");
    assert_eq!(format_duration(0, false), "disabled (no caching)");
    assert_eq!(format_duration(0, true), "disabled");
    assert_eq!(format_duration(-2, false), "invalid duration");
    assert_eq!(format_duration(-2, true), "invalid");

    assert_eq!(format_duration(1, false), "1 second");
    assert_eq!(format_duration(45, false), "45 seconds");
    assert_eq!(format_duration(119, false), "119 seconds");
    assert_eq!(format_duration(45, true), "45s");
}

#[test]
fn format_minutes_bucket() {
    assert_eq!(format_duration(120, false), "2 minutes");
    assert_eq!(format_duration(150, false), "3 minutes"); // rounds to nearest
    assert_eq!(format_duration(3600, false), "60 minutes");
    assert_eq!(format_duration(7199, false), "120 minutes");
    assert_eq!(format_duration(300, true), "5m");
}

#[test]
fn format_large_verbose() {
    assert_eq!(format_duration(7200, false), "2 hours");
    assert_eq!(format_duration(86_400, false), "1 day");
    assert_eq!(format_duration(90_000, false), "1 day 1 hour");
    assert_eq!(format_duration(2_592_000, false), "1 month");
    assert_eq!(format_duration(2_678_400, false), "1 month 1 day");
    assert_eq!(format_duration(31_536_000, false), "about 1 year");
    assert_eq!(format_duration(34_128_000, false), "about 1 year 1 month");
}

#[test]
fn format_large_abbreviated() {
    assert_eq!(format_duration(7200, true), "2.0h");
    assert_eq!(format_duration(86_400, true), "1d");
    assert_eq!(format_duration(2_592_000, true), "1.0mo");
    assert_eq!(format_duration(31_536_000, true), "1.0y");
    assert_eq!(format_duration(47_304_000, true), "1.5y");
}

#[test]
fn format_never_panics_and_never_empty() {
    let samples: Vec<i64> =
        vec![-1, 0, 1, 59, 60, 119, 120, 3599, 3600, 7199, 7200, 86_400, 604_800, 2_592_000, 31_536_000, i64::MAX / 2];
    for n in samples {
        for abbreviated in [false, true] {
            let out = format_duration(n, abbreviated);
            assert!(!out.is_empty(), "format_duration({n}, {abbreviated}) was empty");
        }
        assert!(!format_duration_basic(n).is_empty());
    }
}

#[test]
fn basic_formatter_bucket_boundaries() {
    assert_eq!(format_duration_basic(7199), "120 minutes");
    assert_eq!(format_duration_basic(7200), "2 hours");
    assert_eq!(format_duration_basic(9000), "2.5 hours");
    assert_eq!(format_duration_basic(172_799), "48 hours");
    assert_eq!(format_duration_basic(172_800), "2 days");
    assert_eq!(format_duration_basic(5_184_000), "about 2 months");
    assert_eq!(format_duration_basic(31_536_000), "about 1 year");
    assert_eq!(format_duration_basic(-1), "forever (never expires)");
    assert_eq!(format_duration_basic(0), "disabled (no caching)");
}

#[test]
fn context_bounds() {
    // Timeout: (0, 3600]
    assert!(validate_for_context(3600, DurationContext::Timeout).valid);
    assert!(!validate_for_context(3601, DurationContext::Timeout).valid);
    assert!(!validate_for_context(0, DurationContext::Timeout).valid);
    assert!(!validate_for_context(-1, DurationContext::Timeout).valid);

    // Audit: [3600, ...)
    assert!(validate_for_context(3600, DurationContext::Audit).valid);
    assert!(!validate_for_context(3599, DurationContext::Audit).valid);

    // Cache and general accept both sentinels
    assert!(validate_for_context(-1, DurationContext::Cache).valid);
    assert!(validate_for_context(0, DurationContext::Cache).valid);
    assert!(!validate_for_context(-2, DurationContext::Cache).valid);
    assert!(validate_for_context(-1, DurationContext::General).valid);

    let invalid = validate_for_context(7200, DurationContext::Timeout);
    assert!(invalid.error.is_some());
}

#[test]
fn context_from_str_defaults_to_general() {
    assert_eq!("cache".parse::<DurationContext>(), Ok(DurationContext::Cache));
    assert_eq!("TIMEOUT".parse::<DurationContext>(), Ok(DurationContext::Timeout));
    assert_eq!("audit".parse::<DurationContext>(), Ok(DurationContext::Audit));
    assert_eq!("whatever".parse::<DurationContext>(), Ok(DurationContext::General));
}

#[test]
fn examples_are_reparseable() {
    for context in [DurationContext::Cache, DurationContext::Timeout, DurationContext::Audit, DurationContext::General]
    {
        for example in duration_examples(context) {
            let parsed = parse_seconds(example);
            assert!(parsed.is_ok(), "example {example:?} for {context} did not parse: {parsed:?}");
        }
    }
}

#[test]
fn numeric_format_round_trips() {
    // Values whose formatted string is itself a plain integer re-parse to the
    // same seconds; verbose strings are not expected to round-trip.
    for n in [1_i64, 45, 90] {
        let formatted = format_duration(n, true); // e.g. "45s"
        let reparsed = parse_seconds(&formatted).unwrap();
        assert_eq!(reparsed, n);
    }
}
