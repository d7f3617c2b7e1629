//! Seconds to human-readable duration strings.

use super::{DAY, HOUR, MINUTE, MONTH, YEAR};

/// Format canonical seconds as a human-readable duration.
///
/// Sentinels first (-1 forever, 0 disabled, < -1 invalid), then exact seconds
/// below two minutes, rounded minutes below two hours, and a decomposed
/// years/months/days/hours rendering above that. Durations of a year or more
/// are prefixed "about " since month and year lengths are fixed
/// approximations.
pub fn format_duration(seconds: i64, abbreviated: bool) -> String {
    match seconds {
        -1 => return if abbreviated { "forever".into() } else { "forever (never expires)".into() },
        0 => return if abbreviated { "disabled".into() } else { "disabled (no caching)".into() },
        s if s < -1 => return if abbreviated { "invalid".into() } else { "invalid duration".into() },
        _ => {}
    }

    if seconds < 2 * MINUTE {
        return if abbreviated { format!("{seconds}s") } else { plural(seconds, "second") };
    }

    if seconds < 2 * HOUR {
        let minutes = (seconds as f64 / MINUTE as f64).round() as i64;
        return if abbreviated { format!("{minutes}m") } else { plural(minutes, "minute") };
    }

    if abbreviated { abbreviate_large(seconds) } else { decompose_large(seconds) }
}

/// Basic formatter used as a degrade path when the richer decomposition is
/// unavailable. Fixed bucket boundaries: minutes below 2 hours, hours below
/// 2 days, days below 60 days, months below a year, years beyond.
pub fn format_duration_basic(seconds: i64) -> String {
    match seconds {
        -1 => return "forever (never expires)".into(),
        0 => return "disabled (no caching)".into(),
        s if s < -1 => return "invalid duration".into(),
        _ => {}
    }

    if seconds < 2 * HOUR {
        let minutes = (seconds as f64 / MINUTE as f64).round() as i64;
        plural(minutes, "minute")
    } else if seconds < 2 * DAY {
        // One decimal, trimmed to an integer when whole.
        let hours = (seconds as f64 / HOUR as f64 * 10.0).round() / 10.0;
        if hours.fract() == 0.0 { plural(hours as i64, "hour") } else { format!("{hours:.1} hours") }
    } else if seconds < 60 * DAY {
        let days = (seconds as f64 / DAY as f64).round() as i64;
        plural(days, "day")
    } else if seconds < YEAR {
        let months = (seconds as f64 / MONTH as f64).round() as i64;
        format!("about {}", plural(months, "month"))
    } else {
        let years = (seconds as f64 / YEAR as f64).round() as i64;
        format!("about {}", plural(years, "year"))
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 { format!("1 {unit}") } else { format!("{count} {unit}s") }
}

/// Verbose rendering for two hours and up: largest nonzero unit plus, when
/// present, the next one down.
fn decompose_large(seconds: i64) -> String {
    let years = seconds / YEAR;
    let mut rem = seconds % YEAR;
    let months = rem / MONTH;
    rem %= MONTH;
    let days = rem / DAY;
    rem %= DAY;
    let hours = rem / HOUR;

    let components = [(years, "year"), (months, "month"), (days, "day"), (hours, "hour")];

    let mut parts = Vec::new();
    for (idx, (count, unit)) in components.iter().enumerate() {
        if *count > 0 {
            parts.push(plural(*count, unit));
            if let Some((next, next_unit)) = components.get(idx + 1) {
                if *next > 0 {
                    parts.push(plural(*next, next_unit));
                }
            }
            break;
        }
    }

    // seconds >= 7200 guarantees at least two hours when all larger units
    // are zero, so parts is never empty.
    let joined = parts.join(" ");
    if years >= 1 { format!("about {joined}") } else { joined }
}

/// Abbreviated rendering for two hours and up: a single dominant unit.
fn abbreviate_large(seconds: i64) -> String {
    if seconds >= YEAR {
        format!("{:.1}y", seconds as f64 / YEAR as f64)
    } else if seconds >= MONTH {
        format!("{:.1}mo", seconds as f64 / MONTH as f64)
    } else if seconds >= DAY {
        format!("{}d", (seconds as f64 / DAY as f64).round() as i64)
    } else {
        format!("{:.1}h", seconds as f64 / HOUR as f64)
    }
}
