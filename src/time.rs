use chrono::{NaiveTime, Timelike};
use crate::constants::{LAYOVER_PLACEHOLDER, MINUTES_PER_DAY};

/// Parse a wall-clock time in `HH:MM` format (`HH:MM:SS` is also accepted)
///
/// # Errors
///
/// Returns an error if the string is empty or is not a valid time of day.
pub fn parse_time_hm(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
}

/// Minutes since midnight for an `HH:MM` string, `None` if it cannot be parsed
#[must_use]
pub fn minutes_since_midnight(s: &str) -> Option<i64> {
    let time = parse_time_hm(s).ok()?;
    Some(i64::from(time.hour()) * 60 + i64::from(time.minute()))
}

/// Format a minute count as `"45min"`, `"2h"` or `"2h 30min"`
#[must_use]
pub fn format_duration_minutes(total_minutes: i64) -> String {
    let hours = total_minutes / 60;
    let mins = total_minutes % 60;

    if hours == 0 {
        format!("{mins}min")
    } else if mins == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {mins}min")
    }
}

/// Layover between one leg's arrival and the next leg's departure
///
/// Legs carry no date of their own, so a departure earlier than the arrival
/// means the connection leaves the following day. Returns an empty string when
/// either time is missing or unparseable.
#[must_use]
pub fn calculate_layover(arrival: &str, next_departure: &str) -> String {
    let (Some(arrival_minutes), Some(departure_minutes)) =
        (minutes_since_midnight(arrival), minutes_since_midnight(next_departure))
    else {
        return String::new();
    };

    let mut diff = departure_minutes - arrival_minutes;
    if diff < 0 {
        diff += MINUTES_PER_DAY;
    }

    format_duration_minutes(diff)
}

/// Layover text for display, falling back to a neutral placeholder
#[must_use]
pub fn layover_or_placeholder(arrival: &str, next_departure: &str) -> String {
    let layover = calculate_layover(arrival, next_departure);
    if layover.is_empty() {
        LAYOVER_PLACEHOLDER.to_string()
    } else {
        layover
    }
}
