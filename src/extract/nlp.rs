//! Natural-language date/time parsing
//!
//! Resolves a single "best" date/time out of a sentence. A fixed priority
//! list of (pattern, handler) pairs is tried in order; only the first match
//! of each pattern is considered, and the first candidate strictly in the
//! future wins. Candidates in the past are discarded and parsing moves on,
//! so "yesterday's" phrasing never produces a stale timestamp.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::time::build_time;

type Handler = fn(&Captures, NaiveDateTime) -> Option<NaiveDateTime>;

// Priority order is load-bearing: first future-dated result wins.
static NLP_PATTERNS: Lazy<Vec<(Regex, Handler)>> = Lazy::new(|| {
    vec![
        // Absolute times with day anchors
        (
            Regex::new(r"(?i)\b(tomorrow|today)\s+(?:at\s+)?(\d{1,2}):?(\d{2})?\s*(am|pm)\b")
                .unwrap(),
            parse_day_anchor as Handler,
        ),
        // Days of the week; the time qualifier is optional here
        (
            Regex::new(
                r"(?i)\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b(?:\s+(?:at\s+)?(\d{1,2}):?(\d{2})?\s*(am|pm)?)?",
            )
            .unwrap(),
            parse_weekday as Handler,
        ),
        // Relative times
        (
            Regex::new(r"(?i)\bin\s+(\d+)\s+(minutes?|hours?|days?)\b").unwrap(),
            parse_relative_offset as Handler,
        ),
        // Next week/month
        (
            Regex::new(r"(?i)\bnext\s+(week|month)\b").unwrap(),
            parse_next_period as Handler,
        ),
        // Date formats (M/D, M/D/YYYY), trailing hour required
        (
            Regex::new(
                r"(?i)\b(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?\s+(?:at\s+)?(\d{1,2}):?(\d{2})?\s*(am|pm)?\b",
            )
            .unwrap(),
            parse_calendar_date as Handler,
        ),
        // Time only (today if still ahead, tomorrow once past)
        (
            Regex::new(r"(?i)\b(?:at\s+)?(\d{1,2}):(\d{2})\s*(am|pm)\b").unwrap(),
            parse_clock_only as Handler,
        ),
    ]
});

/// Resolve the best single date/time mentioned in `text`, relative to `now`.
///
/// Returns `None` when no pattern yields a strictly future timestamp.
pub fn parse_nlp_datetime(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    for (pattern, handler) in NLP_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Some(candidate) = handler(&caps, now) {
                if candidate > now {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

fn capture_u32(caps: &Captures, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn capture_time(caps: &Captures, hour_group: usize) -> Option<NaiveTime> {
    let hour = capture_u32(caps, hour_group)?;
    let minute = match caps.get(hour_group + 1) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    build_time(hour, minute, caps.get(hour_group + 2).map(|m| m.as_str()))
}

/// "tomorrow at 3pm", "today 9:15 am"
fn parse_day_anchor(caps: &Captures, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let date = if caps.get(1)?.as_str().eq_ignore_ascii_case("tomorrow") {
        now.date() + Duration::days(1)
    } else {
        now.date()
    };
    Some(date.and_time(capture_time(caps, 2)?))
}

/// "friday", "monday at 2pm" — always the upcoming occurrence, 09:00 default
fn parse_weekday(caps: &Captures, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let target_day = match caps.get(1)?.as_str().to_lowercase().as_str() {
        "sunday" => 0,
        "monday" => 1,
        "tuesday" => 2,
        "wednesday" => 3,
        "thursday" => 4,
        "friday" => 5,
        "saturday" => 6,
        _ => return None,
    };
    let current_day = now.date().weekday().num_days_from_sunday();
    let mut days_ahead = (target_day + 7 - current_day) % 7;
    if days_ahead == 0 {
        days_ahead = 7;
    }
    let date = now.date() + Duration::days(days_ahead as i64);
    let time = match caps.get(2) {
        Some(_) => capture_time(caps, 2)?,
        None => NaiveTime::from_hms_opt(9, 0, 0)?,
    };
    Some(date.and_time(time))
}

/// "in 45 minutes", "in 3 days"
fn parse_relative_offset(caps: &Captures, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let amount = capture_u32(caps, 1)? as i64;
    let unit = caps.get(2)?.as_str().to_lowercase();
    let target = if unit.starts_with("minute") {
        now + Duration::minutes(amount)
    } else if unit.starts_with("hour") {
        now + Duration::hours(amount)
    } else if unit.starts_with("day") {
        now + Duration::days(amount)
    } else {
        return None;
    };
    Some(target)
}

/// "next week" is seven days out at 09:00; "next month" is the 1st of the
/// following calendar month at 09:00.
fn parse_next_period(caps: &Captures, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let nine = NaiveTime::from_hms_opt(9, 0, 0)?;
    match caps.get(1)?.as_str().to_lowercase().as_str() {
        "week" => Some((now.date() + Duration::days(7)).and_time(nine)),
        "month" => {
            let (year, month) = if now.date().month() == 12 {
                (now.date().year() + 1, 1)
            } else {
                (now.date().year(), now.date().month() + 1)
            };
            Some(NaiveDate::from_ymd_opt(year, month, 1)?.and_time(nine))
        }
        _ => None,
    }
}

/// "1/15 at 3pm", "12/25/24 9am" — 2-digit years expand below/above 50
fn parse_calendar_date(caps: &Captures, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let month = capture_u32(caps, 1)?;
    let day = capture_u32(caps, 2)?;
    let year = match capture_u32(caps, 3) {
        Some(y) if y < 50 => 2000 + y as i32,
        Some(y) if y < 100 => 1900 + y as i32,
        Some(y) => y as i32,
        None => now.date().year(),
    };
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.and_time(capture_time(caps, 4)?))
}

/// "4:30 pm" with no date qualifier: today, else tomorrow once past
fn parse_clock_only(caps: &Captures, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let hour = capture_u32(caps, 1)?;
    let minute = capture_u32(caps, 2)?;
    let time = build_time(hour, minute, caps.get(3).map(|m| m.as_str()))?;
    let mut target = now.date().and_time(time);
    if target <= now {
        target += Duration::days(1);
    }
    Some(target)
}
