//! Time-phrase extraction from free-form speech text
//!
//! Scans an utterance with a fixed, ordered set of patterns (absolute clock
//! times, relative offsets, today/tomorrow, weekday names, slash dates) and
//! resolves every match into a concrete timestamp. Extraction order is
//! pattern order, then left-to-right within a pattern; the same span may be
//! reported by more than one pattern.
//!
//! All resolution happens against an explicit `now` so results are
//! deterministic and testable.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single time/date candidate found in an utterance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeExtraction {
    /// The matched span, as it appeared in the input
    pub original_text: String,

    /// The resolved timestamp
    pub extracted_time: Option<NaiveDateTime>,

    /// Human label of the matched phrase ("tomorrow", "friday", "in 2 hours")
    pub time_string: String,

    /// True for relative-offset matches ("in N hours", "N days from now")
    pub is_relative: bool,
}

// Pattern order is load-bearing: the first extraction wins downstream.
static TIME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Absolute times
        r"(?i)\b(?:at\s+)?(\d{1,2}):(\d{2})\s*(am|pm)\b",
        r"(?i)\b(?:at\s+)?(\d{1,2})\s*(am|pm)\b",
        // Relative times
        r"(?i)\bin\s+(\d+)\s+(minutes?|hours?|days?)\b",
        r"(?i)\b(\d+)\s+(minutes?|hours?|days?)\s+from\s+now\b",
        // Tomorrow/today with time
        r"(?i)\b(tomorrow|today)\s+(?:at\s+)?(\d{1,2}):?(\d{2})?\s*(am|pm)?\b",
        r"(?i)\b(tomorrow|today)\s+(?:at\s+)?(\d{1,2})\s*(am|pm)\b",
        // Next week/month (no resolvable time component here; the NLP parser
        // owns this phrase)
        r"(?i)\bnext\s+(week|month)\b",
        // Specific days
        r"(?i)\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\s+(?:at\s+)?(\d{1,2}):?(\d{2})?\s*(am|pm)?\b",
        // Date formats
        r"(?i)\b(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?\s+(?:at\s+)?(\d{1,2}):?(\d{2})?\s*(am|pm)?\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static CLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2}):?(\d{2})?\s*(am|pm)").unwrap());

static OFFSET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s+(minutes?|hours?|days?)").unwrap());

static DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"monday|tuesday|wednesday|thursday|friday|saturday|sunday").unwrap());

/// Sunday-based index, matching `Weekday::num_days_from_sunday`
fn day_index(name: &str) -> Option<u32> {
    match name {
        "sunday" => Some(0),
        "monday" => Some(1),
        "tuesday" => Some(2),
        "wednesday" => Some(3),
        "thursday" => Some(4),
        "friday" => Some(5),
        "saturday" => Some(6),
        _ => None,
    }
}

/// 12-hour to 24-hour conversion shared by every resolver.
///
/// A missing meridiem is treated as AM, so a bare "12" becomes hour 0.
/// Out-of-range components fail the construction and the candidate is
/// dropped by the caller.
pub(crate) fn build_time(hour: u32, minute: u32, meridiem: Option<&str>) -> Option<NaiveTime> {
    let is_pm = matches!(meridiem, Some(m) if m.eq_ignore_ascii_case("pm"));
    let hour = if is_pm && hour != 12 {
        hour + 12
    } else if !is_pm && hour == 12 {
        0
    } else {
        hour
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parse an "H[:MM] am|pm" phrase out of a lower-cased span.
/// Returns the time and the exact substring it came from.
fn clock_time(lower: &str) -> Option<(NaiveTime, String)> {
    let caps = CLOCK_RE.captures(lower)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let time = build_time(hour, minute, caps.get(3).map(|m| m.as_str()))?;
    let label = caps.get(0)?.as_str().to_string();
    Some((time, label))
}

/// Extract every time/date phrase in `text`, resolved against `now`.
///
/// Returns one entry per pattern match, in pattern order then left-to-right.
/// Matches whose sub-parse fails (out-of-range hour, no resolvable time
/// component) are skipped silently.
pub fn extract_time_from_text(text: &str, now: NaiveDateTime) -> Vec<TimeExtraction> {
    let lower_text = text.to_lowercase();
    let mut extractions = Vec::new();

    for pattern in TIME_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            let match_lower = m.as_str().to_lowercase();
            if let Some((extracted, label, is_relative)) =
                resolve_match(&match_lower, &lower_text, now)
            {
                extractions.push(TimeExtraction {
                    original_text: m.as_str().to_string(),
                    extracted_time: Some(extracted),
                    time_string: label,
                    is_relative,
                });
            }
        }
    }

    extractions
}

/// Resolve one pattern match into a timestamp.
///
/// Relative markers are judged on the matched span itself; date qualifiers
/// (today/tomorrow, weekday names) are judged on the whole utterance, so a
/// clock-time match inside "tomorrow at 2pm" anchors to tomorrow. Only when
/// the utterance carries no qualifier at all does the bare-time rule apply
/// (today, rolled one day forward once the instant has passed).
fn resolve_match(
    match_lower: &str,
    lower_text: &str,
    now: NaiveDateTime,
) -> Option<(NaiveDateTime, String, bool)> {
    // Relative offsets: "in 30 minutes", "2 hours from now"
    if match_lower.contains("in ") || match_lower.contains("from now") {
        let caps = OFFSET_RE.captures(match_lower)?;
        let amount: u32 = caps.get(1)?.as_str().parse().ok()?;
        let unit = caps.get(2)?.as_str();
        let target = if unit.starts_with("minute") {
            now + Duration::minutes(amount as i64)
        } else if unit.starts_with("hour") {
            now + Duration::hours(amount as i64)
        } else if unit.starts_with("day") {
            now + Duration::days(amount as i64)
        } else {
            return None;
        };
        return Some((target, format!("in {amount} {unit}"), true));
    }

    // Today/tomorrow anchors
    if lower_text.contains("today") || lower_text.contains("tomorrow") {
        let is_today = lower_text.contains("today");
        let date = if is_today {
            now.date()
        } else {
            now.date() + Duration::days(1)
        };
        let target = match clock_time(match_lower) {
            Some((time, _)) => date.and_time(time),
            None => date.and_time(now.time()),
        };
        let label = if is_today { "today" } else { "tomorrow" };
        return Some((target, label.to_string(), false));
    }

    // Named weekdays: always the upcoming occurrence, never today
    if let Some(day) = DAY_RE.find(lower_text) {
        let target_day = day_index(day.as_str())?;
        let current_day = now.date().weekday().num_days_from_sunday();
        let mut days_ahead = (target_day + 7 - current_day) % 7;
        if days_ahead == 0 {
            days_ahead = 7;
        }
        let date = now.date() + Duration::days(days_ahead as i64);
        let time = match clock_time(match_lower) {
            Some((time, _)) => time,
            None => NaiveTime::from_hms_opt(9, 0, 0)?,
        };
        return Some((date.and_time(time), day.as_str().to_string(), false));
    }

    // Bare clock time with no date qualifier: today, else tomorrow once past
    let (time, label) = clock_time(match_lower)?;
    let mut target = now.date().and_time(time);
    if target <= now {
        target += Duration::days(1);
    }
    Some((target, label, false))
}

/// Render a timestamp relative to `now` for display.
///
/// "Today at 3:00 PM", "Tomorrow at 9:00 AM", or "1/15/2024 at 9:00 AM".
pub fn format_time_for_display(ts: NaiveDateTime, now: NaiveDateTime) -> String {
    let time = ts.format("%-I:%M %p");
    if ts.date() == now.date() {
        format!("Today at {time}")
    } else if ts.date() == now.date() + Duration::days(1) {
        format!("Tomorrow at {time}")
    } else {
        format!("{} at {}", ts.format("%-m/%-d/%Y"), time)
    }
}
