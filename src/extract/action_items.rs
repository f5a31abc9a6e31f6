//! Action item detection in transcript utterances
//!
//! Splits an utterance into sentences, flags the ones containing action
//! keywords, and enriches each flagged sentence with priority, assignee,
//! due date and a scheduled time resolved by the time extractors.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::keywords::{
    ACTION_KEYWORDS, HIGH_PRIORITY_KEYWORDS, LOW_PRIORITY_KEYWORDS, MEDIUM_PRIORITY_KEYWORDS,
};
use crate::domain::models::{ActionItemDraft, Priority};
use crate::extract::resolve_time;

static ASSIGNEE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:assign|responsible|@)(?:ed)?\s+(?:to\s+)?(\w+)").unwrap());

static DUE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:due|deadline|by)\s+(\w+\s+\d{1,2}|\d{1,2}/\d{1,2}|\d{1,2}-\d{1,2})")
        .unwrap()
});

/// Detect action items in a finalized utterance.
///
/// One draft is emitted per sentence containing at least one action keyword;
/// a sentence with several keywords still yields exactly one draft. Sentences
/// without a keyword are dropped, never emitted empty.
pub fn extract_action_items(text: &str, now: NaiveDateTime) -> Vec<ActionItemDraft> {
    let mut items = Vec::new();

    for sentence in text.split(['.', '!', '?']) {
        let trimmed = sentence.trim();
        if trimmed.is_empty() {
            continue;
        }

        let lower = trimmed.to_lowercase();
        if !ACTION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            continue;
        }

        let scheduled_time = resolve_time(trimmed, now).map(|r| r.timestamp());

        items.push(ActionItemDraft {
            text: trimmed.to_string(),
            priority: detect_priority(&lower),
            assignee: extract_assignee(trimmed),
            due_date: extract_due_date(trimmed, now),
            scheduled_time,
            completed: false,
            created_at: now,
        });
    }

    log::debug!("detected {} action item(s) in utterance", items.len());
    items
}

/// First matching set wins, scanned high → medium → low; medium by default.
fn detect_priority(lower_sentence: &str) -> Priority {
    let sets = [
        (Priority::High, HIGH_PRIORITY_KEYWORDS),
        (Priority::Medium, MEDIUM_PRIORITY_KEYWORDS),
        (Priority::Low, LOW_PRIORITY_KEYWORDS),
    ];
    for (priority, keywords) in sets {
        if keywords.iter().any(|kw| lower_sentence.contains(kw)) {
            return priority;
        }
    }
    Priority::default()
}

/// Capture the word following "assign(ed) [to]", "responsible", or "@ ".
fn extract_assignee(sentence: &str) -> Option<String> {
    ASSIGNEE_RE
        .captures(sentence)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Capture a date-like token after "due", "deadline" or "by" and parse it
/// into a calendar date in the current year. Tokens that fail to form a
/// valid date ("Blarch 40") are dropped rather than stored.
fn extract_due_date(sentence: &str, now: NaiveDateTime) -> Option<NaiveDate> {
    let token = DUE_DATE_RE
        .captures(sentence)
        .and_then(|caps| caps.get(1))?
        .as_str();
    parse_date_token(token, now.date().year())
}

fn parse_date_token(token: &str, year: i32) -> Option<NaiveDate> {
    let (month, day) = if let Some((m, d)) = token.split_once('/') {
        (m.trim().parse().ok()?, d.trim().parse().ok()?)
    } else if let Some((m, d)) = token.split_once('-') {
        (m.trim().parse().ok()?, d.trim().parse().ok()?)
    } else {
        let (name, d) = token.split_once(char::is_whitespace)?;
        (month_from_name(name)?, d.trim().parse().ok()?)
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Accepts a full month name or an unambiguous prefix of at least 3 letters
/// ("jan", "sept", "January").
fn month_from_name(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    let lower = name.to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.starts_with(&lower))
        .map(|i| i as u32 + 1)
}
