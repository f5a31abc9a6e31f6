//! meeting-actions
//!
//! Turns finalized meeting-transcript utterances into action items with
//! resolved date/times. The pipeline is pure and synchronous: text in,
//! values out, with the current instant passed explicitly so every result is
//! deterministic and testable. Speech capture, persistence and calendar/chat
//! delivery are the surrounding application's concern.
//!
//! The pipeline, in dependency order:
//! - [`extract::extract_time_from_text`] finds every literal time/date
//!   phrase in an utterance and resolves each to a timestamp.
//! - [`extract::parse_nlp_datetime`] resolves a single best date/time from a
//!   sentence, with stronger handling of relative phrases like "next week".
//! - [`extract::extract_action_items`] segments an utterance into sentences,
//!   classifies them against a fixed keyword vocabulary, and enriches the
//!   hits with priority, assignee, due date and a scheduled time.
//! - [`extract::highlight_action_keywords`] marks the same vocabulary up for
//!   display.
//!
//! [`MeetingSession`] is the in-memory consumer: it feeds utterances through
//! the pipeline, assigns ids to detected items, and manages the item list.

pub mod domain;
pub mod error;
pub mod extract;
pub mod session;

pub use domain::models::{
    ActionItem, ActionItemDraft, MeetingSession, Priority, SessionStatus, TranscriptSegment,
};
pub use error::{AppError, Result};
pub use extract::{
    extract_action_items, extract_time_from_text, format_time_for_display,
    highlight_action_keywords, parse_nlp_datetime, resolve_time, ResolvedTime, TimeExtraction,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    /// Monday 2024-01-01 10:00:00
    fn monday_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_then_format_round_trip() {
        let now = monday_morning();
        let parsed = parse_nlp_datetime("tomorrow at 3pm", now).unwrap();
        assert_eq!(format_time_for_display(parsed, now), "Tomorrow at 3:00 PM");
    }

    #[test]
    fn test_extractions_are_repeatable() {
        let now = monday_morning();
        let text = "follow up tomorrow at 2pm or in 3 hours";
        assert_eq!(
            extract_time_from_text(text, now),
            extract_time_from_text(text, now)
        );
        assert_eq!(parse_nlp_datetime(text, now), parse_nlp_datetime(text, now));
    }

    #[test]
    fn test_highlighting_does_not_change_detection() {
        let now = monday_morning();
        let text = "Please review the budget tomorrow at 9am";
        let plain = extract_action_items(text, now);
        let highlighted = highlight_action_keywords(text);
        assert_ne!(text, highlighted);
        assert_eq!(plain.len(), 1);
        // The marked-up text is for display; detection runs on the original
        assert_eq!(plain[0].text, text);
    }

    #[test]
    fn test_session_end_to_end() {
        let now = monday_morning();
        let mut session = MeetingSession::start(Some("Planning".into()), now);

        let items = session
            .ingest_segment(
                "alice",
                "This is urgent - action item: fix the login bug by 1/15. Call Sarah on Friday.",
                now,
            )
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].priority, Priority::High);
        assert_eq!(items[0].due_date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(items[0].scheduled_time, None);
        assert_eq!(
            items[1].scheduled_time,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(9, 0, 0)
        );

        // Only the Friday call is forwardable to a calendar
        assert_eq!(session.scheduled_items().count(), 1);

        session.complete(now).unwrap();
        assert_eq!(session.status, SessionStatus::Completed);
    }
}
