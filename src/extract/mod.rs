/// Text-processing pipeline for transcript utterances
///
/// Pure, synchronous functions over string input: safe from any execution
/// context, reentrant, no shared state. The caller supplies the current
/// instant; nothing in here reads the wall clock.
pub mod action_items;
pub mod highlight;
pub mod nlp;
pub mod time;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub use action_items::extract_action_items;
pub use highlight::highlight_action_keywords;
pub use nlp::parse_nlp_datetime;
pub use time::{extract_time_from_text, format_time_for_display, TimeExtraction};

/// A scheduled time and which stage of the pipeline produced it.
///
/// The phrase extractor is consulted first; the sentence-level parser only
/// runs when the extractor found nothing. Keeping the origin explicit makes
/// the fallback auditable instead of a silent coalesce.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", content = "time", rename_all = "snake_case")]
pub enum ResolvedTime {
    FromExtractor(NaiveDateTime),
    FromParser(NaiveDateTime),
}

impl ResolvedTime {
    /// The resolved timestamp, regardless of origin
    pub fn timestamp(self) -> NaiveDateTime {
        match self {
            ResolvedTime::FromExtractor(ts) | ResolvedTime::FromParser(ts) => ts,
        }
    }
}

/// Two-step time resolution for a sentence: first extraction if any,
/// otherwise the parser's single best guess, otherwise nothing.
pub fn resolve_time(text: &str, now: NaiveDateTime) -> Option<ResolvedTime> {
    if let Some(ts) = extract_time_from_text(text, now)
        .first()
        .and_then(|e| e.extracted_time)
    {
        return Some(ResolvedTime::FromExtractor(ts));
    }
    parse_nlp_datetime(text, now).map(ResolvedTime::FromParser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Monday 2024-01-01 10:00:00
    fn monday_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_extractor_takes_precedence() {
        let resolved = resolve_time("in 2 hours", monday_morning()).unwrap();
        assert!(matches!(resolved, ResolvedTime::FromExtractor(_)));
        assert_eq!(
            resolved.timestamp(),
            monday_morning() + chrono::Duration::hours(2)
        );
    }

    #[test]
    fn test_parser_fallback_for_bare_phrases() {
        // "next week" produces no phrase extraction; the parser owns it
        let resolved = resolve_time("next week", monday_morning()).unwrap();
        assert!(matches!(resolved, ResolvedTime::FromParser(_)));
        let expected = NaiveDate::from_ymd_opt(2024, 1, 8)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(resolved.timestamp(), expected);
    }

    #[test]
    fn test_absence_when_nothing_matches() {
        assert_eq!(resolve_time("no dates here", monday_morning()), None);
    }
}
