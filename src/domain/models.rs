/// Domain models for meeting-actions
///
/// These models represent core business entities and are platform-agnostic.
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Urgency of a detected action item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    /// Items without a priority keyword default to medium
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// An action item detected in a transcript sentence, before it is
/// assigned an identity and merged into a session.
///
/// Produced by the extractor only for sentences that matched at least one
/// action keyword; an utterance without matches yields no drafts at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionItemDraft {
    /// The sentence the item was detected in, trimmed
    pub text: String,

    /// Inferred urgency (defaults to medium)
    pub priority: Priority,

    /// Name token captured from "assign/responsible/@" phrasing
    pub assignee: Option<String>,

    /// Calendar date captured from "due/deadline/by" phrasing
    pub due_date: Option<NaiveDate>,

    /// Timestamp resolved by the time extractors, when any phrase matched
    pub scheduled_time: Option<NaiveDateTime>,

    /// Always false at creation
    pub completed: bool,

    /// Creation timestamp
    pub created_at: NaiveDateTime,
}

/// A fully-identified action item held by a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub created_at: NaiveDateTime,
    pub due_date: Option<NaiveDate>,
    pub scheduled_time: Option<NaiveDateTime>,
    pub assignee: Option<String>,
    /// Id of the calendar event an external integration created for this item
    pub calendar_event_id: Option<String>,
    pub notes: Option<String>,
}

impl ActionItem {
    /// Promote a draft into an identified item
    pub fn from_draft(id: impl Into<String>, draft: ActionItemDraft) -> Self {
        Self {
            id: id.into(),
            text: draft.text,
            completed: draft.completed,
            priority: draft.priority,
            created_at: draft.created_at,
            due_date: draft.due_date,
            scheduled_time: draft.scheduled_time,
            assignee: draft.assignee,
            calendar_event_id: None,
            notes: None,
        }
    }
}

/// One finalized utterance of transcribed speech within a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranscriptSegment {
    pub id: String,
    pub speaker: String,
    pub text: String,
    pub timestamp: NaiveDateTime,
    /// Set when at least one action item was detected in this segment
    pub contains_action_items: bool,
}

/// Lifecycle state of a meeting session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Paused,
    Completed,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::Paused => write!(f, "paused"),
            SessionStatus::Completed => write!(f, "completed"),
        }
    }
}

/// An in-memory meeting session: the transcript segments fed in so far and
/// the action items detected in them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeetingSession {
    pub id: String,
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub transcript: Vec<TranscriptSegment>,
    pub action_items: Vec<ActionItem>,
    pub participants: Vec<String>,
    pub status: SessionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(Priority::Low.to_string(), "low");
    }

    #[test]
    fn test_from_draft_carries_fields() {
        let draft = ActionItemDraft {
            text: "Review the release notes".to_string(),
            priority: Priority::High,
            assignee: Some("sam".to_string()),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            scheduled_time: None,
            completed: false,
            created_at: noon(),
        };

        let item = ActionItem::from_draft("item-1", draft.clone());
        assert_eq!(item.id, "item-1");
        assert_eq!(item.text, draft.text);
        assert_eq!(item.priority, Priority::High);
        assert_eq!(item.due_date, draft.due_date);
        assert!(item.calendar_event_id.is_none());
        assert!(item.notes.is_none());
        assert!(!item.completed);
    }

    #[test]
    fn test_session_status_roundtrip() {
        let status: SessionStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(status, SessionStatus::Paused);
        assert_eq!(status.to_string(), "paused");
    }
}
