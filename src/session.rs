//! In-memory meeting session management
//!
//! Feeds finalized transcript utterances through the extraction pipeline,
//! promotes the resulting drafts into identified action items, and keeps the
//! running transcript and item list for one meeting. Persistence and
//! calendar/chat forwarding are external concerns; this layer only exposes
//! what a caller would forward.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::domain::models::{
    ActionItem, ActionItemDraft, MeetingSession, SessionStatus, TranscriptSegment,
};
use crate::error::{AppError, Result};
use crate::extract::extract_action_items;

impl MeetingSession {
    /// Start a new active session.
    ///
    /// When no title is given, one is derived from the start date
    /// ("Meeting 1/1/2024").
    pub fn start(title: Option<String>, now: NaiveDateTime) -> Self {
        let title = title.unwrap_or_else(|| format!("Meeting {}", now.format("%-m/%-d/%Y")));
        let session = Self {
            id: Uuid::new_v4().to_string(),
            title,
            start_time: now,
            end_time: None,
            transcript: Vec::new(),
            action_items: Vec::new(),
            participants: Vec::new(),
            status: SessionStatus::Active,
        };
        log::info!("started session {} ({})", session.id, session.title);
        session
    }

    /// Ingest one finalized utterance.
    ///
    /// Runs action item detection, assigns ids to anything detected, flags
    /// the stored segment, and returns the newly created items so the caller
    /// can forward the scheduled ones to a calendar integration.
    ///
    /// Blank utterances are skipped without recording a segment. Only active
    /// sessions accept segments.
    pub fn ingest_segment(
        &mut self,
        speaker: &str,
        text: &str,
        now: NaiveDateTime,
    ) -> Result<Vec<ActionItem>> {
        if self.status != SessionStatus::Active {
            return Err(AppError::InvalidInput(format!(
                "session {} is {}, not active",
                self.id, self.status
            )));
        }
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let drafts = extract_action_items(text, now);
        let new_items: Vec<ActionItem> = drafts
            .into_iter()
            .map(|draft| ActionItem::from_draft(Uuid::new_v4().to_string(), draft))
            .collect();

        self.transcript.push(TranscriptSegment {
            id: Uuid::new_v4().to_string(),
            speaker: speaker.to_string(),
            text: text.to_string(),
            timestamp: now,
            contains_action_items: !new_items.is_empty(),
        });

        if !new_items.is_empty() {
            log::info!(
                "session {}: {} action item(s) from segment",
                self.id,
                new_items.len()
            );
            self.action_items.extend(new_items.iter().cloned());
        }

        Ok(new_items)
    }

    /// Pause an active session
    pub fn pause(&mut self) -> Result<()> {
        match self.status {
            SessionStatus::Active => {
                self.status = SessionStatus::Paused;
                Ok(())
            }
            other => Err(AppError::InvalidInput(format!(
                "cannot pause a {other} session"
            ))),
        }
    }

    /// Resume a paused session
    pub fn resume(&mut self) -> Result<()> {
        match self.status {
            SessionStatus::Paused => {
                self.status = SessionStatus::Active;
                Ok(())
            }
            other => Err(AppError::InvalidInput(format!(
                "cannot resume a {other} session"
            ))),
        }
    }

    /// End the session, recording the end time
    pub fn complete(&mut self, now: NaiveDateTime) -> Result<()> {
        if self.status == SessionStatus::Completed {
            return Err(AppError::InvalidInput(format!(
                "session {} is already completed",
                self.id
            )));
        }
        self.status = SessionStatus::Completed;
        self.end_time = Some(now);
        log::info!(
            "completed session {} with {} action item(s)",
            self.id,
            self.action_items.len()
        );
        Ok(())
    }

    /// Add an item directly, bypassing detection (manual entry in the UI).
    /// Returns the id assigned to the new item.
    pub fn add_action_item(&mut self, draft: ActionItemDraft) -> String {
        let item = ActionItem::from_draft(Uuid::new_v4().to_string(), draft);
        let id = item.id.clone();
        self.action_items.push(item);
        id
    }

    /// Flip an item's completed flag
    pub fn toggle_action_item(&mut self, id: &str) -> Result<&ActionItem> {
        let item = self.find_item_mut(id)?;
        item.completed = !item.completed;
        Ok(item)
    }

    /// Attach free-form notes to an item
    pub fn set_notes(&mut self, id: &str, notes: Option<String>) -> Result<()> {
        self.find_item_mut(id)?.notes = notes;
        Ok(())
    }

    /// Remove an item from the session
    pub fn remove_action_item(&mut self, id: &str) -> Result<ActionItem> {
        let index = self
            .action_items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound(format!("action item {id}")))?;
        Ok(self.action_items.remove(index))
    }

    /// Items carrying a scheduled time, in detection order. These are what a
    /// caller forwards to a calendar-event-creation integration.
    pub fn scheduled_items(&self) -> impl Iterator<Item = &ActionItem> {
        self.action_items
            .iter()
            .filter(|item| item.scheduled_time.is_some())
    }

    fn find_item_mut(&mut self, id: &str) -> Result<&mut ActionItem> {
        self.action_items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound(format!("action item {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Priority;
    use chrono::NaiveDate;

    /// Monday 2024-01-01 10:00:00
    fn monday_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_start_with_default_title() {
        let session = MeetingSession::start(None, monday_morning());
        assert_eq!(session.title, "Meeting 1/1/2024");
        assert_eq!(session.status, SessionStatus::Active);
        assert!(session.end_time.is_none());
    }

    #[test]
    fn test_ingest_detects_and_flags() {
        let mut session = MeetingSession::start(Some("Standup".into()), monday_morning());
        let items = session
            .ingest_segment("alice", "I will follow up with John tomorrow at 2pm", monday_morning())
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(session.action_items.len(), 1);
        assert_eq!(session.transcript.len(), 1);
        assert!(session.transcript[0].contains_action_items);
        assert_eq!(session.transcript[0].speaker, "alice");

        let items = session
            .ingest_segment("bob", "nice weather lately", monday_morning())
            .unwrap();
        assert!(items.is_empty());
        assert_eq!(session.transcript.len(), 2);
        assert!(!session.transcript[1].contains_action_items);
    }

    #[test]
    fn test_ingest_assigns_unique_ids() {
        let mut session = MeetingSession::start(None, monday_morning());
        let items = session
            .ingest_segment("alice", "Review the doc. Send the invite.", monday_morning())
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_ne!(items[0].id, items[1].id);
    }

    #[test]
    fn test_blank_segment_is_skipped() {
        let mut session = MeetingSession::start(None, monday_morning());
        let items = session.ingest_segment("alice", "   ", monday_morning()).unwrap();
        assert!(items.is_empty());
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn test_ingest_requires_active_session() {
        let mut session = MeetingSession::start(None, monday_morning());
        session.pause().unwrap();
        let err = session
            .ingest_segment("alice", "review this", monday_morning())
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        session.resume().unwrap();
        assert!(session
            .ingest_segment("alice", "review this", monday_morning())
            .is_ok());
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut session = MeetingSession::start(None, monday_morning());
        assert!(session.resume().is_err());
        session.pause().unwrap();
        assert!(session.pause().is_err());
        session.resume().unwrap();
        session.complete(monday_morning()).unwrap();
        assert_eq!(session.status, SessionStatus::Completed);
        assert_eq!(session.end_time, Some(monday_morning()));
        assert!(session.complete(monday_morning()).is_err());
        assert!(session.pause().is_err());
    }

    #[test]
    fn test_toggle_and_notes_and_remove() {
        let mut session = MeetingSession::start(None, monday_morning());
        let items = session
            .ingest_segment("alice", "Fix the login bug", monday_morning())
            .unwrap();
        let id = items[0].id.clone();

        assert!(session.toggle_action_item(&id).unwrap().completed);
        assert!(!session.toggle_action_item(&id).unwrap().completed);

        session.set_notes(&id, Some("see issue #42".into())).unwrap();
        assert_eq!(
            session.action_items[0].notes.as_deref(),
            Some("see issue #42")
        );

        let removed = session.remove_action_item(&id).unwrap();
        assert_eq!(removed.id, id);
        assert!(session.action_items.is_empty());
        assert!(matches!(
            session.remove_action_item(&id),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_scheduled_items_filter() {
        let mut session = MeetingSession::start(None, monday_morning());
        session
            .ingest_segment(
                "alice",
                "Review the budget in 2 hours. Update the wiki sometime.",
                monday_morning(),
            )
            .unwrap();
        assert_eq!(session.action_items.len(), 2);
        assert_eq!(session.scheduled_items().count(), 1);
    }

    #[test]
    fn test_manual_item() {
        let mut session = MeetingSession::start(None, monday_morning());
        let draft = ActionItemDraft {
            text: "Book the offsite venue".to_string(),
            priority: Priority::Low,
            assignee: None,
            due_date: None,
            scheduled_time: None,
            completed: false,
            created_at: monday_morning(),
        };
        let id = session.add_action_item(draft);
        assert_eq!(session.action_items.len(), 1);
        assert_eq!(session.action_items[0].id, id);
    }
}
