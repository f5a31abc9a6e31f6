/// Domain layer - core business models
///
/// These models are platform-agnostic and represent core business entities.
pub mod keywords;
pub mod models;

pub use keywords::{ACTION_KEYWORDS, HIGH_PRIORITY_KEYWORDS, LOW_PRIORITY_KEYWORDS, MEDIUM_PRIORITY_KEYWORDS};
pub use models::{
    ActionItem, ActionItemDraft, MeetingSession, Priority, SessionStatus, TranscriptSegment,
};
