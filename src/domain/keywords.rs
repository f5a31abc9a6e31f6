//! Fixed keyword vocabularies for action item detection
//!
//! The classifier matches these as lower-case substrings; the highlighter
//! matches the same action vocabulary as whole words. Both must use the same
//! list so that what the UI highlights is what the classifier saw.

/// Words and phrases whose presence flags a sentence as a candidate task.
///
/// Spans task creation ("todo", "assign"), scheduling ("due", "deadline",
/// "schedule") and completion verbs ("finish", "resolve", "fix").
pub const ACTION_KEYWORDS: &[&str] = &[
    "follow up",
    "follow-up",
    "action item",
    "todo",
    "to do",
    "task",
    "assign",
    "responsible",
    "due",
    "deadline",
    "complete",
    "finish",
    "deliver",
    "send",
    "create",
    "update",
    "review",
    "check",
    "verify",
    "schedule",
    "organize",
    "prepare",
    "research",
    "contact",
    "call",
    "email",
    "meeting",
    "discuss",
    "resolve",
    "fix",
    "implement",
];

/// Urgent phrasing
pub const HIGH_PRIORITY_KEYWORDS: &[&str] = &[
    "urgent",
    "asap",
    "critical",
    "important",
    "priority",
    "immediately",
];

/// Near-term phrasing
pub const MEDIUM_PRIORITY_KEYWORDS: &[&str] = &["soon", "next week", "upcoming", "moderate"];

/// Deferrable phrasing
pub const LOW_PRIORITY_KEYWORDS: &[&str] = &["later", "eventually", "when possible", "low priority"];
