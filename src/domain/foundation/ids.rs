//! Strongly-typed identifier value objects.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier prefix reserved for schedule entries produced by the
/// AI timetable generator. Regeneration replaces exactly the tasks
/// carrying this prefix and nothing else.
pub const AI_TASK_PREFIX: &str = "ai-";

/// Unique identifier for a catalog course.
///
/// Course ids are human-readable slugs (`"frontend-developer-2"`,
/// `"soft-1"`). They are treated as opaque keys by the session core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Creates a CourseId from an existing slug.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CourseId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Unique identifier for a schedule task.
///
/// User-created tasks get a millisecond-timestamp id; template tasks
/// produced by the AI schedule generator use fixed `ai-` literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a TaskId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a time-derived id for a freshly created task.
    pub fn generate() -> Self {
        Self(Utc::now().timestamp_millis().to_string())
    }

    /// Builds the fixed id of the `n`-th AI template task.
    pub fn ai_template(n: usize) -> Self {
        Self(format!("{AI_TASK_PREFIX}{n}"))
    }

    /// Returns true if this task was produced by the AI schedule generator.
    pub fn is_ai_generated(&self) -> bool {
        self.0.starts_with(AI_TASK_PREFIX)
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Unique identifier for a chat transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random MessageId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_id_round_trips_slug() {
        let id = CourseId::new("frontend-developer-0");
        assert_eq!(id.as_str(), "frontend-developer-0");
        assert_eq!(id.to_string(), "frontend-developer-0");
    }

    #[test]
    fn ai_template_ids_carry_the_prefix() {
        let id = TaskId::ai_template(3);
        assert_eq!(id.as_str(), "ai-3");
        assert!(id.is_ai_generated());
    }

    #[test]
    fn generated_ids_are_not_ai_tagged() {
        let id = TaskId::generate();
        assert!(!id.is_ai_generated());
        assert!(id.as_str().parse::<i64>().is_ok(), "expected a millisecond stamp");
    }

    #[test]
    fn explicit_ids_are_kept_verbatim() {
        let id = TaskId::new("1700000000000");
        assert_eq!(id.as_str(), "1700000000000");
        assert!(!id.is_ai_generated());
    }

    #[test]
    fn message_ids_are_unique() {
        assert_ne!(MessageId::new(), MessageId::new());
    }
}
