//! Schedule task entity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::TaskId;

use super::ClockTime;

/// What part of the user's life a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Academic,
    Learning,
    Personal,
    Event,
    Hackathon,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskKind::Academic => "academic",
            TaskKind::Learning => "learning",
            TaskKind::Personal => "personal",
            TaskKind::Event => "event",
            TaskKind::Hackathon => "hackathon",
        };
        write!(f, "{s}")
    }
}

/// Display priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        };
        write!(f, "{s}")
    }
}

/// One schedule entry.
///
/// Time ranges are not checked against each other; overlapping tasks are
/// allowed and display order is by start time alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub priority: TaskPriority,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub completed: bool,
}

/// Input for a user-created task; the list assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub kind: TaskKind,
    pub priority: TaskPriority,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl TaskDraft {
    /// Draft with the add-form defaults and the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: TaskKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_times(mut self, start: ClockTime, end: ClockTime) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: TaskKind::Learning,
            priority: TaskPriority::Medium,
            start_time: ClockTime::new(9, 0),
            end_time: ClockTime::new(10, 0),
        }
    }
}
