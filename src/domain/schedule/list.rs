//! The in-session task list.
//!
//! Held in memory only; a reload starts from an empty list.

use crate::domain::foundation::{TaskId, ValidationError};

use super::{ClockTime, Task, TaskDraft, TaskKind, TaskPriority};

/// The fixed template set produced by the AI timetable generator.
pub fn ai_template_tasks() -> Vec<Task> {
    let template = |n: usize, title: &str, kind: TaskKind, priority: TaskPriority, start: ClockTime, end: ClockTime| Task {
        id: TaskId::ai_template(n),
        title: title.to_string(),
        kind,
        priority,
        start_time: start,
        end_time: end,
        completed: false,
    };

    vec![
        template(1, "Daily Review & Planning", TaskKind::Personal, TaskPriority::Medium, ClockTime::new(8, 0), ClockTime::new(8, 30)),
        template(2, "Deep Work: Roadmap Module 1", TaskKind::Learning, TaskPriority::High, ClockTime::new(9, 0), ClockTime::new(11, 0)),
        template(3, "Academic Revision", TaskKind::Academic, TaskPriority::Medium, ClockTime::new(14, 0), ClockTime::new(15, 30)),
        template(4, "Hackathon Ideation", TaskKind::Hackathon, TaskPriority::Low, ClockTime::new(19, 0), ClockTime::new(20, 0)),
    ]
}

/// Ordered collection of schedule tasks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user-created task, assigning a fresh time-derived id.
    ///
    /// Drafts with a blank title are rejected, matching the add-form gate.
    pub fn add(&mut self, draft: TaskDraft) -> Result<TaskId, ValidationError> {
        if draft.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        let id = TaskId::generate();
        self.tasks.push(Task {
            id: id.clone(),
            title: draft.title,
            kind: draft.kind,
            priority: draft.priority,
            start_time: draft.start_time,
            end_time: draft.end_time,
            completed: false,
        });
        Ok(id)
    }

    /// Appends a pre-built task, keeping its id.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes the first task with the given id. No-op when absent.
    ///
    /// Returns true if a task was removed.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        match self.tasks.iter().position(|t| &t.id == id) {
            Some(pos) => {
                self.tasks.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces every AI-generated task with the fixed template set.
    ///
    /// User-created tasks are untouched; repeated calls converge on the
    /// same four template entries.
    pub fn generate_ai_schedule(&mut self) {
        self.tasks.retain(|t| !t.id.is_ai_generated());
        self.tasks.extend(ai_template_tasks());
    }

    /// Tasks in display order: ascending by start time.
    pub fn sorted_by_start(&self) -> Vec<&Task> {
        let mut ordered: Vec<&Task> = self.tasks.iter().collect();
        ordered.sort_by_key(|t| t.start_time);
        ordered
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of AI-generated tasks currently in the list.
    pub fn ai_task_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.id.is_ai_generated()).count()
    }
}
