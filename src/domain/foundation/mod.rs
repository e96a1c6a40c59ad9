//! Shared value objects and traits used across the domain.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::{CourseId, MessageId, TaskId, AI_TASK_PREFIX};
pub use state_machine::StateMachine;
