//! Mentor provider adapters.

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiMentor};
pub use mock_provider::{MockMentor, MockMentorError, MockReply};
