//! Mock Mentor Provider for testing.
//!
//! Configurable implementation of the MentorProvider port, letting tests
//! run without the real AI API.
//!
//! # Features
//!
//! - Pre-configured replies, consumed in order
//! - Simulated delays for pending-state testing
//! - Error injection for resilience testing
//! - Request tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockMentor::new()
//!     .with_reply("Focus on the fundamentals first.")
//!     .with_delay(Duration::from_millis(100));
//!
//! let reply = provider.converse(request).await?;
//! assert_eq!(reply, "Focus on the fundamentals first.");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::profile::CareerRole;
use crate::ports::{MentorError, MentorProvider, MentorRequest, RawCareerSuggestion};

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockMentorError {
    Network { message: String },
    Timeout { timeout_secs: u32 },
    RateLimited,
    AuthenticationFailed,
    Unavailable { message: String },
    Parse { message: String },
}

impl From<MockMentorError> for MentorError {
    fn from(err: MockMentorError) -> Self {
        match err {
            MockMentorError::Network { message } => MentorError::Network(message),
            MockMentorError::Timeout { timeout_secs } => MentorError::Timeout { timeout_secs },
            MockMentorError::RateLimited => MentorError::RateLimited,
            MockMentorError::AuthenticationFailed => MentorError::AuthenticationFailed,
            MockMentorError::Unavailable { message } => MentorError::Unavailable(message),
            MockMentorError::Parse { message } => MentorError::Parse(message),
        }
    }
}

/// A configured mock reply for conversational calls.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text.
    Success(String),
    /// Return an error.
    Error(MockMentorError),
}

/// Mock mentor provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockMentor {
    /// Replies for `converse` and `daily_tips`, consumed in order.
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    /// Results for `discover_careers`, consumed in order.
    discoveries: Arc<Mutex<VecDeque<Result<Vec<RawCareerSuggestion>, MockMentorError>>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Conversation requests seen, for verification.
    conversations: Arc<Mutex<Vec<MentorRequest>>>,
}

impl MockMentor {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful conversational reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Success(text.into()));
        self
    }

    /// Queues an error for the next conversational call.
    pub fn with_error(self, error: MockMentorError) -> Self {
        self.replies.lock().unwrap().push_back(MockReply::Error(error));
        self
    }

    /// Queues a discovery result.
    pub fn with_discovery(self, suggestions: Vec<RawCareerSuggestion>) -> Self {
        self.discoveries.lock().unwrap().push_back(Ok(suggestions));
        self
    }

    /// Queues a discovery failure.
    pub fn with_discovery_error(self, error: MockMentorError) -> Self {
        self.discoveries.lock().unwrap().push_back(Err(error));
        self
    }

    /// Adds simulated latency to every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of conversational requests seen.
    pub fn conversation_count(&self) -> usize {
        self.conversations.lock().unwrap().len()
    }

    /// The most recent conversational request, if any.
    pub fn last_request(&self) -> Option<MentorRequest> {
        self.conversations.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl MentorProvider for MockMentor {
    async fn converse(&self, request: MentorRequest) -> Result<String, MentorError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.conversations.lock().unwrap().push(request);

        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(MockReply::Success(text)) => Ok(text),
            Some(MockReply::Error(err)) => Err(err.into()),
            None => Ok("Mock mentor reply.".to_string()),
        }
    }

    async fn discover_careers(
        &self,
        _interests: &[String],
        _goals: &str,
    ) -> Result<Vec<RawCareerSuggestion>, MentorError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = self.discoveries.lock().unwrap().pop_front();
        match next {
            Some(Ok(suggestions)) => Ok(suggestions),
            Some(Err(err)) => Err(err.into()),
            None => Ok(Vec::new()),
        }
    }

    async fn daily_tips(
        &self,
        role: CareerRole,
        _progress_percent: u32,
    ) -> Result<String, MentorError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(MockReply::Success(text)) => Ok(text),
            Some(MockReply::Error(err)) => Err(err.into()),
            None => Ok(format!("Mock tips for {role}.")),
        }
    }
}
