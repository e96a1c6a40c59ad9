//! Mentor Provider Port - Interface to the generative-AI mentor.
//!
//! The provider is a black box: input is freeform user text plus a
//! structured profile summary and prior turns; output is freeform text,
//! or a raw suggestion list for the structured discovery call. Callers
//! own the failure policy (the chat bridge collapses every error to one
//! apology; discovery validates each record before trusting it).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::profile::CareerRole;

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "bot")]
    Mentor,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Speaker::User => "user",
            Speaker::Mentor => "bot",
        };
        write!(f, "{s}")
    }
}

/// A prior conversation turn, as sent to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub speaker: Speaker,
    pub text: String,
}

impl TurnSnapshot {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn mentor(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Mentor,
            text: text.into(),
        }
    }
}

/// A mentor conversation request.
///
/// The profile summary embedded in the session framing is the user's
/// career goal; the rest of the profile stays local.
#[derive(Debug, Clone, PartialEq)]
pub struct MentorRequest {
    pub user_message: String,
    pub career_goal: CareerRole,
    pub prior_turns: Vec<TurnSnapshot>,
}

impl MentorRequest {
    /// Creates a request with no prior turns.
    pub fn new(user_message: impl Into<String>, career_goal: CareerRole) -> Self {
        Self {
            user_message: user_message.into(),
            career_goal,
            prior_turns: Vec::new(),
        }
    }

    /// Attaches the conversation so far.
    pub fn with_prior_turns(mut self, turns: Vec<TurnSnapshot>) -> Self {
        self.prior_turns = turns;
        self
    }
}

/// A career suggestion exactly as the provider shaped it.
///
/// Untrusted: the discovery boundary validates each record before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCareerSuggestion {
    pub role: String,
    pub reason: String,
    #[serde(rename = "fitScore")]
    pub fit_score: f64,
}

/// Mentor provider errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MentorError {
    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// Rate limited by the provider.
    #[error("rate limited")]
    RateLimited,

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider is unavailable.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Provider reply could not be decoded.
    #[error("failed to parse provider reply: {0}")]
    Parse(String),

    /// Request was rejected as invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl MentorError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// Port for the external generative-AI mentor.
#[async_trait]
pub trait MentorProvider: Send + Sync {
    /// Sends one conversational message and awaits the textual reply.
    async fn converse(&self, request: MentorRequest) -> Result<String, MentorError>;

    /// Asks for career-path suggestions matching the given interests.
    ///
    /// Returns the provider's records as-is; callers validate them.
    async fn discover_careers(
        &self,
        interests: &[String],
        goals: &str,
    ) -> Result<Vec<RawCareerSuggestion>, MentorError>;

    /// Asks for actionable tips for today, freeform.
    async fn daily_tips(&self, role: CareerRole, progress_percent: u32)
        -> Result<String, MentorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_attaches_turns() {
        let request = MentorRequest::new("How do I start?", CareerRole::DataScientist)
            .with_prior_turns(vec![TurnSnapshot::mentor("Hi!"), TurnSnapshot::user("Hello")]);

        assert_eq!(request.user_message, "How do I start?");
        assert_eq!(request.career_goal, CareerRole::DataScientist);
        assert_eq!(request.prior_turns.len(), 2);
        assert_eq!(request.prior_turns[0].speaker, Speaker::Mentor);
    }

    #[test]
    fn speaker_serializes_to_wire_roles() {
        assert_eq!(serde_json::to_string(&Speaker::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Speaker::Mentor).unwrap(), "\"bot\"");
    }

    #[test]
    fn raw_suggestion_reads_provider_field_names() {
        let raw: RawCareerSuggestion = serde_json::from_str(
            "{\"role\": \"Data Engineer\", \"reason\": \"Loves pipelines\", \"fitScore\": 87}",
        )
        .unwrap();
        assert_eq!(raw.role, "Data Engineer");
        assert_eq!(raw.fit_score, 87.0);
    }

    #[test]
    fn errors_display_their_kind() {
        assert_eq!(MentorError::RateLimited.to_string(), "rate limited");
        assert_eq!(
            MentorError::Timeout { timeout_secs: 60 }.to_string(),
            "request timed out after 60s"
        );
        assert!(MentorError::parse("truncated").to_string().contains("truncated"));
    }
}
