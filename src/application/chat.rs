//! The mentor chat bridge.
//!
//! Forwards user messages plus profile context to the mentor provider
//! and relays the reply into a local transcript. One call may be
//! outstanding at a time; replies are matched to the conversation by
//! appendage order, so a second send while one is pending is rejected
//! rather than interleaved.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::warn;

use crate::domain::foundation::MessageId;
use crate::domain::profile::UserProfile;
use crate::ports::{MentorProvider, MentorRequest, Speaker, TurnSnapshot};

/// Fixed user-visible reply substituted for any provider failure.
///
/// Failures are not retried and are not distinguished by cause.
pub const MENTOR_APOLOGY: &str =
    "I'm having a bit of trouble connecting to my brain right now. Please check back in a second!";

/// Fixed reply substituted when the provider succeeds with empty text.
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't process that. Can you try again?";

/// One transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub id: MessageId,
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl ChatTurn {
    fn user(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            speaker: Speaker::User,
            text: text.into(),
            at: Utc::now(),
        }
    }

    fn mentor(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            speaker: Speaker::Mentor,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

/// Errors returned to the send caller before any provider call is made.
///
/// Provider failures never surface here; they become the apology turn.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChatSendError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("a mentor reply is already pending")]
    Busy,
}

/// The chat session with the AI mentor.
pub struct MentorChat {
    provider: Arc<dyn MentorProvider>,
    transcript: Mutex<Vec<ChatTurn>>,
    pending: AtomicBool,
}

impl MentorChat {
    /// Opens a chat seeded with the mentor's greeting.
    pub fn new(provider: Arc<dyn MentorProvider>, profile: &UserProfile) -> Self {
        let greeting = format!(
            "Hi {}! I'm your EduPath Mentor. How can I help you today?",
            profile.name
        );
        Self {
            provider,
            transcript: Mutex::new(vec![ChatTurn::mentor(greeting)]),
            pending: AtomicBool::new(false),
        }
    }

    /// Snapshot of the transcript, oldest first.
    pub fn transcript(&self) -> Vec<ChatTurn> {
        self.transcript.lock().expect("transcript lock poisoned").clone()
    }

    /// True while a mentor call is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Sends one message and awaits the mentor's reply.
    ///
    /// The user turn is appended before the provider call and preserved
    /// regardless of outcome. A provider failure becomes the fixed
    /// apology turn; an empty success becomes the fixed fallback turn.
    /// Returns the reply text that was appended.
    ///
    /// Dropping the returned future releases the pending gate; the
    /// abandoned call's eventual result is never appended.
    pub async fn send(
        &self,
        profile: &UserProfile,
        message: &str,
    ) -> Result<String, ChatSendError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatSendError::EmptyMessage);
        }

        if self
            .pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ChatSendError::Busy);
        }
        let _gate = PendingGate(&self.pending);

        let prior_turns: Vec<TurnSnapshot> = {
            let transcript = self.transcript.lock().expect("transcript lock poisoned");
            transcript
                .iter()
                .map(|turn| TurnSnapshot {
                    speaker: turn.speaker,
                    text: turn.text.clone(),
                })
                .collect()
        };

        self.transcript
            .lock()
            .expect("transcript lock poisoned")
            .push(ChatTurn::user(message));

        let request =
            MentorRequest::new(message, profile.career_goal).with_prior_turns(prior_turns);

        let reply = match self.provider.converse(request).await {
            Ok(text) if text.trim().is_empty() => FALLBACK_REPLY.to_string(),
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "mentor call failed, substituting apology");
                MENTOR_APOLOGY.to_string()
            }
        };

        self.transcript
            .lock()
            .expect("transcript lock poisoned")
            .push(ChatTurn::mentor(reply.clone()));

        Ok(reply)
    }
}

/// Releases the pending flag when the send future completes or is dropped.
struct PendingGate<'a>(&'a AtomicBool);

impl Drop for PendingGate<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
