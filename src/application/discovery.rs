//! Career discovery and daily tips.
//!
//! The provider's structured suggestions arrive untyped; this boundary
//! validates each record against the closed role enumeration and rejects
//! malformed entries instead of trusting their shape.

use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::ValidationError;
use crate::domain::profile::{CareerRole, UserProfile};
use crate::ports::{MentorError, MentorProvider, RawCareerSuggestion};

/// A validated career suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerSuggestion {
    pub role: CareerRole,
    pub reason: String,
    /// Fit score in [0, 100].
    pub fit_score: f64,
}

impl CareerSuggestion {
    /// Validates one raw provider record.
    ///
    /// The role must parse into the closed enumeration, the reason must
    /// be non-empty, and the fit score must be a finite number in
    /// [0, 100].
    pub fn try_from_raw(raw: &RawCareerSuggestion) -> Result<Self, ValidationError> {
        let role: CareerRole = raw.role.parse()?;

        let reason = raw.reason.trim();
        if reason.is_empty() {
            return Err(ValidationError::empty_field("reason"));
        }

        if !raw.fit_score.is_finite() {
            return Err(ValidationError::invalid_format(
                "fitScore",
                "not a finite number",
            ));
        }
        if !(0.0..=100.0).contains(&raw.fit_score) {
            return Err(ValidationError::out_of_range(
                "fitScore",
                0,
                100,
                raw.fit_score as i32,
            ));
        }

        Ok(Self {
            role,
            reason: reason.to_string(),
            fit_score: raw.fit_score,
        })
    }
}

/// Use-case wrapper around the provider's structured calls.
pub struct CareerDiscovery {
    provider: Arc<dyn MentorProvider>,
}

impl CareerDiscovery {
    pub fn new(provider: Arc<dyn MentorProvider>) -> Self {
        Self { provider }
    }

    /// Asks for career paths matching the interests.
    ///
    /// With no interests selected there is nothing to match on, so no
    /// provider call is made. Malformed provider records are dropped
    /// with a warning.
    pub async fn discover(
        &self,
        interests: &[String],
        goals: &str,
    ) -> Result<Vec<CareerSuggestion>, MentorError> {
        if interests.is_empty() {
            return Ok(Vec::new());
        }

        let raw = self.provider.discover_careers(interests, goals).await?;

        let mut suggestions = Vec::with_capacity(raw.len());
        for entry in &raw {
            match CareerSuggestion::try_from_raw(entry) {
                Ok(suggestion) => suggestions.push(suggestion),
                Err(e) => {
                    warn!(role = %entry.role, error = %e, "dropping malformed career suggestion");
                }
            }
        }

        Ok(suggestions)
    }

    /// Asks for today's tips, framed by the profile's goal and progress.
    pub async fn daily_tips(&self, profile: &UserProfile) -> Result<String, MentorError> {
        self.provider
            .daily_tips(profile.career_goal, profile.milestone_progress_percent())
            .await
    }
}
