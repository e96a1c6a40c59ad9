//! Gemini Provider - Implementation of MentorProvider for the Google
//! Generative Language API.
//!
//! Uses the non-streaming `generateContent` endpoint. Conversational
//! requests carry the mentor persona as a system instruction; career
//! discovery constrains the reply with a response JSON schema and decodes
//! the structured payload.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-3-flash-preview")
//!     .with_base_url("https://generativelanguage.googleapis.com");
//!
//! let provider = GeminiMentor::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::domain::profile::CareerRole;
use crate::ports::{MentorError, MentorProvider, MentorRequest, RawCareerSuggestion, Speaker};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-3-flash-preview").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-3-flash-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiMentor {
    config: GeminiConfig,
    client: Client,
}

impl GeminiMentor {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, MentorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MentorError::InvalidRequest(format!("HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// The mentor persona framing sent with every conversational call.
    fn mentor_persona(career_goal: CareerRole) -> String {
        format!(
            "You are EduPath Mentor, a friendly and motivational AI career coach for students. \
             You help with {career_goal} roadmaps, time management, and learning doubts. \
             Always be encouraging and provide structured advice."
        )
    }

    /// Converts a mentor request into the provider's wire format.
    fn to_chat_request(&self, request: &MentorRequest) -> GenerateContentRequest {
        let mut contents: Vec<Content> = request
            .prior_turns
            .iter()
            .map(|turn| {
                let role = match turn.speaker {
                    Speaker::User => "user",
                    Speaker::Mentor => "model",
                };
                Content::with_role(role, &turn.text)
            })
            .collect();
        contents.push(Content::with_role("user", &request.user_message));

        GenerateContentRequest {
            contents,
            system_instruction: Some(Content::bare(Self::mentor_persona(request.career_goal))),
            generation_config: None,
        }
    }

    /// Sends a request and maps transport failures.
    async fn send(&self, body: &GenerateContentRequest) -> Result<Response, MentorError> {
        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MentorError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    MentorError::network(format!("Connection failed: {e}"))
                } else {
                    MentorError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses to provider errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, MentorError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(MentorError::AuthenticationFailed),
            429 => Err(MentorError::RateLimited),
            400 => Err(MentorError::InvalidRequest(error_body)),
            500..=599 => Err(MentorError::unavailable(format!(
                "Server error {status}: {error_body}"
            ))),
            _ => Err(MentorError::network(format!(
                "Unexpected status {status}: {error_body}"
            ))),
        }
    }

    /// Extracts the reply text from a response.
    async fn reply_text(&self, response: Response) -> Result<String, MentorError> {
        let response = self.handle_response_status(response).await?;

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| MentorError::parse(format!("Failed to parse response: {e}")))?;

        Ok(payload.first_text())
    }

    /// JSON schema constraining the discovery reply shape.
    fn discovery_schema() -> serde_json::Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "roles": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "role": { "type": "STRING" },
                            "reason": { "type": "STRING" },
                            "fitScore": { "type": "NUMBER" }
                        },
                        "required": ["role", "reason", "fitScore"]
                    }
                }
            }
        })
    }
}

#[async_trait]
impl MentorProvider for GeminiMentor {
    async fn converse(&self, request: MentorRequest) -> Result<String, MentorError> {
        let body = self.to_chat_request(&request);
        debug!(
            turns = body.contents.len(),
            model = %self.config.model,
            "sending mentor conversation request"
        );

        let response = self.send(&body).await?;
        self.reply_text(response).await
    }

    async fn discover_careers(
        &self,
        interests: &[String],
        goals: &str,
    ) -> Result<Vec<RawCareerSuggestion>, MentorError> {
        let prompt = format!(
            "Based on my interests: {} and my career goals: {}, what are the top 3 best career \
             paths for me from the tech industry? Provide reasons for each. Return response in a \
             JSON format with 'roles' array of objects having 'role', 'reason', and 'fitScore'.",
            interests.join(", "),
            goals
        );

        let body = GenerateContentRequest {
            contents: vec![Content::with_role("user", prompt)],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Self::discovery_schema(),
            }),
        };
        debug!(model = %self.config.model, "sending career discovery request");

        let response = self.send(&body).await?;
        let text = self.reply_text(response).await?;

        let payload: DiscoveryPayload = serde_json::from_str(&text)
            .map_err(|e| MentorError::parse(format!("Failed to parse discovery payload: {e}")))?;

        Ok(payload.roles)
    }

    async fn daily_tips(
        &self,
        role: CareerRole,
        progress_percent: u32,
    ) -> Result<String, MentorError> {
        let prompt = format!(
            "I am learning to be a {role} and I am {progress_percent}% complete with my roadmap. \
             Give me 3 actionable tips for today to stay productive and learn effectively. \
             Keep it motivational."
        );

        let body = GenerateContentRequest {
            contents: vec![Content::with_role("user", prompt)],
            system_instruction: None,
            generation_config: None,
        };
        debug!(model = %self.config.model, "sending daily tips request");

        let response = self.send(&body).await?;
        self.reply_text(response).await
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn with_role(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    fn bare(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Joined text parts of the first candidate; empty when absent.
    fn first_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct DiscoveryPayload {
    #[serde(default)]
    roles: Vec<RawCareerSuggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::TurnSnapshot;

    fn test_provider() -> GeminiMentor {
        GeminiMentor::new(GeminiConfig::new("test-key")).unwrap()
    }

    #[test]
    fn config_has_sane_defaults() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert!(config.base_url.contains("generativelanguage"));
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn config_builders_override_defaults() {
        let config = GeminiConfig::new("key")
            .with_model("gemini-custom")
            .with_base_url("http://localhost:9999")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.model, "gemini-custom");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn generate_url_embeds_model() {
        let provider = test_provider();
        assert_eq!(
            provider.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn chat_request_maps_turns_and_persona() {
        let provider = test_provider();
        let request = MentorRequest::new("What next?", CareerRole::DataEngineer)
            .with_prior_turns(vec![TurnSnapshot::mentor("Hi Ana!"), TurnSnapshot::user("Hello")]);

        let body = provider.to_chat_request(&request);

        assert_eq!(body.contents.len(), 3);
        assert_eq!(body.contents[0].role.as_deref(), Some("model"));
        assert_eq!(body.contents[1].role.as_deref(), Some("user"));
        assert_eq!(body.contents[2].role.as_deref(), Some("user"));
        assert_eq!(body.contents[2].parts[0].text, "What next?");

        let persona = body.system_instruction.unwrap();
        assert!(persona.parts[0].text.contains("EduPath Mentor"));
        assert!(persona.parts[0].text.contains("Data Engineer"));
    }

    #[test]
    fn chat_request_serializes_camel_case() {
        let provider = test_provider();
        let request = MentorRequest::new("Hi", CareerRole::FrontendDeveloper);
        let value = serde_json::to_value(provider.to_chat_request(&request)).unwrap();

        assert!(value.get("contents").is_some());
        assert!(value.get("systemInstruction").is_some());
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn discovery_schema_requires_all_fields() {
        let schema = GeminiMentor::discovery_schema();
        let required = &schema["properties"]["roles"]["items"]["required"];
        assert_eq!(*required, json!(["role", "reason", "fitScore"]));
    }

    #[test]
    fn first_text_joins_parts() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Keep "}, {"text": "going!"}]
                }
            }]
        }))
        .unwrap();
        assert_eq!(payload.first_text(), "Keep going!");
    }

    #[test]
    fn first_text_is_empty_without_candidates() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(payload.first_text(), "");
    }

    #[test]
    fn discovery_payload_decodes_roles() {
        let payload: DiscoveryPayload = serde_json::from_str(
            "{\"roles\": [{\"role\": \"Data Scientist\", \"reason\": \"Strong math interest\", \"fitScore\": 91.5}]}",
        )
        .unwrap();
        assert_eq!(payload.roles.len(), 1);
        assert_eq!(payload.roles[0].role, "Data Scientist");
        assert_eq!(payload.roles[0].fit_score, 91.5);
    }
}
