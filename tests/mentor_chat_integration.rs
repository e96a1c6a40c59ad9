//! Integration tests for the mentor bridge: chat, discovery, and tips
//! against a configurable mock provider.

use std::sync::Arc;
use std::time::Duration;

use pathfinder::adapters::ai::{MockMentor, MockMentorError};
use pathfinder::application::{
    CareerDiscovery, ChatSendError, MentorChat, FALLBACK_REPLY, MENTOR_APOLOGY,
};
use pathfinder::domain::profile::{CareerRole, UserProfile};
use pathfinder::ports::{RawCareerSuggestion, Speaker};

fn ana() -> UserProfile {
    UserProfile::mock_explorer("Ana", "a@x.com")
}

#[tokio::test]
async fn conversation_accumulates_in_appendage_order() {
    let provider = MockMentor::new()
        .with_reply("Pick one course and finish it.")
        .with_reply("Block two hours each morning.");
    let chat = MentorChat::new(Arc::new(provider), &ana());

    chat.send(&ana(), "How do I stop procrastinating?").await.unwrap();
    chat.send(&ana(), "And when should I study?").await.unwrap();

    let speakers: Vec<Speaker> = chat.transcript().iter().map(|t| t.speaker).collect();
    assert_eq!(
        speakers,
        vec![
            Speaker::Mentor, // greeting
            Speaker::User,
            Speaker::Mentor,
            Speaker::User,
            Speaker::Mentor,
        ]
    );
}

#[tokio::test]
async fn failure_scenario_gains_exactly_one_apology_turn() {
    let provider = MockMentor::new().with_error(MockMentorError::Unavailable {
        message: "upstream down".to_string(),
    });
    let chat = MentorChat::new(Arc::new(provider), &ana());
    let before = chat.transcript().len();

    // No error escapes the bridge.
    let reply = chat.send(&ana(), "Are you there?").await.unwrap();

    assert_eq!(reply, MENTOR_APOLOGY);
    let transcript = chat.transcript();
    assert_eq!(transcript.len(), before + 2);
    assert_eq!(transcript[before].text, "Are you there?");
    assert_eq!(transcript[before + 1].text, MENTOR_APOLOGY);
}

#[tokio::test]
async fn recovery_after_a_failed_call() {
    let provider = MockMentor::new()
        .with_error(MockMentorError::Network {
            message: "reset".to_string(),
        })
        .with_reply("Back online. Let's plan your week.");
    let chat = MentorChat::new(Arc::new(provider), &ana());

    assert_eq!(chat.send(&ana(), "Hello?").await.unwrap(), MENTOR_APOLOGY);
    assert_eq!(
        chat.send(&ana(), "Trying again").await.unwrap(),
        "Back online. Let's plan your week."
    );
}

#[tokio::test]
async fn blank_reply_is_substituted() {
    let provider = MockMentor::new().with_reply("");
    let chat = MentorChat::new(Arc::new(provider), &ana());

    assert_eq!(chat.send(&ana(), "Say something").await.unwrap(), FALLBACK_REPLY);
}

#[tokio::test]
async fn concurrent_send_is_rejected_not_interleaved() {
    let provider = MockMentor::new()
        .with_reply("first reply")
        .with_delay(Duration::from_millis(50));
    let chat = Arc::new(MentorChat::new(Arc::new(provider), &ana()));

    let racing = {
        let chat = chat.clone();
        tokio::spawn(async move { chat.send(&ana(), "first").await })
    };
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(chat.send(&ana(), "second").await, Err(ChatSendError::Busy));
    assert_eq!(racing.await.unwrap().unwrap(), "first reply");

    // After the outstanding call resolves, sending works again.
    assert!(chat.send(&ana(), "third").await.is_ok());
}

#[tokio::test]
async fn profile_goal_frames_every_request() {
    let provider = MockMentor::new().with_reply("ok");
    let chat = MentorChat::new(Arc::new(provider.clone()), &ana());

    let mut profile = ana();
    profile.set_goal(CareerRole::CybersecurityAnalyst);
    chat.send(&profile, "What should I learn first?").await.unwrap();

    let request = provider.last_request().unwrap();
    assert_eq!(request.career_goal, CareerRole::CybersecurityAnalyst);
}

#[tokio::test]
async fn discovery_returns_only_validated_suggestions() {
    let provider = MockMentor::new().with_discovery(vec![
        RawCareerSuggestion {
            role: "Machine Learning Engineer".to_string(),
            reason: "Strong math and coding interests".to_string(),
            fit_score: 92.0,
        },
        RawCareerSuggestion {
            role: "Pirate".to_string(),
            reason: "Adventurous".to_string(),
            fit_score: 60.0,
        },
        RawCareerSuggestion {
            role: "Data Engineer".to_string(),
            reason: "Enjoys building pipelines".to_string(),
            fit_score: 250.0,
        },
    ]);
    let discovery = CareerDiscovery::new(Arc::new(provider));

    let suggestions = discovery
        .discover(
            &["Coding".to_string(), "Math".to_string()],
            "I want a high impact career in tech",
        )
        .await
        .unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].role, CareerRole::MachineLearningEngineer);
    assert_eq!(suggestions[0].fit_score, 92.0);
}

#[tokio::test]
async fn discovery_without_interests_is_a_local_noop() {
    let provider = MockMentor::new().with_discovery_error(MockMentorError::AuthenticationFailed);
    let discovery = CareerDiscovery::new(Arc::new(provider));

    let suggestions = discovery.discover(&[], "goals").await.unwrap();
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn tips_reflect_enrollment_progress() {
    let provider = MockMentor::new();
    let discovery = CareerDiscovery::new(Arc::new(provider));

    let mut profile = ana();
    profile.set_goal(CareerRole::DataEngineer);
    profile.enroll("data-engineer-0".into());

    let tips = discovery.daily_tips(&profile).await.unwrap();
    assert!(tips.contains("Data Engineer"));
}
