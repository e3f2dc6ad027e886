//! Coach: optional text-generation features (learning plans and
//! post-session feedback).
//!
//! The generator sits behind [`TextGenerator`]. Both entry points swallow
//! every failure: a plan request degrades to `None` and a feedback request
//! degrades to a fixed encouragement, so the UI never sees an error.

#[cfg(feature = "server")]
pub mod gemini;

use async_trait::async_trait;
use danceverse_model::{Experience, LearningPlan};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

/// Shown when feedback cannot be generated
pub const FALLBACK_FEEDBACK: &str = "Keep dancing! You're doing great.";

/// Text-generation failures. Logged, never shown to the user.
#[derive(Debug, Error)]
pub enum CoachError {
    #[error("coach service is not configured (no API key)")]
    NotConfigured,
    #[cfg(feature = "server")]
    #[error("coach request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("coach service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("coach output was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One prompt plus generation options.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    /// When set, the service must answer with JSON matching this schema
    pub response_schema: Option<serde_json::Value>,
}

impl GenerationRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    pub fn json(prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(schema),
        }
    }
}

/// A generative text service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String, CoachError>;
}

/// Generator used when no credential is configured
pub struct DisabledCoach;

#[async_trait]
impl TextGenerator for DisabledCoach {
    async fn generate(&self, _request: GenerationRequest) -> Result<String, CoachError> {
        Err(CoachError::NotConfigured)
    }
}

/// JSON schema advertised for learning plans
pub fn learning_plan_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "planName": { "type": "STRING" },
            "weeks": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "weekNumber": { "type": "NUMBER" },
                        "focus": { "type": "STRING" },
                        "exercises": { "type": "ARRAY", "items": { "type": "STRING" } }
                    }
                }
            }
        }
    })
}

fn learning_plan_prompt(goals: &str, level: Experience) -> String {
    format!(
        "Generate a 4-week dance learning plan for a {level} level student with the following goals: {goals}. Provide the output in structured JSON."
    )
}

fn feedback_prompt(transcript: &str) -> String {
    format!(
        "The student just finished a dance session. Based on their activity transcript: \"{transcript}\", provide 3 encouraging tips for improvement."
    )
}

/// Ask the coach for a 4-week plan. `None` means "service unavailable".
pub async fn learning_plan(
    generator: &dyn TextGenerator,
    goals: &str,
    level: Experience,
) -> Option<LearningPlan> {
    let request = GenerationRequest::json(learning_plan_prompt(goals, level), learning_plan_schema());

    let result = async {
        let text = generator.generate(request).await?;
        let text = if text.trim().is_empty() { "{}" } else { text.as_str() };
        let plan: LearningPlan = serde_json::from_str(text)?;
        Ok::<_, CoachError>(plan)
    }
    .await;

    match result {
        Ok(plan) => {
            debug!(plan = %plan.plan_name, weeks = plan.weeks.len(), "Learning plan generated");
            Some(plan)
        }
        Err(e) => {
            warn!(error = %e, "Learning plan generation failed");
            None
        }
    }
}

/// Ask the coach for post-session tips, falling back to a fixed message.
pub async fn session_feedback(generator: &dyn TextGenerator, transcript: &str) -> String {
    match generator
        .generate(GenerationRequest::text(feedback_prompt(transcript)))
        .await
    {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("Coach feedback was empty");
            FALLBACK_FEEDBACK.to_string()
        }
        Err(e) => {
            warn!(error = %e, "Coach feedback failed");
            FALLBACK_FEEDBACK.to_string()
        }
    }
}

/// Process-wide generator for server functions, built from config on first use.
#[cfg(feature = "server")]
pub fn server_coach() -> &'static dyn TextGenerator {
    use std::sync::OnceLock;

    static COACH: OnceLock<Box<dyn TextGenerator>> = OnceLock::new();
    &**COACH.get_or_init(build_server_coach)
}

#[cfg(feature = "server")]
fn build_server_coach() -> Box<dyn TextGenerator> {
    let config = match crate::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Failed to load config, coach disabled");
            return Box::new(DisabledCoach);
        }
    };

    match gemini::GeminiClient::new(&config.coach) {
        Ok(client) => {
            tracing::info!(model = %config.coach.model, "Coach enabled");
            Box::new(client)
        }
        Err(e) => {
            tracing::info!(reason = %e, "Coach disabled");
            Box::new(DisabledCoach)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Replies with a canned answer and records prompts
    struct StubCoach {
        reply: Result<String, ()>,
        seen: Mutex<Vec<GenerationRequest>>,
    }

    impl StubCoach {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(()),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for StubCoach {
        async fn generate(&self, request: GenerationRequest) -> Result<String, CoachError> {
            self.seen.lock().unwrap().push(request);
            self.reply.clone().map_err(|_| CoachError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_learning_plan_parses_schema_json() {
        let stub = StubCoach::replying(
            r#"{"planName":"Bounce Basics","weeks":[{"weekNumber":1,"focus":"Groove","exercises":["Bounce","Rock"]}]}"#,
        );

        let plan = tokio_test::block_on(learning_plan(&stub, "build stamina", Experience::Beginner))
            .unwrap();
        assert_eq!(plan.plan_name, "Bounce Basics");
        assert_eq!(plan.weeks[0].focus, "Groove");

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].prompt.contains("Beginner level student"));
        assert!(seen[0].prompt.contains("build stamina"));
        assert_eq!(seen[0].response_schema, Some(learning_plan_schema()));
    }

    #[test]
    fn test_learning_plan_falls_back_to_none() {
        let failing = StubCoach::failing();
        assert_eq!(
            tokio_test::block_on(learning_plan(&failing, "x", Experience::Advanced)),
            None
        );

        let garbage = StubCoach::replying("not json at all");
        assert_eq!(
            tokio_test::block_on(learning_plan(&garbage, "x", Experience::Advanced)),
            None
        );

        assert_eq!(
            tokio_test::block_on(learning_plan(&DisabledCoach, "x", Experience::Advanced)),
            None
        );
    }

    #[test]
    fn test_empty_plan_text_is_an_empty_plan() {
        let stub = StubCoach::replying("  ");
        let plan = tokio_test::block_on(learning_plan(&stub, "x", Experience::Beginner)).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_session_feedback() {
        let stub = StubCoach::replying("1. Bend your knees.");
        let text = tokio_test::block_on(session_feedback(&stub, "30 minutes of bounce drills"));
        assert_eq!(text, "1. Bend your knees.");

        let seen = stub.seen.lock().unwrap();
        assert!(seen[0].prompt.contains("\"30 minutes of bounce drills\""));
        assert!(seen[0].response_schema.is_none());
    }

    #[test]
    fn test_session_feedback_fallbacks() {
        let failing = StubCoach::failing();
        assert_eq!(
            tokio_test::block_on(session_feedback(&failing, "t")),
            FALLBACK_FEEDBACK
        );

        let empty = StubCoach::replying("");
        assert_eq!(
            tokio_test::block_on(session_feedback(&empty, "t")),
            FALLBACK_FEEDBACK
        );
    }
}
