//! Server functions backing the AI coach.
//!
//! The API key never reaches the browser: pages call these, the server
//! talks to the generator from `crate::coach::server_coach`.

use danceverse_model::{Experience, LearningPlan};
use dioxus::prelude::*;

/// 4-week plan for the given goals. `Ok(None)` means the coach is unavailable.
#[server]
pub async fn generate_learning_plan(
    goals: String,
    experience: Experience,
) -> Result<Option<LearningPlan>, ServerFnError> {
    tracing::debug!(%experience, "Learning plan requested");
    Ok(crate::coach::learning_plan(crate::coach::server_coach(), &goals, experience).await)
}

/// Post-session tips. Always succeeds with at least the fallback message.
#[server]
pub async fn coach_feedback(transcript: String) -> Result<String, ServerFnError> {
    Ok(crate::coach::session_feedback(crate::coach::server_coach(), &transcript).await)
}
