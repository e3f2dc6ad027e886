//! Coach-generated learning plans.
//!
//! Field names follow the JSON schema advertised to the text-generation
//! service (`planName`, `weekNumber`), so the service output deserializes
//! directly into these types.

use serde::{Deserialize, Serialize};

/// A multi-week practice plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    #[serde(default)]
    pub plan_name: String,
    #[serde(default)]
    pub weeks: Vec<PlanWeek>,
}

impl LearningPlan {
    /// A plan with no weeks carries nothing worth showing
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

/// One week of a learning plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanWeek {
    /// The service sends this as a JSON number, sometimes with a fraction
    #[serde(default)]
    pub week_number: f64,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub exercises: Vec<String>,
}
