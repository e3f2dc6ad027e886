//! Live studio sessions, academy analytics and contact details.

use serde::{Deserialize, Serialize};

/// Live session lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveStatus {
    #[default]
    Upcoming,
    Live,
    Ended,
}

/// A scheduled or running live class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSession {
    pub id: String,
    pub title: String,
    pub instructor_id: String,
    pub instructor_name: String,
    /// ISO-8601 start time
    pub start_time: String,
    pub duration_minutes: u32,
    pub category: String,
    pub status: LiveStatus,
}

/// Headline numbers for the admin terminal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub revenue: u64,
    pub active_users: u32,
    /// Percent, 0-100
    pub completion_rate: u8,
    pub top_performing_course: String,
}

/// Academy contact details shown on the home page and confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone1: String,
    pub phone2: String,
    pub location: String,
    pub founder: String,
    pub trainer: String,
}
