//! Catalog records: courses, their modules and lessons, and batches.
//!
//! The catalog is read-only at runtime. Identifiers are newtypes so a
//! course id can never be passed where a batch id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Course identifier (e.g., "c1")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Batch identifier (e.g., "b-morning")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(String);

impl BatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BatchId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Course difficulty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
        }
    }
}

/// A course in the academy catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub instructor_id: String,
    pub instructor_name: String,
    /// Thumbnail image URL
    pub thumbnail: String,
    pub category: String,
    /// Price in rupees (0 during the launch phase)
    pub price: u32,
    pub rating: f32,
    pub students_count: u32,
    pub difficulty: Difficulty,
    pub modules: Vec<Module>,
    pub is_published: bool,
}

impl Course {
    /// Total number of lessons across all modules
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }

    /// First lesson of the first module, if the course has any content yet
    pub fn first_lesson(&self) -> Option<&Lesson> {
        self.modules.iter().flat_map(|m| m.lessons.iter()).next()
    }
}

/// A titled group of lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub lessons: Vec<Lesson>,
}

/// A single video lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    /// HLS manifest URL (.m3u8)
    pub video_url: String,
    pub duration_secs: u32,
}

impl Lesson {
    /// Whole minutes, rounded down (what the lesson list shows)
    pub fn duration_minutes(&self) -> u32 {
        self.duration_secs / 60
    }
}

/// A recurring class time-slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub id: BatchId,
    /// Display label, also copied verbatim into inquiries
    pub label: String,
    /// Which days the batch meets
    pub schedule: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str, secs: u32) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: format!("Lesson {id}"),
            video_url: "https://example.com/x.m3u8".to_string(),
            duration_secs: secs,
        }
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&CourseId::from("c1")).unwrap();
        assert_eq!(json, "\"c1\"");

        let id: BatchId = serde_json::from_str("\"b-morning\"").unwrap();
        assert_eq!(id.as_str(), "b-morning");
    }

    #[test]
    fn test_lesson_duration_minutes_rounds_down() {
        assert_eq!(lesson("l1", 760).duration_minutes(), 12);
        assert_eq!(lesson("l2", 59).duration_minutes(), 0);
    }

    #[test]
    fn test_course_lesson_helpers() {
        let mut course = Course {
            id: CourseId::from("c9"),
            title: "Test".to_string(),
            description: String::new(),
            instructor_id: "t1".to_string(),
            instructor_name: "Someone".to_string(),
            thumbnail: String::new(),
            category: "Test".to_string(),
            price: 0,
            rating: 5.0,
            students_count: 0,
            difficulty: Difficulty::Advanced,
            modules: Vec::new(),
            is_published: false,
        };
        assert_eq!(course.lesson_count(), 0);
        assert!(course.first_lesson().is_none());

        course.modules.push(Module {
            id: "m1".to_string(),
            title: "One".to_string(),
            lessons: vec![lesson("a", 60), lesson("b", 120)],
        });
        assert_eq!(course.lesson_count(), 2);
        assert_eq!(course.first_lesson().map(|l| l.id.as_str()), Some("a"));
    }
}
