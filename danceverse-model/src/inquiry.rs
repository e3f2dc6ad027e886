//! Admission inquiries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported dance experience on the admission form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

impl Experience {
    pub const ALL: [Experience; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Professional,
    ];
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
            Self::Professional => write!(f, "Professional"),
        }
    }
}

impl From<&str> for Experience {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            "professional" | "pro" => Self::Professional,
            _ => Self::Beginner,
        }
    }
}

/// A prospective-student contact record produced by the admission form.
///
/// `program` and `batch` hold the display labels at submission time, not ids,
/// so the admin list reads the same even if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Sequential, starting at 1
    pub id: u64,
    pub name: String,
    pub phone: String,
    /// Empty when not provided
    pub email: String,
    pub experience: Experience,
    /// Course title
    pub program: String,
    /// Batch label
    pub batch: String,
    pub date: DateTime<Utc>,
}

impl Inquiry {
    /// Phone number reduced to its digits (for wa.me links)
    pub fn phone_digits(&self) -> String {
        self.phone.chars().filter(char::is_ascii_digit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_from_str() {
        assert_eq!(Experience::from("Advanced"), Experience::Advanced);
        assert_eq!(Experience::from("PRO"), Experience::Professional);
        assert_eq!(Experience::from("unknown"), Experience::Beginner);
    }

    #[test]
    fn test_phone_digits_strips_formatting() {
        let inquiry = Inquiry {
            id: 1,
            name: "Asha".to_string(),
            phone: "+91 (700) 790-1592".to_string(),
            email: String::new(),
            experience: Experience::Beginner,
            program: "Hip Hop Fundamentals".to_string(),
            batch: "Morning (7–8 AM)".to_string(),
            date: Utc::now(),
        };
        assert_eq!(inquiry.phone_digits(), "917007901592");
    }
}
