//! Admission form: required-field validation and inquiry synthesis.

use chrono::{DateTime, Utc};
use danceverse_model::{Batch, Course, Experience, Inquiry};
use thiserror::Error;

/// Greeting prefilled into WhatsApp follow-ups from the admin terminal
const WHATSAPP_GREETING: &str =
    "Hi! Thanks for your interest in Lakshya Danceverse. We'd love to help you get started.";

/// Why a form submission was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a phone number")]
    MissingPhone,
}

/// What the visitor typed into the admission form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryForm {
    pub name: String,
    pub phone: String,
    /// Optional
    pub email: String,
    pub experience: Experience,
}

impl InquiryForm {
    /// Required-field check. Blank (whitespace only) counts as missing.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.phone.trim().is_empty() {
            return Err(FormError::MissingPhone);
        }
        Ok(())
    }

    /// Build the inquiry record for the chosen course and batch.
    pub fn into_inquiry(
        self,
        id: u64,
        course: &Course,
        batch: &Batch,
        date: DateTime<Utc>,
    ) -> Result<Inquiry, FormError> {
        self.validate()?;

        Ok(Inquiry {
            id,
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            experience: self.experience,
            program: course.title.clone(),
            batch: batch.label.clone(),
            date,
        })
    }
}

/// wa.me deep link for following up on an inquiry
pub fn whatsapp_link(inquiry: &Inquiry) -> String {
    format!(
        "https://wa.me/{}?text={}",
        inquiry.phone_digits(),
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use danceverse_model::{BatchId, CourseId};

    fn form(name: &str, phone: &str) -> InquiryForm {
        InquiryForm {
            name: name.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(form("", "+911234567890").validate(), Err(FormError::MissingName));
        assert_eq!(form("   ", "+911234567890").validate(), Err(FormError::MissingName));
        assert_eq!(form("Asha", " ").validate(), Err(FormError::MissingPhone));
        assert_eq!(form("Asha", "+911234567890").validate(), Ok(()));
    }

    #[test]
    fn test_into_inquiry_copies_labels_and_trims() {
        let catalog = Catalog::academy();
        let course = catalog.course(&CourseId::from("c1")).unwrap();
        let batch = catalog.batch(&BatchId::from("b-morning")).unwrap();

        let mut f = form("  Asha ", "+911234567890 ");
        f.experience = Experience::Intermediate;
        let inquiry = f.into_inquiry(7, course, batch, Utc::now()).unwrap();

        assert_eq!(inquiry.id, 7);
        assert_eq!(inquiry.name, "Asha");
        assert_eq!(inquiry.phone, "+911234567890");
        assert_eq!(inquiry.email, "");
        assert_eq!(inquiry.experience, Experience::Intermediate);
        assert_eq!(inquiry.program, "Hip Hop Fundamentals");
        assert_eq!(inquiry.batch, "Morning (7–8 AM)");
    }

    #[test]
    fn test_whatsapp_link_uses_digits_only() {
        let catalog = Catalog::academy();
        let course = catalog.course(&CourseId::from("c2")).unwrap();
        let batch = catalog.batch(&BatchId::from("b-evening")).unwrap();
        let inquiry = form("Ravi", "+91 92365-96740")
            .into_inquiry(1, course, batch, Utc::now())
            .unwrap();

        let link = whatsapp_link(&inquiry);
        assert!(link.starts_with("https://wa.me/919236596740?text="));
        assert!(!link.contains(' '));
    }
}
