use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required fields.";

/// A contact form submission. Absent fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Rejects the submission when name, email, or message is blank.
    pub fn validate(&self) -> Result<(), AppError> {
        let blank = |s: &str| s.trim().is_empty();
        if blank(&self.name) || blank(&self.email) || blank(&self.message) {
            return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }

    pub fn subject_line(&self) -> String {
        let subject = self.subject.trim();
        if subject.is_empty() {
            "Portfolio Contact: (no subject)".to_string()
        } else {
            format!("Portfolio Contact: {subject}")
        }
    }

    /// Plain-text body of the notification mail.
    pub fn compose_body(&self) -> String {
        format!(
            "New contact form submission from your portfolio:\n\
             \n\
             Name: {}\n\
             Email: {}\n\
             Subject: {}\n\
             \n\
             Message:\n\
             {}\n\
             \n\
             ---\n\
             This message was sent from your portfolio contact form.\n",
            self.name.trim(),
            self.email.trim(),
            self.subject.trim(),
            self.message.trim_end()
        )
    }
}
