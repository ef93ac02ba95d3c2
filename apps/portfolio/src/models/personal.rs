use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: Option<String>,
    pub bio: String,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub interests: Vec<String>,
}

impl PersonalInfo {
    /// File name offered when the resume PDF is served, e.g. `Jane_Doe_Resume.pdf`.
    pub fn resume_file_name(&self) -> String {
        let stem: String = self
            .name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .collect();
        if stem.is_empty() {
            "Resume.pdf".to_string()
        } else {
            format!("{stem}_Resume.pdf")
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    /// `None` for a current position.
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub gpa: Option<String>,
    pub location: String,
}
