use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Web,
    Mobile,
    Ai,
    Security,
    Academic,
    Research,
    Tool,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Web => "web",
            ProjectType::Mobile => "mobile",
            ProjectType::Ai => "ai",
            ProjectType::Security => "security",
            ProjectType::Academic => "academic",
            ProjectType::Research => "research",
            ProjectType::Tool => "tool",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Archived,
    InDevelopment,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Archived => "archived",
            ProjectStatus::InDevelopment => "in-development",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DemoType {
    Live,
    Video,
    Screenshot,
    Hosted,
    #[serde(rename = "none")]
    NoDemo,
}

/// Returned when a path or query value names no known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for ProjectType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" => Ok(ProjectType::Web),
            "mobile" => Ok(ProjectType::Mobile),
            "ai" => Ok(ProjectType::Ai),
            "security" => Ok(ProjectType::Security),
            "academic" => Ok(ProjectType::Academic),
            "research" => Ok(ProjectType::Research),
            "tool" => Ok(ProjectType::Tool),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "archived" => Ok(ProjectStatus::Archived),
            "in-development" => Ok(ProjectStatus::InDevelopment),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A portfolio entry. Immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub demo_type: DemoType,
    pub demo_url: Option<String>,
    pub hosted_path: Option<String>,
    pub status: ProjectStatus,
    pub date: NaiveDate,
}

impl Project {
    pub fn uses_technology(&self, technology: &str) -> bool {
        self.technologies
            .iter()
            .any(|t| t.eq_ignore_ascii_case(technology.trim()))
    }

    pub fn is_hosted(&self) -> bool {
        self.demo_type == DemoType::Hosted && self.hosted_path.is_some()
    }

    pub fn has_live_demo(&self) -> bool {
        self.demo_type == DemoType::Live && self.live_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}
