use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::catalog::ProjectCatalog;
use crate::models::personal::PersonalInfo;
use crate::models::project::Project;

const HOME_FEATURED_PROJECTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Terminal,
    Home,
    About,
    Projects,
    Contact,
    Resume,
    NotFound,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Terminal,
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Contact,
        Page::Resume,
        Page::NotFound,
    ];

    pub fn template_name(&self) -> &'static str {
        match self {
            Page::Terminal => "terminal",
            Page::Home => "home",
            Page::About => "about",
            Page::Projects => "projects",
            Page::Contact => "contact",
            Page::Resume => "resume",
            Page::NotFound => "not_found",
        }
    }

    /// The terminal splash page is a full document of its own; everything else
    /// is wrapped in the shared `base` layout.
    pub fn uses_layout(&self) -> bool {
        !matches!(self, Page::Terminal)
    }

    fn title(&self, personal: &PersonalInfo) -> String {
        let name = &personal.name;
        match self {
            Page::Terminal => format!("xiaoOS Terminal - {name}"),
            Page::Home => format!("{name} - {}", personal.title),
            Page::About => format!("About Me - {name}"),
            Page::Projects => format!("Projects - {name}"),
            Page::Contact => format!("Contact Me - {name}"),
            Page::Resume => format!("Resume - {name}"),
            Page::NotFound => format!("Page Not Found - {name}"),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Page::Terminal => "Welcome to xiaoOS - Portfolio system initialization and access point.",
            Page::Home => "Welcome to my portfolio showcasing my work in web development, software engineering, and creative projects.",
            Page::About => "Learn more about my background, skills, and experience in software development.",
            Page::Projects => "Explore my portfolio of web applications, software projects, and creative work.",
            Page::Contact => "Get in touch with me for collaboration opportunities or project inquiries.",
            Page::Resume => "View my professional experience, education, and skills.",
            Page::NotFound => "The page you're looking for doesn't exist or has been moved.",
        }
    }

    fn projects<'a>(&self, catalog: &'a ProjectCatalog) -> &'a [Project] {
        match self {
            Page::Home => catalog.featured(HOME_FEATURED_PROJECTS),
            Page::About | Page::Projects => catalog.all(),
            _ => &[],
        }
    }
}

/// Everything a page template can see.
#[derive(Debug, Serialize)]
pub struct PageData<'a> {
    pub title: String,
    pub description: &'static str,
    pub projects: &'a [Project],
    pub personal: &'a PersonalInfo,
    pub year: i32,
    pub template_name: &'static str,
    /// Unix seconds, appended to asset URLs for cache busting.
    pub timestamp: i64,
}

impl<'a> PageData<'a> {
    pub fn assemble(
        page: Page,
        catalog: &'a ProjectCatalog,
        personal: &'a PersonalInfo,
        now: DateTime<Utc>,
    ) -> Self {
        PageData {
            title: page.title(personal),
            description: page.description(),
            projects: page.projects(catalog),
            personal,
            year: now.year(),
            template_name: page.template_name(),
            timestamp: now.timestamp(),
        }
    }
}
