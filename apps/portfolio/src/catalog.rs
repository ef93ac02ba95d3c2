//! Read-only project catalog.
//!
//! Every query borrows from the catalog and returns matches in insertion order.
//! Nothing here mutates the underlying list.

use crate::models::project::{Project, ProjectStatus, ProjectType};

/// Conjunction of optional predicates. An empty filter matches every project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub project_type: Option<ProjectType>,
    pub status: Option<ProjectStatus>,
    pub technology: Option<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        self.project_type.map_or(true, |t| project.project_type == t)
            && self.status.map_or(true, |s| project.status == s)
            && self
                .technology
                .as_deref()
                .map_or(true, |tech| project.uses_technology(tech))
    }
}

#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The first `n` projects, used for the home page teaser.
    pub fn featured(&self, n: usize) -> &[Project] {
        &self.projects[..n.min(self.projects.len())]
    }

    pub fn filter(&self, filter: &ProjectFilter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }

    pub fn by_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.filter(&ProjectFilter {
            status: Some(status),
            ..Default::default()
        })
    }

    pub fn by_type(&self, project_type: ProjectType) -> Vec<&Project> {
        self.filter(&ProjectFilter {
            project_type: Some(project_type),
            ..Default::default()
        })
    }

    pub fn by_technology(&self, technology: &str) -> Vec<&Project> {
        self.filter(&ProjectFilter {
            technology: Some(technology.to_string()),
            ..Default::default()
        })
    }

    pub fn by_type_and_status(
        &self,
        project_type: ProjectType,
        status: ProjectStatus,
    ) -> Vec<&Project> {
        self.filter(&ProjectFilter {
            project_type: Some(project_type),
            status: Some(status),
            technology: None,
        })
    }

    /// Distinct project types, in order of first appearance.
    pub fn available_types(&self) -> Vec<ProjectType> {
        let mut types = Vec::new();
        for project in &self.projects {
            if !types.contains(&project.project_type) {
                types.push(project.project_type);
            }
        }
        types
    }

    /// Projects whose demo is served from this site under `/hosted/`.
    pub fn hosted(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.is_hosted()).collect()
    }

    /// Projects deployed elsewhere with a usable live link.
    pub fn with_live_demo(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.has_live_demo()).collect()
    }
}
