use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::catalog::ProjectFilter;
use crate::errors::AppError;
use crate::models::project::{Project, ProjectStatus, ProjectType};
use crate::state::AppState;

/// Optional filters for `GET /api/projects`. Blank values are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub status: Option<String>,
    pub technology: Option<String>,
}

impl ProjectQuery {
    /// `None` when a type or status names no known variant, which matches nothing.
    fn into_filter(self) -> Option<ProjectFilter> {
        Some(ProjectFilter {
            project_type: parse_optional(self.project_type)?,
            status: parse_optional(self.status)?,
            technology: self.technology.filter(|t| !t.trim().is_empty()),
        })
    }
}

fn parse_optional<T: FromStr>(raw: Option<String>) -> Option<Option<T>> {
    match raw.filter(|v| !v.trim().is_empty()) {
        None => Some(None),
        Some(v) => v.parse().ok().map(Some),
    }
}

fn owned(projects: Vec<&Project>) -> Json<Vec<Project>> {
    Json(projects.into_iter().cloned().collect())
}

/// GET /api/projects?type=&status=&technology=
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Json<Vec<Project>> {
    match query.into_filter() {
        Some(filter) => owned(state.catalog.filter(&filter)),
        None => Json(Vec::new()),
    }
}

/// GET /api/projects/types
pub async fn project_types(State(state): State<AppState>) -> Json<Vec<ProjectType>> {
    Json(state.catalog.available_types())
}

/// GET /api/projects/type/:type
pub async fn projects_by_type(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Json<Vec<Project>> {
    match raw.parse::<ProjectType>() {
        Ok(project_type) => owned(state.catalog.by_type(project_type)),
        Err(e) => {
            debug!("Project type lookup: {e}");
            Json(Vec::new())
        }
    }
}

/// GET /api/projects/status/:status
pub async fn projects_by_status(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Json<Vec<Project>> {
    match raw.parse::<ProjectStatus>() {
        Ok(status) => owned(state.catalog.by_status(status)),
        Err(e) => {
            debug!("Project status lookup: {e}");
            Json(Vec::new())
        }
    }
}

/// GET /api/projects/type/:type/status/:status
pub async fn projects_by_type_and_status(
    State(state): State<AppState>,
    Path((raw_type, raw_status)): Path<(String, String)>,
) -> Json<Vec<Project>> {
    match (raw_type.parse::<ProjectType>(), raw_status.parse::<ProjectStatus>()) {
        (Ok(project_type), Ok(status)) => {
            owned(state.catalog.by_type_and_status(project_type, status))
        }
        _ => Json(Vec::new()),
    }
}

/// GET /api/projects/technology/:tech
pub async fn projects_by_technology(
    State(state): State<AppState>,
    Path(technology): Path<String>,
) -> Json<Vec<Project>> {
    owned(state.catalog.by_technology(&technology))
}

/// GET /api/projects/live
pub async fn live_demos(State(state): State<AppState>) -> Json<Vec<Project>> {
    owned(state.catalog.with_live_demo())
}

/// GET /api/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project '{id}' not found")))
}
