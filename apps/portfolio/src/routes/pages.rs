use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;

use crate::errors::AppError;
use crate::pages::{Page, PageData};
use crate::state::AppState;

fn render(state: &AppState, page: Page) -> Result<Html<String>, AppError> {
    let data = PageData::assemble(page, &state.catalog, &state.personal, Utc::now());
    Ok(Html(state.templates.render_page(&data)?))
}

/// GET /
pub async fn terminal(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, Page::Terminal)
}

/// GET /home
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, Page::Home)
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, Page::About)
}

/// GET /projects
pub async fn projects(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, Page::Projects)
}

/// GET /contact
pub async fn contact(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, Page::Contact)
}

/// GET /resume
pub async fn resume(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, Page::Resume)
}

/// Fallback for every unmatched path.
pub async fn not_found(State(state): State<AppState>) -> Response {
    match render(&state, Page::NotFound) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(e) => e.into_response(),
    }
}
