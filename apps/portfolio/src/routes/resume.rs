use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::errors::AppError;
use crate::resume::{ArtifactKind, BuiltArtifact};
use crate::state::AppState;

/// GET /resume/pdf
pub async fn pdf_inline(State(state): State<AppState>) -> Result<Response, AppError> {
    pdf(&state, "inline").await
}

/// GET /resume/download
pub async fn pdf_download(State(state): State<AppState>) -> Result<Response, AppError> {
    pdf(&state, "attachment").await
}

/// GET /resume/html
pub async fn html(State(state): State<AppState>) -> Result<Response, AppError> {
    let artifact = state.resume.ensure_html().await?;
    respond(&artifact, None).await
}

async fn pdf(state: &AppState, disposition: &str) -> Result<Response, AppError> {
    let artifact = state.resume.ensure_pdf().await?;
    let filename = state.personal.resume_file_name();
    respond(&artifact, Some(format!("{disposition}; filename=\"{filename}\""))).await
}

/// Serves the artifact with cache-busting headers. A PDF request that fell back
/// to HTML is served as HTML.
async fn respond(
    artifact: &BuiltArtifact,
    disposition: Option<String>,
) -> Result<Response, AppError> {
    debug!("Serving {} ({:?})", artifact.path.display(), artifact.stage);
    let bytes = tokio::fs::read(&artifact.path)
        .await
        .map_err(|e| AppError::Build(format!("reading {}: {e}", artifact.path.display())))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));

    match artifact.kind {
        ArtifactKind::Pdf => {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
            if let Some(disposition) = disposition {
                let value =
                    HeaderValue::from_str(&disposition).map_err(|e| AppError::Internal(e.into()))?;
                headers.insert(header::CONTENT_DISPOSITION, value);
            }
        }
        ArtifactKind::Html => {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            );
        }
    }

    Ok((headers, bytes).into_response())
}
