//! Filesystem-based cache validity: a derived artifact is stale when it is
//! missing or strictly older than its source.

use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Returns `true` when `artifact` must be rebuilt from `source`.
///
/// Errors only if the source itself cannot be stat'ed.
pub async fn needs_rebuild(source: &Path, artifact: &Path) -> io::Result<bool> {
    let source_modified = tokio::fs::metadata(source).await?.modified()?;

    let artifact_modified = match tokio::fs::metadata(artifact).await {
        Ok(meta) => meta.modified()?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(e),
    };

    Ok(artifact_modified < source_modified)
}

/// Modification time of `path`, or `None` when it does not exist or cannot be read.
pub async fn modified_time(path: &Path) -> Option<SystemTime> {
    tokio::fs::metadata(path).await.ok()?.modified().ok()
}

/// Whether a tool wrote `artifact`, given its modification time before the run.
/// The source's timestamp plays no part.
pub async fn was_written(artifact: &Path, before: Option<SystemTime>) -> bool {
    match modified_time(artifact).await {
        Some(after) => Some(after) != before,
        None => false,
    }
}
