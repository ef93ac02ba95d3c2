use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::ResumeConfig;
use crate::errors::AppError;
use crate::resume::engine::{self, Engine};
use crate::resume::freshness::{self, needs_rebuild};
use crate::resume::latex_html::LatexToHtml;
use crate::resume::runner::{CommandRunner, Invocation, RunError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Pdf,
    Html,
}

/// Which stage of the fallback chain produced the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStage {
    UpToDate,
    Engine(&'static str),
    Script,
    Builtin,
}

#[derive(Debug, Clone)]
pub struct BuiltArtifact {
    pub path: PathBuf,
    pub kind: ArtifactKind,
    pub stage: BuildStage,
}

/// Keeps `<stem>.pdf` and `<stem>.html` next to the LaTeX source up to date.
///
/// Builds are serialized by one mutex: the PDF fallback and the HTML route both
/// write the HTML file. Staleness is re-checked after the lock is taken, so
/// requests that queued behind a build just pick up its result.
pub struct ResumeBuilder {
    source: PathBuf,
    assets_dir: PathBuf,
    tex_file: String,
    stem: String,
    pdf_path: PathBuf,
    html_path: PathBuf,
    script: PathBuf,
    timeout: Duration,
    runner: Arc<dyn CommandRunner>,
    converter: Box<dyn LatexToHtml>,
    build_lock: Mutex<()>,
}

impl ResumeBuilder {
    pub fn new(
        config: &ResumeConfig,
        runner: Arc<dyn CommandRunner>,
        converter: Box<dyn LatexToHtml>,
    ) -> Self {
        let source = absolute(&config.source);
        let assets_dir = source
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let tex_file = file_name(&source, "resume.tex");
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("resume")
            .to_string();

        Self {
            pdf_path: assets_dir.join(format!("{stem}.pdf")),
            html_path: assets_dir.join(format!("{stem}.html")),
            script: absolute(&config.build_script),
            timeout: config.build_timeout,
            source,
            assets_dir,
            tex_file,
            stem,
            runner,
            converter,
            build_lock: Mutex::new(()),
        }
    }

    /// Returns a fresh PDF, or the built-in HTML rendition when no PDF toolchain works.
    pub async fn ensure_pdf(&self) -> Result<BuiltArtifact, AppError> {
        self.check_source().await?;
        if !self.is_stale(&self.pdf_path).await? {
            return Ok(self.artifact(ArtifactKind::Pdf, BuildStage::UpToDate));
        }

        let _guard = self.build_lock.lock().await;
        if !self.is_stale(&self.pdf_path).await? {
            return Ok(self.artifact(ArtifactKind::Pdf, BuildStage::UpToDate));
        }

        info!("Resume PDF is missing or older than {}, rebuilding", self.tex_file);
        let engines = engine::pdf_engines(&self.tex_file);
        if let Some(name) = self.try_engines(&engines, &self.pdf_path).await? {
            return Ok(self.artifact(ArtifactKind::Pdf, BuildStage::Engine(name)));
        }
        if self.try_script().await? {
            return Ok(self.artifact(ArtifactKind::Pdf, BuildStage::Script));
        }

        warn!("No PDF toolchain succeeded, falling back to built-in HTML conversion");
        self.build_builtin().await?;
        Ok(self.artifact(ArtifactKind::Html, BuildStage::Builtin))
    }

    pub async fn ensure_html(&self) -> Result<BuiltArtifact, AppError> {
        self.check_source().await?;
        if !self.is_stale(&self.html_path).await? {
            return Ok(self.artifact(ArtifactKind::Html, BuildStage::UpToDate));
        }

        let _guard = self.build_lock.lock().await;
        if !self.is_stale(&self.html_path).await? {
            return Ok(self.artifact(ArtifactKind::Html, BuildStage::UpToDate));
        }

        info!("Resume HTML is missing or older than {}, rebuilding", self.tex_file);
        let html_file = file_name(&self.html_path, "resume.html");
        let engines = engine::html_engines(&self.tex_file, &html_file);
        if let Some(name) = self.try_engines(&engines, &self.html_path).await? {
            return Ok(self.artifact(ArtifactKind::Html, BuildStage::Engine(name)));
        }

        warn!("No HTML converter succeeded, using built-in conversion");
        self.build_builtin().await?;
        Ok(self.artifact(ArtifactKind::Html, BuildStage::Builtin))
    }

    fn artifact(&self, kind: ArtifactKind, stage: BuildStage) -> BuiltArtifact {
        let path = match kind {
            ArtifactKind::Pdf => self.pdf_path.clone(),
            ArtifactKind::Html => self.html_path.clone(),
        };
        BuiltArtifact { path, kind, stage }
    }

    async fn check_source(&self) -> Result<(), AppError> {
        match tokio::fs::metadata(&self.source).await {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(source_not_found()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(source_not_found()),
            Err(e) => Err(AppError::Internal(
                anyhow!(e).context(format!("Failed to stat {}", self.source.display())),
            )),
        }
    }

    async fn is_stale(&self, artifact: &Path) -> Result<bool, AppError> {
        needs_rebuild(&self.source, artifact).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                source_not_found()
            } else {
                AppError::Internal(anyhow!(e).context("Failed to compare resume timestamps"))
            }
        })
    }

    /// Runs each engine in order; the first pass that exits cleanly and writes
    /// `target` wins. Returns the winning engine's name.
    async fn try_engines(
        &self,
        engines: &[Engine],
        target: &Path,
    ) -> Result<Option<&'static str>, AppError> {
        'engines: for engine in engines {
            for pass in 1..=engine.passes {
                let invocation = Invocation {
                    program: engine.program,
                    args: &engine.args,
                    cwd: &self.assets_dir,
                    timeout: self.timeout,
                };
                let before = freshness::modified_time(target).await;

                match self.runner.run(invocation).await {
                    Err(RunError::NotInstalled { .. }) => {
                        debug!("{} is not installed, skipping", engine.name);
                        continue 'engines;
                    }
                    Err(e) => {
                        warn!("{e}");
                        continue 'engines;
                    }
                    Ok(output) if output.success => {
                        if freshness::was_written(target, before).await {
                            info!(engine = engine.name, pass, "Resume built");
                            engine::remove_byproducts(&self.assets_dir, &self.stem, engine.byproducts)
                                .await;
                            return Ok(Some(engine.name));
                        }
                        debug!(
                            "{} pass {pass} exited cleanly but did not write {}",
                            engine.name,
                            target.display()
                        );
                    }
                    Ok(output) => {
                        debug!(
                            "{} pass {pass} failed (exit code {:?}): {}",
                            engine.name,
                            output.code,
                            log_tail(&output.log)
                        );
                    }
                }
            }
        }
        Ok(None)
    }

    async fn try_script(&self) -> Result<bool, AppError> {
        let program = self.script.to_string_lossy();
        let args = [self.source.to_string_lossy().into_owned()];
        let invocation = Invocation {
            program: &program,
            args: &args,
            cwd: &self.assets_dir,
            timeout: self.timeout,
        };
        let before = freshness::modified_time(&self.pdf_path).await;

        match self.runner.run(invocation).await {
            Err(RunError::NotInstalled { .. }) => {
                debug!("Build script {} not found", self.script.display());
                Ok(false)
            }
            Err(e) => {
                warn!("{e}");
                Ok(false)
            }
            Ok(output) if output.success => {
                let written = freshness::was_written(&self.pdf_path, before).await;
                if written {
                    info!("Resume built by {}", self.script.display());
                } else {
                    debug!("Build script exited cleanly but did not write a PDF");
                }
                Ok(written)
            }
            Ok(output) => {
                debug!(
                    "Build script failed (exit code {:?}): {}",
                    output.code,
                    log_tail(&output.log)
                );
                Ok(false)
            }
        }
    }

    async fn build_builtin(&self) -> Result<(), AppError> {
        let document = tokio::fs::read_to_string(&self.source)
            .await
            .map_err(|e| AppError::Build(format!("reading {}: {e}", self.source.display())))?;
        let html = self.converter.render(&document);
        tokio::fs::write(&self.html_path, html)
            .await
            .map_err(|e| AppError::Build(format!("writing {}: {e}", self.html_path.display())))?;
        info!("Wrote built-in HTML resume to {}", self.html_path.display());
        Ok(())
    }
}

fn source_not_found() -> AppError {
    AppError::NotFound("Resume LaTeX file not found".to_string())
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn file_name(path: &Path, default: &str) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(default)
        .to_string()
}

fn log_tail(log: &str) -> &str {
    let trimmed = log.trim_end();
    let mut start = trimmed.len().saturating_sub(400);
    while !trimmed.is_char_boundary(start) {
        start += 1;
    }
    &trimmed[start..]
}
