use std::sync::Arc;

use anyhow::Result;

use crate::catalog::ProjectCatalog;
use crate::config::Config;
use crate::contact::Mailer;
use crate::content;
use crate::models::personal::PersonalInfo;
use crate::pages::TemplateRenderer;
use crate::resume::{BasicLatexConverter, CommandRunner, ResumeBuilder};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything except the resume builder's lock is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<ProjectCatalog>,
    pub personal: Arc<PersonalInfo>,
    pub templates: Arc<TemplateRenderer>,
    /// Pluggable mail backend. Default: SmtpMailer.
    pub mailer: Arc<dyn Mailer>,
    pub resume: Arc<ResumeBuilder>,
}

impl AppState {
    /// Loads templates and seed content. Fails if a page template is missing.
    pub fn build(
        config: Config,
        mailer: Arc<dyn Mailer>,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self> {
        let templates = TemplateRenderer::load(&config.templates_dir)?;
        let personal = content::personal_info();
        let converter = BasicLatexConverter::new(format!("{} - Resume", personal.name));
        let resume = ResumeBuilder::new(&config.resume, runner, Box::new(converter));

        Ok(Self {
            catalog: Arc::new(ProjectCatalog::new(content::projects())),
            personal: Arc::new(personal),
            templates: Arc::new(templates),
            mailer,
            resume: Arc::new(resume),
            config: Arc::new(config),
        })
    }
}
