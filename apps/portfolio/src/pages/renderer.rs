use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::pages::data::{Page, PageData};

const TEMPLATE_EXTENSION: &str = "hbs";
const LAYOUT_TEMPLATE: &str = "base";

// "2025-09-11" -> "Sep 2025"; anything unparseable passes through untouched.
handlebars_helper!(month_year: |date: str| {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
});

#[derive(Serialize)]
struct LayoutData<'a> {
    #[serde(flatten)]
    page: &'a PageData<'a>,
    body: String,
}

/// Handlebars registry holding every page template, keyed by file stem.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Registers every `*.hbs` file in `dir`. Fails if the layout or any page template is missing.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_helper("month_year", Box::new(month_year));

        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read templates directory {}", dir.display()))?;

        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            registry
                .register_template_file(name, &path)
                .map_err(|e| anyhow!("Failed to parse template {}: {e}", path.display()))?;
            debug!("Registered template '{name}'");
        }

        let required = Page::ALL
            .iter()
            .map(|p| p.template_name())
            .chain(std::iter::once(LAYOUT_TEMPLATE));
        for name in required {
            if !registry.has_template(name) {
                bail!("Template '{name}.{TEMPLATE_EXTENSION}' not found in {}", dir.display());
            }
        }

        info!(
            "Loaded {} templates from {}",
            registry.get_templates().len(),
            dir.display()
        );
        Ok(Self { registry })
    }

    /// Renders the page template and, unless the page is standalone, wraps it in the layout.
    pub fn render_page(&self, data: &PageData<'_>) -> Result<String, AppError> {
        let body = self.registry.render(data.template_name, data)?;

        let standalone = Page::ALL
            .iter()
            .find(|p| p.template_name() == data.template_name)
            .is_some_and(|p| !p.uses_layout());
        if standalone {
            return Ok(body);
        }

        let layout = LayoutData { page: data, body };
        Ok(self.registry.render(LAYOUT_TEMPLATE, &layout)?)
    }
}
