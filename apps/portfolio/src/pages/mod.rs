// Page assembly and Handlebars rendering.
// Page data is plain Serialize structs; templates live on disk and are loaded once at startup.

pub mod data;
pub mod renderer;

pub use data::{Page, PageData};
pub use renderer::TemplateRenderer;
