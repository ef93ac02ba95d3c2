// Resume build pipeline: LaTeX source -> PDF (or HTML) with ordered fallbacks.
// External tools run through `CommandRunner`; the built-in converter sits behind `LatexToHtml`.

pub mod engine;
pub mod freshness;
pub mod latex_html;
pub mod pipeline;
pub mod runner;

pub use latex_html::{BasicLatexConverter, LatexToHtml};
pub use pipeline::{ArtifactKind, BuiltArtifact, ResumeBuilder};
pub use runner::{CommandRunner, ProcessRunner};
