//! Typesetting engines in priority order, as plain data.

use std::path::Path;

use tracing::debug;

/// Where the served resume page finds its stylesheet.
pub const RESUME_STYLESHEET: &str = "/static/assets/resume.css";

/// LaTeX auxiliary files left next to the source after a compile.
const LATEX_BYPRODUCTS: &[&str] = &[
    "aux",
    "log",
    "out",
    "fdb_latexmk",
    "fls",
    "synctex.gz",
    "toc",
    "nav",
    "snm",
];

/// tex4ht leaves these on top of the usual LaTeX ones.
const HTLATEX_BYPRODUCTS: &[&str] = &[
    "aux", "log", "out", "toc", "4ct", "4tc", "idv", "lg", "tmp", "xref", "dvi",
];

/// One external tool that can turn the source into the target artifact.
///
/// `passes` is how many times the engine may be run before giving up on it;
/// the first pass that exits cleanly and leaves a fresh artifact wins.
#[derive(Debug, Clone)]
pub struct Engine {
    pub name: &'static str,
    pub program: &'static str,
    pub args: Vec<String>,
    pub passes: u8,
    pub byproducts: &'static [&'static str],
}

impl Engine {
    fn latex(name: &'static str, tex_file: &str, passes: u8) -> Self {
        Engine {
            name,
            program: name,
            args: vec!["-interaction=nonstopmode".to_string(), tex_file.to_string()],
            passes,
            byproducts: LATEX_BYPRODUCTS,
        }
    }
}

/// PDF engines, most capable first. `tex_file` is relative to the assets directory.
pub fn pdf_engines(tex_file: &str) -> Vec<Engine> {
    vec![
        Engine {
            name: "latexmk",
            program: "latexmk",
            args: vec![
                "-pdf".to_string(),
                "-interaction=nonstopmode".to_string(),
                tex_file.to_string(),
            ],
            // latexmk already reruns until references settle.
            passes: 1,
            byproducts: LATEX_BYPRODUCTS,
        },
        Engine::latex("lualatex", tex_file, 2),
        Engine::latex("xelatex", tex_file, 2),
        Engine::latex("pdflatex", tex_file, 2),
    ]
}

/// HTML converters. htlatex always writes `<stem>.html` next to the source.
pub fn html_engines(tex_file: &str, html_file: &str) -> Vec<Engine> {
    vec![
        Engine {
            name: "pandoc",
            program: "pandoc",
            args: [
                tex_file,
                "-o",
                html_file,
                "--mathjax",
                "--standalone",
                "--css",
                RESUME_STYLESHEET,
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            passes: 1,
            byproducts: &[],
        },
        Engine {
            name: "htlatex",
            program: "htlatex",
            args: vec![tex_file.to_string(), "xhtml,charset=utf-8".to_string()],
            passes: 1,
            byproducts: HTLATEX_BYPRODUCTS,
        },
    ]
}

/// Deletes `<stem>.<ext>` for each byproduct extension. Missing files are fine.
pub async fn remove_byproducts(dir: &Path, stem: &str, extensions: &[&str]) {
    for ext in extensions {
        let path = dir.join(format!("{stem}.{ext}"));
        match tokio::fs::remove_file(&path).await {
            Ok(()) => debug!("Removed build byproduct {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => debug!("Could not remove {}: {e}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_engine_priority() {
        let names: Vec<_> = pdf_engines("resume.tex").iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["latexmk", "lualatex", "xelatex", "pdflatex"]);
    }

    #[test]
    fn test_raw_engines_get_two_passes() {
        for engine in pdf_engines("resume.tex") {
            let expected = if engine.name == "latexmk" { 1 } else { 2 };
            assert_eq!(engine.passes, expected, "{}", engine.name);
            assert_eq!(engine.args.last().map(String::as_str), Some("resume.tex"));
        }
    }

    #[test]
    fn test_pandoc_writes_requested_file() {
        let engines = html_engines("cv.tex", "cv.html");
        assert_eq!(engines[0].name, "pandoc");
        assert_eq!(engines[0].args[..3], ["cv.tex", "-o", "cv.html"]);
        let css = engines[0].args.iter().position(|a| a == "--css").unwrap();
        assert_eq!(engines[0].args[css + 1], "/static/assets/resume.css");
        assert_eq!(engines[1].name, "htlatex");
    }

    #[tokio::test]
    async fn test_remove_byproducts_keeps_other_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["resume.aux", "resume.log", "resume.pdf", "resume.tex", "other.aux"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        remove_byproducts(dir.path(), "resume", LATEX_BYPRODUCTS).await;

        assert!(!dir.path().join("resume.aux").exists());
        assert!(!dir.path().join("resume.log").exists());
        assert!(dir.path().join("resume.pdf").exists());
        assert!(dir.path().join("resume.tex").exists());
        assert!(dir.path().join("other.aux").exists());
    }
}
