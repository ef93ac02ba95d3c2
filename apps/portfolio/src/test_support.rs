//! Test doubles shared by unit and router tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::Config;
use crate::contact::{ContactForm, MailError, Mailer};
use crate::resume::runner::{CommandRunner, Invocation, RunError, RunOutput};
use crate::state::AppState;

/// Scripted behaviour of one fake external program.
#[derive(Debug, Clone)]
pub enum Tool {
    Fail,
    /// Exits 0 without writing anything.
    SucceedSilently,
    /// Fails until call number `on_pass` (1-based), which writes `file` into the cwd and succeeds.
    Produce { file: String, on_pass: usize },
    Hang,
}

/// `CommandRunner` that never spawns anything. Programs without a scripted
/// behaviour are reported as not installed. Keyed by the program's file name.
#[derive(Default)]
pub struct FakeRunner {
    tools: HashMap<String, Tool>,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, program: &str, tool: Tool) -> Self {
        self.tools.insert(program.to_string(), tool);
        self
    }

    /// Program names in invocation order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, invocation: Invocation<'_>) -> Result<RunOutput, RunError> {
        let name = Path::new(invocation.program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(invocation.program)
            .to_string();

        let pass = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(name.clone());
            calls.iter().filter(|c| **c == name).count()
        };

        let ok = |success: bool| RunOutput {
            success,
            code: Some(if success { 0 } else { 1 }),
            log: String::new(),
        };

        match self.tools.get(&name) {
            None => Err(RunError::NotInstalled { program: name }),
            Some(Tool::Fail) => Ok(ok(false)),
            Some(Tool::SucceedSilently) => Ok(ok(true)),
            Some(Tool::Hang) => Err(RunError::TimedOut {
                program: name,
                timeout: invocation.timeout,
            }),
            Some(Tool::Produce { file, on_pass }) => {
                if pass < *on_pass {
                    return Ok(ok(false));
                }
                std::fs::write(invocation.cwd.join(file), b"%PDF-1.5 fake").unwrap();
                Ok(ok(true))
            }
        }
    }
}

/// Mailer that records submissions instead of sending them.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ContactForm>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<ContactForm> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, form: &ContactForm) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::NotConfigured(vec!["SMTP_PASSWORD"]));
        }
        self.sent.lock().unwrap().push(form.clone());
        Ok(())
    }
}

pub fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Configuration using the shipped templates and a scratch directory for the resume.
/// The shipped resume source is copied into `scratch` so builds never touch the tree.
pub fn test_config(scratch: &Path, overrides: &[(&str, &str)]) -> Config {
    let source = scratch.join("resume.tex");
    std::fs::copy(manifest_dir().join("static/assets/resume.tex"), &source).unwrap();

    let mut vars: HashMap<String, String> = HashMap::from([
        ("TEMPLATES_DIR".to_string(), path_str(&manifest_dir().join("templates"))),
        ("STATIC_DIR".to_string(), path_str(&manifest_dir().join("static"))),
        ("HOSTED_DIR".to_string(), path_str(&scratch.join("hosted"))),
        ("RESUME_TEX_PATH".to_string(), path_str(&source)),
        (
            "RESUME_BUILD_SCRIPT".to_string(),
            path_str(&scratch.join("build-resume.sh")),
        ),
        ("ENFORCE_CANONICAL_HOST".to_string(), "false".to_string()),
        ("SITE_URL".to_string(), "https://www.example.com".to_string()),
    ]);
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

pub fn test_state(config: Config, mailer: Arc<RecordingMailer>, runner: Arc<FakeRunner>) -> AppState {
    AppState::build(config, mailer, runner).unwrap()
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
