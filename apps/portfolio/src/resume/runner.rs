//! Subprocess execution for typesetting engines and the build script.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("{program} is not installed")]
    NotInstalled { program: String },

    #[error("{program} timed out after {}s", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },

    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// A single external program invocation.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    pub program: &'a str,
    pub args: &'a [String],
    pub cwd: &'a Path,
    pub timeout: Duration,
}

/// Exit status and combined stdout/stderr of a finished process.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub log: String,
}

/// Runs external programs. Swappable so the pipeline can be exercised without a TeX install.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, invocation: Invocation<'_>) -> Result<RunOutput, RunError>;
}

/// Production runner backed by `tokio::process`.
///
/// The child runs with its own working directory, so the server's cwd is never touched.
/// If the timeout fires the output future is dropped and `kill_on_drop` reaps the child.
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: Invocation<'_>) -> Result<RunOutput, RunError> {
        let Invocation {
            program,
            args,
            cwd,
            timeout,
        } = invocation;

        let mut command = Command::new(program);
        command
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(timeout, command.output()).await {
            Err(_) => {
                return Err(RunError::TimedOut {
                    program: program.to_string(),
                    timeout,
                })
            }
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RunError::NotInstalled {
                    program: program.to_string(),
                })
            }
            Ok(Err(source)) => {
                return Err(RunError::Io {
                    program: program.to_string(),
                    source,
                })
            }
            Ok(Ok(output)) => output,
        };

        let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
        log.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(RunOutput {
            success: output.status.success(),
            code: output.status.code(),
            log,
        })
    }
}
