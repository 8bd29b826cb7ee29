//! External command execution
//!
//! Every deploy stage shells out to an existing tool (`npm`, `aws`). The
//! `CommandRunner` trait is the single seam between the pipeline and those
//! processes so tests can substitute a scripted fake.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Captured output of a completed external command
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Failure modes of an external command
#[derive(Debug)]
pub enum CommandError {
    /// The program could not be started (missing binary, permissions)
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The program ran and exited non-zero
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl CommandError {
    /// Captured stderr, or the spawn failure text when the program never ran.
    pub fn stderr(&self) -> String {
        match self {
            CommandError::Spawn { program, source } => {
                format!("failed to run {}: {}", program, source)
            }
            CommandError::Failed { stderr, .. } => stderr.clone(),
        }
    }
}

/// A single external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

/// Strategy for running external commands
pub trait CommandRunner {
    /// Run `program` with `args`, optionally in `cwd`, blocking until exit.
    ///
    /// Both stdout and stderr are captured; a non-zero exit is an error
    /// carrying the captured stderr.
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: Option<&Path>,
    ) -> Result<CommandOutput, CommandError>;
}

/// Production runner over `std::process::Command`
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: Option<&Path>,
    ) -> Result<CommandOutput, CommandError> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| CommandError::Spawn {
            program: program.to_string(),
            source: e,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(CommandError::Failed {
                program: program.to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

/// Convenience for building owned argument vectors
pub fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
